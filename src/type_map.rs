//! Dense (attacker, defender) lookup compiled from a chart's relation lists.

use crate::effectiveness::Multiplier;
use crate::errors::{TypeChartError, TypeChartResult};
use crate::type_chart::{parse_type_for, TypeChart};
use schema::{ChartId, PokemonType};
use strum::EnumCount;
use tracing::debug;

const TYPE_COUNT: usize = PokemonType::COUNT;

/// Outcome of one attacking type hitting one defending type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Relation {
    NoDamage,
    HalfDamage,
    #[default]
    Neutral,
    DoubleDamage,
}

impl Relation {
    /// Fixed-point value where 4 = 1x.
    pub const fn quarters(self) -> u16 {
        match self {
            Relation::NoDamage => 0,
            Relation::HalfDamage => 2,
            Relation::Neutral => 4,
            Relation::DoubleDamage => 8,
        }
    }

    pub fn multiplier(self) -> Multiplier {
        match self {
            Relation::NoDamage => Multiplier::Immune,
            Relation::HalfDamage => Multiplier::Half,
            Relation::Neutral => Multiplier::Neutral,
            Relation::DoubleDamage => Multiplier::Double,
        }
    }
}

/// Constant-time relation lookup for one chart.
///
/// Rows are attackers and columns defenders, both indexed by
/// `PokemonType::index`. Pairs the chart never mentions stay `Neutral`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMap {
    chart_id: ChartId,
    type_names: Vec<PokemonType>,
    recognized: [bool; TYPE_COUNT],
    table: [[Relation; TYPE_COUNT]; TYPE_COUNT],
}

impl TypeMap {
    /// Compile a validated chart. Rebuilding from the same chart yields an equal map.
    pub fn build(chart: &TypeChart) -> Self {
        let mut table = [[Relation::Neutral; TYPE_COUNT]; TYPE_COUNT];

        for (attacker, relations) in chart.relations() {
            let row = &mut table[attacker.index()];
            for defender in &relations.double_damage_to {
                row[defender.index()] = Relation::DoubleDamage;
            }
            for defender in &relations.half_damage_to {
                row[defender.index()] = Relation::HalfDamage;
            }
            for defender in &relations.no_damage_to {
                row[defender.index()] = Relation::NoDamage;
            }
        }

        let mut recognized = [false; TYPE_COUNT];
        for pokemon_type in chart.type_names() {
            recognized[pokemon_type.index()] = true;
        }

        debug!(chart = %chart.id(), types = chart.type_names().len(), "built type map");

        TypeMap {
            chart_id: chart.id(),
            type_names: chart.type_names().to_vec(),
            recognized,
            table,
        }
    }

    pub fn chart_id(&self) -> ChartId {
        self.chart_id
    }

    /// Recognized types in the chart's enumeration order.
    pub fn type_names(&self) -> &[PokemonType] {
        &self.type_names
    }

    pub fn recognizes(&self, pokemon_type: PokemonType) -> bool {
        self.recognized[pokemon_type.index()]
    }

    /// Pass a type through if this chart knows it, otherwise `InvalidTypeName`.
    pub fn ensure_recognized(&self, pokemon_type: PokemonType) -> TypeChartResult<PokemonType> {
        if self.recognizes(pokemon_type) {
            Ok(pokemon_type)
        } else {
            Err(TypeChartError::InvalidTypeName {
                chart: self.chart_id,
                name: pokemon_type.as_str().to_string(),
            })
        }
    }

    /// Resolve a type name against this map's chart.
    pub fn resolve(&self, name: &str) -> TypeChartResult<PokemonType> {
        parse_type_for(self.chart_id, name)
    }

    pub fn relation(
        &self,
        attacker: PokemonType,
        defender: PokemonType,
    ) -> TypeChartResult<Relation> {
        self.ensure_recognized(attacker)?;
        self.ensure_recognized(defender)?;
        Ok(self.relation_unchecked(attacker, defender))
    }

    /// Callers must have checked both types with `ensure_recognized`.
    pub(crate) fn relation_unchecked(
        &self,
        attacker: PokemonType,
        defender: PokemonType,
    ) -> Relation {
        self.table[attacker.index()][defender.index()]
    }
}

pub fn build_type_map(chart: &TypeChart) -> TypeMap {
    TypeMap::build(chart)
}
