use crate::type_chart::registry::TypeChartRegistry;
use crate::type_map::TypeMap;
use schema::{ChartData, ChartId, DamageRelations, PokemonType};
use std::collections::BTreeMap;

/// A builder for chart data with every era-appropriate type declared and
/// every matchup neutral unless stated otherwise.
///
/// # Example
/// ```ignore
/// let chart = TestChartBuilder::new(ChartId::Gen6Plus)
///     .with_double(PokemonType::Ice, &[PokemonType::Water])
///     .build();
/// ```
pub struct TestChartBuilder {
    id: ChartId,
    damage_relations: BTreeMap<PokemonType, DamageRelations>,
}

impl TestChartBuilder {
    /// Creates a builder with no relations at all.
    pub fn new(id: ChartId) -> Self {
        Self {
            id,
            damage_relations: BTreeMap::new(),
        }
    }

    /// Starts from the compiled chart for `id`.
    pub fn from_compiled(id: ChartId) -> Self {
        let data = compiled_registry().chart(id).to_chart_data();
        Self {
            id,
            damage_relations: data.damage_relations,
        }
    }

    pub fn with_double(mut self, attacker: PokemonType, defenders: &[PokemonType]) -> Self {
        self.relations(attacker)
            .double_damage_to
            .extend_from_slice(defenders);
        self
    }

    pub fn with_none(mut self, attacker: PokemonType, defenders: &[PokemonType]) -> Self {
        self.relations(attacker)
            .no_damage_to
            .extend_from_slice(defenders);
        self
    }

    /// Drops every relation `attacker` has towards `defender`.
    pub fn without(mut self, attacker: PokemonType, defender: PokemonType) -> Self {
        let relations = self.relations(attacker);
        relations.double_damage_to.retain(|t| *t != defender);
        relations.half_damage_to.retain(|t| *t != defender);
        relations.no_damage_to.retain(|t| *t != defender);
        self
    }

    fn relations(&mut self, attacker: PokemonType) -> &mut DamageRelations {
        self.damage_relations.entry(attacker).or_default()
    }

    /// Builds the raw `ChartData`, unvalidated.
    pub fn build(self) -> ChartData {
        ChartData {
            id: self.id,
            type_names: self.id.expected_types(),
            damage_relations: self.damage_relations,
        }
    }
}

/// A fresh registry over the compiled charts, isolated from the global one.
pub fn compiled_registry() -> TypeChartRegistry {
    match TypeChartRegistry::new() {
        Ok(registry) => registry,
        Err(err) => panic!("Compiled charts failed to load: {}", err),
    }
}

/// Neutral-only charts for every id, with `replacement` swapped in for its id.
pub fn registry_with(replacement: ChartData) -> TypeChartRegistry {
    let charts = ChartId::all().map(|id| {
        if id == replacement.id {
            replacement.clone()
        } else {
            TestChartBuilder::new(id).build()
        }
    });
    match TypeChartRegistry::from_chart_data(charts) {
        Ok(registry) => registry,
        Err(err) => panic!("Test charts failed to load: {}", err),
    }
}

/// Type map built straight from chart data, panicking on invalid data.
pub fn type_map_of(data: ChartData) -> TypeMap {
    match crate::type_chart::TypeChart::new(data) {
        Ok(chart) => TypeMap::build(&chart),
        Err(err) => panic!("Test chart is invalid: {}", err),
    }
}
