//! Immutable, validated type charts.
//!
//! A `TypeChart` can only be obtained through validation, so everything
//! downstream (type maps, multipliers, grouping) may assume the closure and
//! no-overlap invariants hold.

pub mod registry;

use crate::errors::{TypeChartError, TypeChartResult};
use schema::{validate_chart_data, ChartData, ChartId, DamageRelations, PokemonType};
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

/// One named ruleset: its recognized types and per-attacker damage relations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeChart {
    id: ChartId,
    type_names: Vec<PokemonType>,
    damage_relations: BTreeMap<PokemonType, DamageRelations>,
}

impl TypeChart {
    /// Validate raw chart data and freeze it. Fails on the first integrity issue.
    pub fn new(data: ChartData) -> TypeChartResult<Self> {
        if let Some(issue) = validate_chart_data(&data).into_iter().next() {
            return Err(TypeChartError::from_issue(data.id, issue));
        }

        Ok(TypeChart {
            id: data.id,
            type_names: data.type_names,
            damage_relations: data.damage_relations,
        })
    }

    pub fn id(&self) -> ChartId {
        self.id
    }

    /// Recognized types in the chart's fixed enumeration order.
    pub fn type_names(&self) -> &[PokemonType] {
        &self.type_names
    }

    pub fn relations_for(&self, attacker: PokemonType) -> Option<&DamageRelations> {
        self.damage_relations.get(&attacker)
    }

    pub fn relations(&self) -> impl Iterator<Item = (PokemonType, &DamageRelations)> {
        self.damage_relations
            .iter()
            .map(|(attacker, relations)| (*attacker, relations))
    }

    pub fn recognizes(&self, pokemon_type: PokemonType) -> bool {
        self.id.recognizes(pokemon_type)
    }

    /// Resolve a caller-supplied name against this chart's era.
    pub fn parse_type_name(&self, name: &str) -> TypeChartResult<PokemonType> {
        parse_type_for(self.id, name)
    }

    /// Back to the raw boundary shape, e.g. to derive a modified chart.
    pub fn to_chart_data(&self) -> ChartData {
        ChartData {
            id: self.id,
            type_names: self.type_names.clone(),
            damage_relations: self.damage_relations.clone(),
        }
    }
}

/// Case-insensitive type lookup restricted to the types `chart` recognizes.
pub(crate) fn parse_type_for(chart: ChartId, name: &str) -> TypeChartResult<PokemonType> {
    PokemonType::from_str(name.trim())
        .ok()
        .filter(|pokemon_type| chart.recognizes(*pokemon_type))
        .ok_or_else(|| TypeChartError::InvalidTypeName {
            chart,
            name: name.to_string(),
        })
}

impl TryFrom<ChartData> for TypeChart {
    type Error = TypeChartError;

    fn try_from(data: ChartData) -> TypeChartResult<Self> {
        TypeChart::new(data)
    }
}

/// Encodings accepted for externally supplied chart files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Ron,
    Json,
}

impl ChartFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ron") => Some(ChartFormat::Ron),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(ChartFormat::Json),
            _ => None,
        }
    }
}

/// Parse chart data without validating it.
pub fn parse_chart_data(content: &str, format: ChartFormat) -> TypeChartResult<ChartData> {
    match format {
        ChartFormat::Ron => {
            ron::from_str(content).map_err(|e| TypeChartError::ChartParse(e.to_string()))
        }
        ChartFormat::Json => {
            serde_json::from_str(content).map_err(|e| TypeChartError::ChartParse(e.to_string()))
        }
    }
}

/// The offline validation pass: every integrity issue in the chart, as errors.
pub fn check_chart_data(data: &ChartData) -> Vec<TypeChartError> {
    validate_chart_data(data)
        .into_iter()
        .map(|issue| TypeChartError::from_issue(data.id, issue))
        .collect()
}
