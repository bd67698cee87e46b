use crate::{ChartId, PokemonType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Damage dealt by one attacking type, split by outcome.
///
/// Declared one-directionally: nothing here says anything about how the
/// listed types fare when they attack back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub double_damage_to: Vec<PokemonType>,
    #[serde(default)]
    pub half_damage_to: Vec<PokemonType>,
    #[serde(default)]
    pub no_damage_to: Vec<PokemonType>,
}

impl DamageRelations {
    /// Every defender mentioned, in the order: doubled, halved, none.
    pub fn referenced_types(&self) -> impl Iterator<Item = PokemonType> + '_ {
        self.double_damage_to
            .iter()
            .chain(&self.half_damage_to)
            .chain(&self.no_damage_to)
            .copied()
    }
}

/// One chart as supplied by a data file, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub id: ChartId,
    pub type_names: Vec<PokemonType>,
    #[serde(default)]
    pub damage_relations: BTreeMap<PokemonType, DamageRelations>,
}

/// A data-integrity defect found by `validate_chart_data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartDataIssue {
    /// The same defender sits in more than one relation set of one attacker.
    OverlappingRelation {
        attacker: PokemonType,
        defender: PokemonType,
    },
    /// A relation mentions a type the chart does not declare. When the
    /// attacker key itself is undeclared, `referenced == attacker`.
    UndeclaredType {
        attacker: PokemonType,
        referenced: PokemonType,
    },
    DuplicateTypeName(PokemonType),
    /// `typeNames` disagrees with the types the chart id recognizes.
    TypeSetMismatch {
        missing: Vec<PokemonType>,
        unexpected: Vec<PokemonType>,
    },
}

impl fmt::Display for ChartDataIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartDataIssue::OverlappingRelation { attacker, defender } => write!(
                f,
                "{} appears in more than one damage relation set of {}",
                defender, attacker
            ),
            ChartDataIssue::UndeclaredType {
                attacker,
                referenced,
            } if attacker == referenced => {
                write!(f, "relations declared for undeclared type {}", attacker)
            }
            ChartDataIssue::UndeclaredType {
                attacker,
                referenced,
            } => write!(
                f,
                "relations of {} reference undeclared type {}",
                attacker, referenced
            ),
            ChartDataIssue::DuplicateTypeName(pokemon_type) => {
                write!(f, "type {} is declared more than once", pokemon_type)
            }
            ChartDataIssue::TypeSetMismatch {
                missing,
                unexpected,
            } => write!(
                f,
                "declared types do not match the chart era (missing: {:?}, unexpected: {:?})",
                missing, unexpected
            ),
        }
    }
}

/// Check one chart for every integrity defect at once.
///
/// An empty result means the chart is safe to compile into a lookup table:
/// every referenced type is declared, the declared set matches the era, and
/// each attacker places any given defender in at most one relation set.
pub fn validate_chart_data(chart: &ChartData) -> Vec<ChartDataIssue> {
    let mut issues = Vec::new();

    let mut declared = BTreeSet::new();
    for pokemon_type in &chart.type_names {
        if !declared.insert(*pokemon_type) {
            issues.push(ChartDataIssue::DuplicateTypeName(*pokemon_type));
        }
    }

    let expected: BTreeSet<_> = chart.id.expected_types().into_iter().collect();
    if declared != expected {
        issues.push(ChartDataIssue::TypeSetMismatch {
            missing: expected.difference(&declared).copied().collect(),
            unexpected: declared.difference(&expected).copied().collect(),
        });
    }

    for (attacker, relations) in &chart.damage_relations {
        if !declared.contains(attacker) {
            issues.push(ChartDataIssue::UndeclaredType {
                attacker: *attacker,
                referenced: *attacker,
            });
        }

        let mut reported_undeclared = BTreeSet::new();
        for referenced in relations.referenced_types() {
            if !declared.contains(&referenced) && reported_undeclared.insert(referenced) {
                issues.push(ChartDataIssue::UndeclaredType {
                    attacker: *attacker,
                    referenced,
                });
            }
        }

        // Duplicates inside a single list are harmless; only cross-set membership conflicts.
        let sets: [BTreeSet<PokemonType>; 3] = [
            relations.double_damage_to.iter().copied().collect(),
            relations.half_damage_to.iter().copied().collect(),
            relations.no_damage_to.iter().copied().collect(),
        ];
        let mut seen = BTreeSet::new();
        let mut reported_overlap = BTreeSet::new();
        for defender in sets.iter().flatten() {
            if !seen.insert(*defender) && reported_overlap.insert(*defender) {
                issues.push(ChartDataIssue::OverlappingRelation {
                    attacker: *attacker,
                    defender: *defender,
                });
            }
        }
    }

    issues
}
