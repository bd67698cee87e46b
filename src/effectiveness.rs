//! Combined damage multipliers of one attacking type against one or two
//! defending types.
//!
//! Every query here is a pure function of its arguments. Quiz answer checking
//! relies on the same inputs always scoring the same way.

use crate::errors::{TypeChartError, TypeChartResult};
use crate::type_map::{Relation, TypeMap};
use schema::PokemonType;
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// The closed set of values a one- or two-type matchup can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "f32")]
pub enum Multiplier {
    Immune,
    Quarter,
    Half,
    Neutral,
    Double,
    Quadruple,
}

impl Multiplier {
    pub const ALL: [Multiplier; 6] = [
        Multiplier::Immune,
        Multiplier::Quarter,
        Multiplier::Half,
        Multiplier::Neutral,
        Multiplier::Double,
        Multiplier::Quadruple,
    ];

    /// Fixed-point value where 4 = 1x.
    pub const fn quarters(self) -> u16 {
        match self {
            Multiplier::Immune => 0,
            Multiplier::Quarter => 1,
            Multiplier::Half => 2,
            Multiplier::Neutral => 4,
            Multiplier::Double => 8,
            Multiplier::Quadruple => 16,
        }
    }

    pub fn as_f32(self) -> f32 {
        f32::from(self.quarters()) / 4.0
    }

    /// Product of one or two single-type relations.
    fn combine(first: Relation, second: Option<Relation>) -> Multiplier {
        let quarters = first.quarters() * second.map_or(4, Relation::quarters) / 4;
        match quarters {
            0 => Multiplier::Immune,
            1 => Multiplier::Quarter,
            2 => Multiplier::Half,
            4 => Multiplier::Neutral,
            8 => Multiplier::Double,
            // 2x * 2x; nothing else is reachable from {0, 2, 4, 8}.
            _ => Multiplier::Quadruple,
        }
    }
}

impl From<Multiplier> for f32 {
    fn from(multiplier: Multiplier) -> f32 {
        multiplier.as_f32()
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.as_f32())
    }
}

/// A defender holds one or two types.
fn check_defender_count(found: usize) -> TypeChartResult<()> {
    if (1..=2).contains(&found) {
        Ok(())
    } else {
        Err(TypeChartError::InvalidTypeCount { found })
    }
}

/// Damage multiplier of `attack_type` against a one- or two-typed defender.
///
/// The result is the product of the per-type relations and does not depend on
/// the order of `defender_types`. A type listed twice is `DuplicateDefenderType`.
pub fn compute_attack_multiplier(
    attack_type: PokemonType,
    defender_types: &[PokemonType],
    type_map: &TypeMap,
) -> TypeChartResult<Multiplier> {
    check_defender_count(defender_types.len())?;
    let (first, second) = match *defender_types {
        [first, second] if first == second => {
            return Err(TypeChartError::DuplicateDefenderType(first))
        }
        [first, second] => (first, Some(second)),
        _ => (defender_types[0], None),
    };

    type_map.ensure_recognized(attack_type)?;
    type_map.ensure_recognized(first)?;
    if let Some(second) = second {
        type_map.ensure_recognized(second)?;
    }

    Ok(Multiplier::combine(
        type_map.relation_unchecked(attack_type, first),
        second.map(|second| type_map.relation_unchecked(attack_type, second)),
    ))
}

/// String-boundary form of `compute_attack_multiplier`; unknown names are errors.
pub fn compute_attack_multiplier_by_name(
    attack_type: &str,
    defender_types: &[&str],
    type_map: &TypeMap,
) -> TypeChartResult<Multiplier> {
    let attack_type = type_map.resolve(attack_type)?;
    let defender_types = defender_types
        .iter()
        .map(|name| type_map.resolve(name))
        .collect::<TypeChartResult<Vec<_>>>()?;
    compute_attack_multiplier(attack_type, &defender_types, type_map)
}

/// Result of the permissive lookup.
///
/// `unknown_types` lists every name that was replaced by a neutral 1x, so a
/// genuine neutral matchup (`is_exact()`) is never confused with a guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LenientMultiplier {
    pub multiplier: Multiplier,
    pub unknown_types: Vec<String>,
}

impl LenientMultiplier {
    pub fn is_exact(&self) -> bool {
        self.unknown_types.is_empty()
    }
}

/// Opt-in permissive lookup for exploratory views.
///
/// Names the chart does not recognize contribute 1x instead of failing. An
/// unknown attacker makes the whole matchup 1x. The defender count is still
/// enforced.
pub fn compute_attack_multiplier_lenient(
    attack_type: &str,
    defender_types: &[&str],
    type_map: &TypeMap,
) -> TypeChartResult<LenientMultiplier> {
    check_defender_count(defender_types.len())?;

    let mut unknown_types = Vec::new();
    let attacker = type_map.resolve(attack_type).ok();
    if attacker.is_none() {
        unknown_types.push(attack_type.to_string());
    }

    let mut known_defenders = Vec::with_capacity(defender_types.len());
    for name in defender_types {
        match type_map.resolve(name) {
            Ok(defender) => known_defenders.push(defender),
            Err(_) => unknown_types.push(name.to_string()),
        }
    }

    let multiplier = match attacker {
        Some(attacker) if !known_defenders.is_empty() => {
            compute_attack_multiplier(attacker, &known_defenders, type_map)?
        }
        _ => Multiplier::Neutral,
    };

    if !unknown_types.is_empty() {
        warn!(
            chart = %type_map.chart_id(),
            unknown = ?unknown_types,
            "assuming neutral effectiveness for unrecognized types"
        );
    }

    Ok(LenientMultiplier {
        multiplier,
        unknown_types,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::type_chart::registry::TypeChartRegistry;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::ChartId;
    use PokemonType::*;

    fn modern() -> TypeMap {
        TypeChartRegistry::new()
            .unwrap()
            .type_map(ChartId::Gen6Plus)
            .clone()
    }

    #[rstest]
    #[case(Multiplier::Immune, 0.0)]
    #[case(Multiplier::Quarter, 0.25)]
    #[case(Multiplier::Half, 0.5)]
    #[case(Multiplier::Neutral, 1.0)]
    #[case(Multiplier::Double, 2.0)]
    #[case(Multiplier::Quadruple, 4.0)]
    fn test_multiplier_values(#[case] multiplier: Multiplier, #[case] expected: f32) {
        assert_eq!(multiplier.as_f32(), expected);
        assert_eq!(f32::from(multiplier), expected);
    }

    #[test]
    fn test_multiplier_display() {
        assert_eq!(Multiplier::Quarter.to_string(), "x0.25");
        assert_eq!(Multiplier::Quadruple.to_string(), "x4");
    }

    #[test]
    fn test_multiplier_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Multiplier::Half).unwrap(), "0.5");
    }

    #[test]
    fn test_combination_is_multiplicative() {
        let map = modern();

        // 2x and 0.5x cancel out instead of summing to 2.5x.
        assert_eq!(
            compute_attack_multiplier(Fire, &[Grass, Water], &map),
            Ok(Multiplier::Neutral)
        );
        assert_eq!(
            compute_attack_multiplier(Ice, &[Grass, Flying], &map),
            Ok(Multiplier::Quadruple)
        );
        assert_eq!(
            compute_attack_multiplier(Fire, &[Water, Rock], &map),
            Ok(Multiplier::Quarter)
        );
        assert_eq!(
            compute_attack_multiplier(Ground, &[Electric, Flying], &map),
            Ok(Multiplier::Immune)
        );
    }

    #[test]
    fn test_repeated_defender_type_is_rejected() {
        let map = modern();
        assert_eq!(
            compute_attack_multiplier(Fire, &[Grass, Grass], &map),
            Err(TypeChartError::DuplicateDefenderType(Grass))
        );
        assert_eq!(
            compute_attack_multiplier_by_name("fire", &["grass", "GRASS"], &map),
            Err(TypeChartError::DuplicateDefenderType(Grass))
        );
    }

    #[rstest]
    #[case(&[])]
    #[case(&[Fire, Water, Grass])]
    fn test_defender_count_is_enforced(#[case] defenders: &[PokemonType]) {
        let map = modern();
        assert_eq!(
            compute_attack_multiplier(Fire, defenders, &map),
            Err(TypeChartError::InvalidTypeCount {
                found: defenders.len()
            })
        );
    }

    #[test]
    fn test_by_name_resolves_case_insensitively() {
        let map = modern();
        assert_eq!(
            compute_attack_multiplier_by_name("Fire", &["GRASS"], &map),
            Ok(Multiplier::Double)
        );
        assert_eq!(
            compute_attack_multiplier_by_name("fire", &["shadow"], &map),
            Err(TypeChartError::InvalidTypeName {
                chart: ChartId::Gen6Plus,
                name: "shadow".to_string()
            })
        );
    }

    #[test]
    fn test_lenient_marks_assumed_neutral() {
        let map = modern();

        let exact = compute_attack_multiplier_lenient("normal", &["fire"], &map).unwrap();
        assert_eq!(exact.multiplier, Multiplier::Neutral);
        assert!(exact.is_exact());

        let guessed = compute_attack_multiplier_lenient("normal", &["shadow"], &map).unwrap();
        assert_eq!(guessed.multiplier, Multiplier::Neutral);
        assert!(!guessed.is_exact());
        assert_eq!(guessed.unknown_types, vec!["shadow".to_string()]);
    }

    #[test]
    fn test_lenient_keeps_known_half_of_dual_type() {
        let map = modern();

        let result = compute_attack_multiplier_lenient("fire", &["grass", "shadow"], &map).unwrap();
        assert_eq!(result.multiplier, Multiplier::Double);
        assert_eq!(result.unknown_types, vec!["shadow".to_string()]);

        let unknown_attacker =
            compute_attack_multiplier_lenient("sound", &["grass"], &map).unwrap();
        assert_eq!(unknown_attacker.multiplier, Multiplier::Neutral);
        assert_eq!(unknown_attacker.unknown_types, vec!["sound".to_string()]);
    }

    #[rstest]
    #[case(&[])]
    #[case(&["fire", "water", "grass"])]
    #[case(&["shadow", "sound", "light"])]
    fn test_lenient_still_enforces_defender_count(#[case] defenders: &[&str]) {
        let map = modern();
        assert_eq!(
            compute_attack_multiplier_lenient("fire", defenders, &map),
            Err(TypeChartError::InvalidTypeCount {
                found: defenders.len()
            })
        );
    }
}
