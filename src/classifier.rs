//! Groups every type of a chart into effectiveness buckets, seen either from
//! a defender ("what hurts me") or from an attacker ("what can I hurt").

use crate::effectiveness::{compute_attack_multiplier, Multiplier};
use crate::errors::TypeChartResult;
use crate::type_map::TypeMap;
use schema::PokemonType;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EffectivenessBucket {
    /// Exactly 0x
    Immune,
    /// Strictly between 0x and 1x
    Resistant,
    /// Exactly 1x
    Neutral,
    /// Above 1x
    Weak,
}

impl EffectivenessBucket {
    pub const ALL: [EffectivenessBucket; 4] = [
        EffectivenessBucket::Immune,
        EffectivenessBucket::Resistant,
        EffectivenessBucket::Neutral,
        EffectivenessBucket::Weak,
    ];

    pub fn of(multiplier: Multiplier) -> Self {
        match multiplier {
            Multiplier::Immune => EffectivenessBucket::Immune,
            Multiplier::Quarter | Multiplier::Half => EffectivenessBucket::Resistant,
            Multiplier::Neutral => EffectivenessBucket::Neutral,
            Multiplier::Double | Multiplier::Quadruple => EffectivenessBucket::Weak,
        }
    }
}

/// One type together with the multiplier that placed it in its bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Matchup {
    pub pokemon_type: PokemonType,
    pub multiplier: Multiplier,
}

/// A partition of a chart's types into the four buckets.
///
/// Within each bucket, types keep the chart's enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EffectivenessGroups {
    pub immune: Vec<Matchup>,
    pub resistant: Vec<Matchup>,
    pub neutral: Vec<Matchup>,
    pub weak: Vec<Matchup>,
}

impl EffectivenessGroups {
    fn push(&mut self, matchup: Matchup) {
        match EffectivenessBucket::of(matchup.multiplier) {
            EffectivenessBucket::Immune => self.immune.push(matchup),
            EffectivenessBucket::Resistant => self.resistant.push(matchup),
            EffectivenessBucket::Neutral => self.neutral.push(matchup),
            EffectivenessBucket::Weak => self.weak.push(matchup),
        }
    }

    pub fn bucket(&self, bucket: EffectivenessBucket) -> &[Matchup] {
        match bucket {
            EffectivenessBucket::Immune => &self.immune,
            EffectivenessBucket::Resistant => &self.resistant,
            EffectivenessBucket::Neutral => &self.neutral,
            EffectivenessBucket::Weak => &self.weak,
        }
    }

    pub fn types_in(&self, bucket: EffectivenessBucket) -> Vec<PokemonType> {
        self.bucket(bucket)
            .iter()
            .map(|matchup| matchup.pokemon_type)
            .collect()
    }

    /// Total number of classified types across all buckets.
    pub fn len(&self) -> usize {
        EffectivenessBucket::ALL
            .iter()
            .map(|bucket| self.bucket(*bucket).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every matchup, bucket by bucket from immune to weak.
    pub fn iter(&self) -> impl Iterator<Item = (EffectivenessBucket, &Matchup)> {
        EffectivenessBucket::ALL.into_iter().flat_map(move |bucket| {
            self.bucket(bucket)
                .iter()
                .map(move |matchup| (bucket, matchup))
        })
    }

    /// The bucket and multiplier for one type, if it was classified.
    pub fn find(&self, pokemon_type: PokemonType) -> Option<(EffectivenessBucket, Multiplier)> {
        self.iter()
            .find(|(_, matchup)| matchup.pokemon_type == pokemon_type)
            .map(|(bucket, matchup)| (bucket, matchup.multiplier))
    }
}

/// Run `multiplier_for` over every type of the chart, in chart order.
fn group_types(
    type_map: &TypeMap,
    mut multiplier_for: impl FnMut(PokemonType) -> TypeChartResult<Multiplier>,
) -> TypeChartResult<EffectivenessGroups> {
    let mut groups = EffectivenessGroups::default();
    for pokemon_type in type_map.type_names() {
        groups.push(Matchup {
            pokemon_type: *pokemon_type,
            multiplier: multiplier_for(*pokemon_type)?,
        });
    }
    Ok(groups)
}

/// How every attacking type fares against a one- or two-typed defender.
pub fn compute_defense_effectiveness(
    defender_type1: PokemonType,
    defender_type2: Option<PokemonType>,
    type_map: &TypeMap,
) -> TypeChartResult<EffectivenessGroups> {
    let mut defenders = vec![type_map.ensure_recognized(defender_type1)?];
    if let Some(second) = defender_type2 {
        defenders.push(type_map.ensure_recognized(second)?);
    }

    group_types(type_map, |attacker| {
        compute_attack_multiplier(attacker, &defenders, type_map)
    })
}

/// How every defending type fares against the given attacking type(s).
///
/// With two attacking types, each defender is placed by the stronger of the
/// two hits, i.e. the coverage the pair provides.
pub fn compute_attack_effectiveness(
    attacker_type1: PokemonType,
    attacker_type2: Option<PokemonType>,
    type_map: &TypeMap,
) -> TypeChartResult<EffectivenessGroups> {
    let mut attackers = vec![type_map.ensure_recognized(attacker_type1)?];
    if let Some(second) = attacker_type2 {
        attackers.push(type_map.ensure_recognized(second)?);
    }

    group_types(type_map, |defender| {
        let mut best = Multiplier::Immune;
        for attacker in &attackers {
            best = best.max(compute_attack_multiplier(*attacker, &[defender], type_map)?);
        }
        Ok(best)
    })
}
