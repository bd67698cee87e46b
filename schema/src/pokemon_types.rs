use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Every elemental type any supported chart knows about, in canonical chart order.
///
/// The discriminant doubles as the row/column index of a dense type table, so
/// the order here is load-bearing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PokemonType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl PokemonType {
    /// Lowercase identifier, as used in chart data files.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Position of this type in a dense type table.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A named type-effectiveness ruleset.
///
/// Each variant corresponds to one era of the games; the set of types each
/// one recognizes is fixed by `recognizes`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
    EnumString,
    IntoStaticStr,
)]
pub enum ChartId {
    /// Red/Blue/Yellow: 15 types, Ghost cannot touch Psychic.
    #[serde(rename = "gen1")]
    #[strum(serialize = "gen1")]
    Gen1,
    /// Gold/Silver through Black/White 2: adds Steel and Dark.
    #[serde(rename = "gen2to5")]
    #[strum(serialize = "gen2to5")]
    Gen2To5,
    /// X/Y onwards: adds Fairy, Steel loses its Ghost/Dark resistance.
    #[serde(rename = "gen6plus")]
    #[strum(serialize = "gen6plus")]
    Gen6Plus,
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ChartId {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn all() -> impl Iterator<Item = ChartId> {
        ChartId::iter()
    }

    /// Whether a type exists at all under this ruleset.
    pub fn recognizes(self, pokemon_type: PokemonType) -> bool {
        use PokemonType::*;

        match pokemon_type {
            Normal | Fighting | Flying | Poison | Ground | Rock | Bug | Ghost | Fire | Water
            | Grass | Electric | Psychic | Ice | Dragon => true,
            Steel | Dark => self != ChartId::Gen1,
            Fairy => self == ChartId::Gen6Plus,
        }
    }

    /// The recognized types in canonical order.
    pub fn expected_types(self) -> Vec<PokemonType> {
        PokemonType::iter().filter(|t| self.recognizes(*t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_type_counts_per_chart() {
        assert_eq!(ChartId::Gen1.expected_types().len(), 15);
        assert_eq!(ChartId::Gen2To5.expected_types().len(), 17);
        assert_eq!(ChartId::Gen6Plus.expected_types().len(), 18);
        assert_eq!(PokemonType::COUNT, 18);
    }

    #[test]
    fn test_type_parsing_is_case_insensitive() {
        assert_eq!(PokemonType::from_str("fire"), Ok(PokemonType::Fire));
        assert_eq!(PokemonType::from_str("Fairy"), Ok(PokemonType::Fairy));
        assert!(PokemonType::from_str("stellar").is_err());
        assert_eq!(PokemonType::Psychic.as_str(), "psychic");
    }

    #[test]
    fn test_chart_id_round_trips_through_str() {
        for id in ChartId::iter() {
            assert_eq!(ChartId::from_str(id.as_str()), Ok(id));
        }
        assert!(ChartId::from_str("gen7").is_err());
    }
}
