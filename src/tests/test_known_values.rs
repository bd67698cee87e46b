// In: src/tests/test_known_values.rs

#[cfg(test)]
mod tests {
    use crate::effectiveness::{compute_attack_multiplier, Multiplier};
    use crate::tests::common::{compiled_registry, type_map_of, TestChartBuilder};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{ChartId, PokemonType};
    use PokemonType::*;

    #[rstest]
    #[case("Super effective (Fire vs Grass)", Fire, vec![Grass], Multiplier::Double)]
    #[case("Resisted (Fire vs Water)", Fire, vec![Water], Multiplier::Half)]
    #[case("No effect (Ghost vs Normal)", Ghost, vec![Normal], Multiplier::Immune)]
    #[case("Cancelling dual type (Fire vs Grass/Water)", Fire, vec![Grass, Water], Multiplier::Neutral)]
    #[case("Double weakness (Ice vs Dragon/Flying)", Ice, vec![Dragon, Flying], Multiplier::Quadruple)]
    #[case("Double resistance (Grass vs Fire/Flying)", Grass, vec![Fire, Flying], Multiplier::Quarter)]
    #[case("Immunity beats weakness (Electric vs Water/Ground)", Electric, vec![Water, Ground], Multiplier::Immune)]
    #[case("Fairy hits Dragon", Fairy, vec![Dragon], Multiplier::Double)]
    #[case("Dragon cannot touch Fairy", Dragon, vec![Fairy], Multiplier::Immune)]
    #[case("Steel no longer resists Ghost", Ghost, vec![Steel], Multiplier::Neutral)]
    fn test_modern_chart_values(
        #[case] desc: &str,
        #[case] attack: PokemonType,
        #[case] defenders: Vec<PokemonType>,
        #[case] expected: Multiplier,
    ) {
        let registry = compiled_registry();
        let map = registry.type_map(ChartId::Gen6Plus);

        assert_eq!(
            compute_attack_multiplier(attack, &defenders, map),
            Ok(expected),
            "{}",
            desc
        );
    }

    #[test]
    fn test_dual_type_scenario_multiplies() {
        // Ice doubly effective against Water alone and Fire alone.
        let map = type_map_of(
            TestChartBuilder::new(ChartId::Gen6Plus)
                .with_double(Ice, &[Water, Fire])
                .with_double(Water, &[Fire])
                .build(),
        );

        assert_eq!(compute_attack_multiplier(Ice, &[Water], &map), Ok(Multiplier::Double));
        assert_eq!(compute_attack_multiplier(Ice, &[Fire], &map), Ok(Multiplier::Double));
        assert_eq!(
            compute_attack_multiplier(Ice, &[Water, Fire], &map),
            Ok(Multiplier::Quadruple)
        );
        assert_eq!(
            compute_attack_multiplier(Ice, &[Fire, Water], &map),
            Ok(Multiplier::Quadruple)
        );
    }

    #[test]
    fn test_same_query_same_answer() {
        let registry = compiled_registry();
        let map = registry.type_map(ChartId::Gen2To5);

        let first = compute_attack_multiplier(Dark, &[Ghost, Psychic], map);
        let second = compute_attack_multiplier(Dark, &[Ghost, Psychic], map);
        assert_eq!(first, Ok(Multiplier::Quadruple));
        assert_eq!(first, second);
    }
}
