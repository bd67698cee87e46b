// In: src/lib.rs

//! Type Matchups Engine
//!
//! Per-generation type effectiveness charts and the pure functions that turn
//! them into damage multipliers and effectiveness groupings. Charts are
//! validated and compiled into the binary at build time.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod classifier;
pub mod effectiveness;
pub mod errors;
pub mod type_chart;
pub mod type_map;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `type-matchups` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export the type identifiers and the chart data shape.
pub use schema::{
    validate_chart_data, ChartData, ChartDataIssue, ChartId, DamageRelations, PokemonType,
};

// --- From this crate's modules (`src/`) ---

// Charts and their registry.
pub use type_chart::registry::{
    compiled_chart_source, get_chart, is_valid_chart_id, is_valid_type_name, TypeChartRegistry,
};
pub use type_chart::{check_chart_data, parse_chart_data, ChartFormat, TypeChart};

// Lookup tables and queries.
pub use classifier::{
    compute_attack_effectiveness, compute_defense_effectiveness, EffectivenessBucket,
    EffectivenessGroups, Matchup,
};
pub use effectiveness::{
    compute_attack_multiplier, compute_attack_multiplier_by_name,
    compute_attack_multiplier_lenient, LenientMultiplier, Multiplier,
};
pub use type_map::{build_type_map, Relation, TypeMap};

// Crate-specific error and result types.
pub use errors::{TypeChartError, TypeChartResult};
