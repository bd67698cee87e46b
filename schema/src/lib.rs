// Type Matchups Schema - Shared type-chart definitions
// This crate contains the type identifiers and the chart data shape that are
// shared between the type-matchups library and its build script, so chart
// files can be validated and compiled before the library ever runs.

// Re-export the main types
pub use chart_data::*;
pub use pokemon_types::*;

pub mod chart_data;
pub mod pokemon_types;
