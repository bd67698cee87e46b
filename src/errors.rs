use schema::{ChartDataIssue, ChartId, PokemonType};
use std::fmt;

/// Main error type for the type-effectiveness engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeChartError {
    /// The requested chart identifier is not one of the supported charts
    InvalidChartId(String),
    /// A type name that the selected chart does not recognize
    InvalidTypeName { chart: ChartId, name: String },
    /// A type list that is not one or two entries long
    InvalidTypeCount { found: usize },
    /// The same type was given for both slots of a dual-type defender
    DuplicateDefenderType(PokemonType),
    /// A defender sits in more than one damage relation set of one attacker
    MalformedRelation {
        chart: ChartId,
        attacker: PokemonType,
        defender: PokemonType,
    },
    /// A relation references a type the chart does not declare
    UndeclaredType {
        chart: ChartId,
        attacker: PokemonType,
        referenced: PokemonType,
    },
    /// The declared type list does not match the chart's era
    TypeSetMismatch {
        chart: ChartId,
        missing: Vec<PokemonType>,
        unexpected: Vec<PokemonType>,
    },
    /// A type is declared more than once in one chart
    DuplicateTypeName {
        chart: ChartId,
        pokemon_type: PokemonType,
    },
    /// Two charts were supplied under the same identifier
    DuplicateChart(ChartId),
    /// No chart was supplied for a supported identifier
    MissingChart(ChartId),
    /// The chart data embedded at build time could not be decoded
    CorruptCompiledData(String),
    /// An external chart file could not be parsed
    ChartParse(String),
}

impl TypeChartError {
    /// Attach the chart identifier to a validation issue.
    pub fn from_issue(chart: ChartId, issue: ChartDataIssue) -> Self {
        match issue {
            ChartDataIssue::OverlappingRelation { attacker, defender } => {
                TypeChartError::MalformedRelation {
                    chart,
                    attacker,
                    defender,
                }
            }
            ChartDataIssue::UndeclaredType {
                attacker,
                referenced,
            } => TypeChartError::UndeclaredType {
                chart,
                attacker,
                referenced,
            },
            ChartDataIssue::DuplicateTypeName(pokemon_type) => TypeChartError::DuplicateTypeName {
                chart,
                pokemon_type,
            },
            ChartDataIssue::TypeSetMismatch {
                missing,
                unexpected,
            } => TypeChartError::TypeSetMismatch {
                chart,
                missing,
                unexpected,
            },
        }
    }
}

impl fmt::Display for TypeChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeChartError::InvalidChartId(id) => write!(f, "Invalid chart id: {}", id),
            TypeChartError::InvalidTypeName { chart, name } => {
                write!(f, "Type '{}' is not valid in chart {}", name, chart)
            }
            TypeChartError::InvalidTypeCount { found } => {
                write!(f, "Expected one or two types, got {}", found)
            }
            TypeChartError::DuplicateDefenderType(pokemon_type) => {
                write!(f, "Defender lists {} twice", pokemon_type)
            }
            TypeChartError::MalformedRelation {
                chart,
                attacker,
                defender,
            } => write!(
                f,
                "Malformed relation in chart {}: {} appears in more than one damage set of {}",
                chart, defender, attacker
            ),
            TypeChartError::UndeclaredType {
                chart,
                attacker,
                referenced,
            } => write!(
                f,
                "Chart {} relation of {} references undeclared type {}",
                chart, attacker, referenced
            ),
            TypeChartError::TypeSetMismatch {
                chart,
                missing,
                unexpected,
            } => write!(
                f,
                "Chart {} declares the wrong types (missing: {:?}, unexpected: {:?})",
                chart, missing, unexpected
            ),
            TypeChartError::DuplicateTypeName {
                chart,
                pokemon_type,
            } => write!(f, "Chart {} declares {} twice", chart, pokemon_type),
            TypeChartError::DuplicateChart(id) => write!(f, "Chart {} supplied twice", id),
            TypeChartError::MissingChart(id) => write!(f, "No data supplied for chart {}", id),
            TypeChartError::CorruptCompiledData(details) => {
                write!(f, "Compiled chart data is corrupt: {}", details)
            }
            TypeChartError::ChartParse(details) => write!(f, "Cannot parse chart: {}", details),
        }
    }
}

impl std::error::Error for TypeChartError {}

/// Type alias for Results using TypeChartError
pub type TypeChartResult<T> = Result<T, TypeChartError>;
