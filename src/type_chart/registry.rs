//! The closed set of supported charts and their memoized type maps.

use crate::errors::{TypeChartError, TypeChartResult};
use crate::type_chart::TypeChart;
use crate::type_map::TypeMap;
use schema::{ChartData, ChartId};
use std::str::FromStr;
use std::sync::{LazyLock, OnceLock};
use strum::EnumCount;
use tracing::debug;

// Include the charts compiled by build.rs
include!(concat!(env!("OUT_DIR"), "/generated_data.rs"));

static GLOBAL_REGISTRY: LazyLock<TypeChartResult<TypeChartRegistry>> =
    LazyLock::new(TypeChartRegistry::new);

/// Decode the charts embedded at build time.
fn get_compiled_chart_data() -> TypeChartResult<Vec<ChartData>> {
    postcard::from_bytes(COMPILED_CHARTS)
        .map_err(|e| TypeChartError::CorruptCompiledData(e.to_string()))
}

/// The data file a compiled chart was built from.
pub fn compiled_chart_source(id: ChartId) -> Option<&'static str> {
    CHART_SOURCES.get(id.as_str()).copied()
}

/// Holds one validated chart per `ChartId` and builds each type map at most once.
///
/// Instances are independent: tests can build a fresh registry from their own
/// chart data without touching the process-wide default.
#[derive(Debug)]
pub struct TypeChartRegistry {
    charts: Vec<TypeChart>,
    type_maps: [OnceLock<TypeMap>; ChartId::COUNT],
}

impl TypeChartRegistry {
    /// Registry over the charts compiled into this crate.
    pub fn new() -> TypeChartResult<Self> {
        Self::from_chart_data(get_compiled_chart_data()?)
    }

    /// Registry over caller-supplied charts. Every `ChartId` must be supplied exactly once.
    pub fn from_chart_data(data: impl IntoIterator<Item = ChartData>) -> TypeChartResult<Self> {
        let mut slots: [Option<TypeChart>; ChartId::COUNT] = Default::default();

        for chart_data in data {
            let chart = TypeChart::new(chart_data)?;
            let slot = &mut slots[chart.id().index()];
            if slot.is_some() {
                return Err(TypeChartError::DuplicateChart(chart.id()));
            }
            *slot = Some(chart);
        }

        let charts = ChartId::all()
            .zip(slots)
            .map(|(id, slot)| slot.ok_or(TypeChartError::MissingChart(id)))
            .collect::<TypeChartResult<Vec<_>>>()?;

        debug!(charts = charts.len(), "loaded type charts");

        Ok(TypeChartRegistry {
            charts,
            type_maps: Default::default(),
        })
    }

    /// The process-wide registry over the compiled charts, created on first use.
    pub fn global() -> TypeChartResult<&'static TypeChartRegistry> {
        GLOBAL_REGISTRY.as_ref().map_err(Clone::clone)
    }

    pub fn is_valid_chart_id(value: &str) -> bool {
        ChartId::from_str(value).is_ok()
    }

    pub fn parse_chart_id(value: &str) -> TypeChartResult<ChartId> {
        ChartId::from_str(value).map_err(|_| TypeChartError::InvalidChartId(value.to_string()))
    }

    pub fn chart(&self, id: ChartId) -> &TypeChart {
        &self.charts[id.index()]
    }

    pub fn get_chart(&self, chart_id: &str) -> TypeChartResult<&TypeChart> {
        Ok(self.chart(Self::parse_chart_id(chart_id)?))
    }

    pub fn charts(&self) -> &[TypeChart] {
        &self.charts
    }

    /// False for unknown chart ids as well as for unknown or out-of-era type names.
    pub fn is_valid_type_name(&self, chart_id: &str, value: &str) -> bool {
        self.get_chart(chart_id)
            .and_then(|chart| chart.parse_type_name(value))
            .is_ok()
    }

    /// The lookup table for a chart, built on first request.
    pub fn type_map(&self, id: ChartId) -> &TypeMap {
        self.type_maps[id.index()].get_or_init(|| TypeMap::build(self.chart(id)))
    }

    pub fn type_map_for(&self, chart_id: &str) -> TypeChartResult<&TypeMap> {
        Ok(self.type_map(Self::parse_chart_id(chart_id)?))
    }

    /// Whether the map for `id` has been built yet.
    pub fn is_type_map_built(&self, id: ChartId) -> bool {
        self.type_maps[id.index()].get().is_some()
    }
}

/// Look up a chart in the global registry.
pub fn get_chart(chart_id: &str) -> TypeChartResult<&'static TypeChart> {
    TypeChartRegistry::global()?.get_chart(chart_id)
}

pub fn is_valid_chart_id(value: &str) -> bool {
    TypeChartRegistry::is_valid_chart_id(value)
}

pub fn is_valid_type_name(chart_id: &str, value: &str) -> bool {
    TypeChartRegistry::global()
        .map(|registry| registry.is_valid_type_name(chart_id, value))
        .unwrap_or(false)
}
