//! Build script for type-matchups.
//!
//! Reads every chart in `data/type_charts`, refuses to build when any chart
//! fails validation, and embeds the validated charts as postcard bytes.

use schema::{validate_chart_data, ChartData, ChartId};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
    let chart_dir = manifest_dir.join("data").join("type_charts");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=data/type_charts");

    let charts = load_charts(&chart_dir);

    let compiled: Vec<&ChartData> = charts.values().map(|(_, chart)| chart).collect();
    let bytes = postcard::to_allocvec(&compiled).expect("failed to serialize type charts");
    fs::write(out_dir.join("type_charts.postcard"), bytes).expect("write type_charts.postcard");

    let mut sources = phf_codegen::Map::new();
    for (id, (file_name, _)) in &charts {
        sources.entry(id.as_str(), &format!("{:?}", file_name));
    }

    let generated = format!(
        "// Generated by build.rs from data/type_charts. Do not edit.\n\
         static COMPILED_CHARTS: &[u8] = include_bytes!(concat!(env!(\"OUT_DIR\"), \"/type_charts.postcard\"));\n\
         static CHART_SOURCES: phf::Map<&'static str, &'static str> = {};\n",
        sources.build()
    );
    fs::write(out_dir.join("generated_data.rs"), generated).expect("write generated_data.rs");
}

/// Load, validate and index every `.ron` chart, keyed by chart id.
fn load_charts(chart_dir: &Path) -> BTreeMap<ChartId, (String, ChartData)> {
    let mut paths: Vec<PathBuf> = fs::read_dir(chart_dir)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", chart_dir.display(), e))
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("ron"))
        .collect();
    paths.sort();

    let mut charts = BTreeMap::new();
    for path in paths {
        println!("cargo:rerun-if-changed={}", path.display());

        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e));
        let chart: ChartData = ron::from_str(&content)
            .unwrap_or_else(|e| panic!("cannot parse {}: {}", path.display(), e));

        let issues = validate_chart_data(&chart);
        if !issues.is_empty() {
            let report: Vec<String> = issues.iter().map(|issue| format!("  - {}", issue)).collect();
            panic!(
                "type chart {} ({}) failed validation:\n{}",
                chart.id,
                path.display(),
                report.join("\n")
            );
        }

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        let id = chart.id;
        if let Some((previous, _)) = charts.insert(id, (file_name.clone(), chart)) {
            panic!(
                "type chart {} is defined twice ({} and {})",
                id, previous, file_name
            );
        }
    }

    for id in ChartId::all() {
        if !charts.contains_key(&id) {
            panic!("no chart file defines {}", id);
        }
    }

    charts
}
