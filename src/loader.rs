//! Config File Loading
//!
//! Reads YAML config files and selects the sub-document a generation call needs:
//! a named visualization from a viz file, and a positional entry of
//! `dashboard.viz` from a dashboard file.

use crate::error::LoadError;
use crate::raw::RawConfig;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Read and parse one YAML file.
pub fn load_yaml_file(path: &Path) -> Result<RawConfig, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "Loaded config file");
    RawConfig::from_yaml_str(&text)
}

/// The visualization keyed `name` in a viz file.
pub fn select_viz(root: &RawConfig, name: &str) -> Result<RawConfig, LoadError> {
    let viz = root
        .get(name)
        .ok_or_else(|| LoadError::VizNotFound(name.to_string()))?;
    RawConfig::from_value(viz.clone())
}

/// Entry `index` of `dashboard.viz`.
///
/// `viz` may be a sequence (positional) or a mapping, in which case the entry
/// keyed by the index is preferred and the `index`-th entry in document order is
/// used otherwise.
pub fn select_dashboard_viz(root: &RawConfig, index: usize) -> Result<RawConfig, LoadError> {
    let viz = root
        .collection("dashboard")
        .and_then(|dashboard| dashboard.get("viz"))
        .ok_or(LoadError::DashboardVizMissing)?;

    let entry = match viz {
        Value::Array(entries) => entries.get(index).ok_or(LoadError::DashboardVizIndex {
            index,
            len: entries.len(),
        })?,
        Value::Object(entries) => entries
            .get(&index.to_string())
            .or_else(|| entries.values().nth(index))
            .ok_or(LoadError::DashboardVizIndex {
                index,
                len: entries.len(),
            })?,
        _ => return Err(LoadError::DashboardVizMissing),
    };
    RawConfig::from_value(entry.clone())
}
