//! Workspace settings files: `config/config.toml`, then `config/{VISGEN_ENV}.toml`.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the settings profile.
pub const ENV_VAR: &str = "VISGEN_ENV";

const DEFAULT_PROFILE: &str = "development";

/// Active settings profile; an unset or empty `VISGEN_ENV` means `development`.
pub fn active_profile() -> String {
    std::env::var(ENV_VAR)
        .ok()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string())
}

/// Candidate settings files for a workspace, lowest precedence first.
pub fn candidate_paths(workspace_root: &Path, profile: &str) -> [PathBuf; 2] {
    let dir = workspace_root.join("config");
    [dir.join("config.toml"), dir.join(format!("{}.toml", profile))]
}

/// Layer every existing workspace settings file onto the builder.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let profile = active_profile();
    for path in candidate_paths(workspace_root, &profile) {
        if path.is_file() {
            debug!(path = %path.display(), profile = %profile, "Adding workspace settings file");
            builder = builder.add_source(File::from(path.as_path()).required(false));
        }
    }
    Ok(builder)
}
