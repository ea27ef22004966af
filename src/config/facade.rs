//! Config loader facade: one entry point over defaults, files, and environment.

use crate::config::merge::builder_with_defaults;
use crate::config::sources::{self, global_file, workspace_file};
use crate::config::VisgenConfig;
use config::{ConfigError, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads [`VisgenConfig`] from layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace
    /// `config/config.toml`, `config/{VISGEN_ENV}.toml`, `VISGEN__*` environment.
    pub fn load(workspace_root: &Path) -> Result<VisgenConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = sources::add_environment(builder);

        let config: VisgenConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Loaded settings");
        Ok(config)
    }

    /// Load settings from one explicit file over the defaults.
    pub fn load_from_file(path: &Path) -> Result<VisgenConfig, ConfigError> {
        builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }

    /// Global settings file location, if one can be determined.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
