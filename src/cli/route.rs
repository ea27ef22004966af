//! CLI route: single route table and run context. Dispatches to the loader, the
//! generation pipeline, and rendering.

use crate::cli::parse::{Commands, Emit, InputArgs};
use crate::config::{ConfigLoader, VisgenConfig};
use crate::error::AppError;
use crate::generate::{generate, Generated};
use crate::loader::{load_yaml_file, select_dashboard_viz, select_viz};
use crate::raw::RawConfig;
use crate::render::{embed, to_json_string, RenderOptions};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

/// Runtime context for CLI execution: workspace and resolved settings.
/// Built from workspace path and optional settings path using ConfigLoader only.
pub struct RunContext {
    config: VisgenConfig,
    workspace_root: PathBuf,
}

impl RunContext {
    /// Create run context from workspace root and optional settings path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, AppError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self::with_config(config.validated()?, workspace_root))
    }

    pub fn with_config(config: VisgenConfig, workspace_root: PathBuf) -> Self {
        Self {
            config,
            workspace_root,
        }
    }

    /// Execute one command and return the text to print.
    pub fn execute(&self, command: &Commands) -> Result<String, AppError> {
        match command {
            Commands::Generate {
                input,
                emit,
                sort_keys,
                compact,
                vis_state_string,
                out,
            } => {
                let generated = self.run_pipeline(input)?;
                let options = RenderOptions {
                    pretty: self.config.output.pretty && !compact,
                    sort_keys: self.config.output.sort_keys || *sort_keys,
                };
                let rendered = render_generated(&generated, *emit, options, *vis_state_string)?;
                match out {
                    Some(path) => {
                        let path = self.resolve(path);
                        std::fs::write(&path, format!("{}\n", rendered)).map_err(|e| {
                            AppError::Output(format!("Failed to write {:?}: {}", path, e))
                        })?;
                        info!(path = %path.display(), "Wrote generated document");
                        Ok(format!("Wrote {}", path.display()))
                    }
                    None => Ok(rendered),
                }
            }
            Commands::Check { input } => {
                let generated = self.run_pipeline(input)?;
                Ok(format!(
                    "ok: {} value axes, {} series params, {} aggregations",
                    generated.vis_state.params.value_axes.len(),
                    generated.vis_state.params.series_params.len(),
                    generated.vis_state.aggs.len()
                ))
            }
        }
    }

    fn run_pipeline(&self, input: &InputArgs) -> Result<Generated, AppError> {
        let (dashboard, viz) = self.load_inputs(input)?;
        Ok(generate(&dashboard, &viz)?)
    }

    fn load_inputs(&self, input: &InputArgs) -> Result<(RawConfig, RawConfig), AppError> {
        let viz_root = load_yaml_file(&self.resolve(&input.viz))?;
        let viz = match input.viz_name {
            Some(ref name) => select_viz(&viz_root, name)?,
            None => viz_root,
        };

        let dashboard = match input.dashboard {
            Some(ref path) => {
                let root = load_yaml_file(&self.resolve(path))?;
                match input.dashboard_index {
                    Some(index) => select_dashboard_viz(&root, index)?,
                    None => root,
                }
            }
            None => RawConfig::default(),
        };
        Ok((dashboard, viz))
    }

    fn resolve(&self, path: &std::path::Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workspace_root.join(path)
        }
    }
}

fn render_generated(
    generated: &Generated,
    emit: Emit,
    options: RenderOptions,
    vis_state_string: bool,
) -> Result<String, AppError> {
    let mut vis_state = generated.vis_state.to_value()?;
    if vis_state_string {
        vis_state = embed(&vis_state)?;
    }
    let value = match emit {
        Emit::VisState => vis_state,
        Emit::Intermediate => generated.intermediate.to_value()?,
        Emit::Both => json!({
            "intermediate": generated.intermediate.to_value()?,
            "visState": vis_state,
        }),
    };
    Ok(to_json_string(&value, options)?)
}
