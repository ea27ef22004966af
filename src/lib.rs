//! visgen: Deterministic Visualization State Generation
//!
//! Merges a dashboard-level config and a visualization-level config into one
//! canonical intermediate document, then expands it into the nested
//! visualization state a dashboarding UI consumes.
//!
//! ```rust,ignore
//! use visgen::{generate, RawConfig};
//!
//! let viz = RawConfig::from_yaml_str(viz_yaml)?;
//! let dashboard = RawConfig::from_yaml_str(dashboard_yaml)?;
//! let generated = generate(&dashboard, &viz)?;
//! println!("{}", serde_json::to_string_pretty(&generated.vis_state)?);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod intermediate;
pub mod loader;
pub mod logging;
pub mod raw;
pub mod reconcile;
pub mod render;
pub mod synthesis;
pub mod validate;
pub mod vis_state;

pub use error::{AppError, GenerateError, LoadError};
pub use generate::{generate, Generated};
pub use intermediate::IntermediateDocument;
pub use raw::RawConfig;
pub use reconcile::reconcile;
pub use synthesis::synthesize;
pub use validate::is_complete;
pub use vis_state::VisState;
