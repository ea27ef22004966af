//! Settings file and environment sources, added to a builder in precedence order.

pub mod global_file;
pub mod workspace_file;

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

/// Environment overrides: `VISGEN__OUTPUT__SORT_KEYS=true`, `VISGEN__LOGGING__LEVEL=debug`.
pub fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("VISGEN")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
