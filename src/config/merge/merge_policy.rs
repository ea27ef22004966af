//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("output.pretty", true)?
        .set_default("output.sort_keys", false)?
        .set_default("logging.level", "info")?
        .set_default("logging.output", "stderr")
}
