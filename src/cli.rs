//! CLI domain: parse, route, and output only.
//! No domain orchestration; the route table dispatches to the generation pipeline.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, Emit, InputArgs};
pub use route::RunContext;
