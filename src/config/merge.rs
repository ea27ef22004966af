//! Merge rules for layered settings sources.

mod merge_policy;

pub use merge_policy::builder_with_defaults;
