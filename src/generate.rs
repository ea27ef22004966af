//! Generation pipeline: reconcile, synthesize, and gate both results on
//! completeness. Every call builds both documents from scratch.

use crate::error::GenerateError;
use crate::intermediate::IntermediateDocument;
use crate::raw::RawConfig;
use crate::reconcile::reconcile;
use crate::synthesis::synthesize;
use crate::validate;
use crate::vis_state::VisState;
use serde::Serialize;
use tracing::{info, instrument};

/// Both documents produced by one generation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Generated {
    pub intermediate: IntermediateDocument,
    #[serde(rename = "visState")]
    pub vis_state: VisState,
}

/// Generate the visualization state for one dashboard/viz config pair.
///
/// Fails with `IncompleteConfiguration` when a required field cannot be resolved
/// from either source and with `IncompleteSynthesis` when the synthesized
/// document still has unresolved fields (for example an unknown aggregation
/// schema).
#[instrument(level = "debug", skip_all)]
pub fn generate(dashboard: &RawConfig, viz: &RawConfig) -> Result<Generated, GenerateError> {
    let intermediate = reconcile(dashboard, viz)?;
    let vis_state = synthesize(&intermediate)?;

    let missing = validate::unresolved_paths(&vis_state.to_value()?);
    if !missing.is_empty() {
        return Err(GenerateError::IncompleteSynthesis { missing });
    }

    info!(
        aggs = vis_state.aggs.len(),
        value_axes = vis_state.params.value_axes.len(),
        "Generated visualization state"
    );
    Ok(Generated {
        intermediate,
        vis_state,
    })
}
