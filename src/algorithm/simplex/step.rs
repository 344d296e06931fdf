//! # Step log for playback
//!
//! Besides the tableau history, a run produces an append-only log of the decisions that were
//! taken, in replay order, so a consumer can narrate the algorithm without re-deriving it.
use serde::Serialize;

/// What kind of decision a step records.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum StepAction {
    ConvertToStandardForm,
    InitialTableau,
    SelectEnteringVariable,
    SelectLeavingVariable,
    Pivot,
    Optimal,
    Unbounded,
}

/// One record of the playback log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SimplexStep {
    /// Iteration the step belongs to.
    pub iteration: usize,
    /// The kind of decision taken.
    pub action: StepAction,
    /// Short human-readable description of the step.
    pub description: String,
    /// Free-text detail, such as the selected variable and the value that led to its selection.
    pub detail: Option<String>,
    /// Index into the solution's tableau history of the tableau this step produced, if any.
    pub tableau: Option<usize>,
}

impl SimplexStep {
    pub(crate) fn new(
        iteration: usize,
        action: StepAction,
        description: impl Into<String>,
        detail: Option<String>,
        tableau: Option<usize>,
    ) -> Self {
        Self { iteration, action, description: description.into(), detail, tableau }
    }
}
