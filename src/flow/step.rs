use crate::errors::FlowStage;

/// The one canonical step progression of the issuance flow.
///
/// Earlier revisions of this UI recomputed the step from loose boolean
/// flags in several places; this enum plus the controller's transition
/// methods are now the single source of truth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowStep {
    /// No login, no wallet, no session token.
    Unauthenticated,
    /// Login/connect/verify round trips in progress or awaited.
    Authorizing,
    /// Session established and user data fetched; awaiting "Confirm".
    Preview,
    /// Issuance call in flight.
    Issuing,
    /// Credential issued. Terminal for this session.
    Success,
    /// Something broke; `stage` says which retry path applies.
    Failed { stage: FlowStage },
}

impl FlowStep {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlowStep::Success)
    }
}
