use thiserror::Error;

/// Errors reported by wizard navigation and construction.
///
/// Every variant is recoverable; the controller state is left untouched
/// whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("step index {index} is out of range for a wizard with {len} steps")]
    OutOfRange { index: usize, len: usize },

    #[error("a wizard needs at least one step")]
    EmptyRegistry,

    #[error("step '{0}' is registered more than once")]
    DuplicateStep(String),

    #[error("step '{0}' is not part of this wizard")]
    UnknownStep(String),

    #[error("wizard session has shut down")]
    SessionClosed,
}
