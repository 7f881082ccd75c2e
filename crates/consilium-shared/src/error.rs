use thiserror::Error;

use crate::types::CaseId;

/// Caller-correctable input errors.  State is never modified when one of
/// these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Comment content is empty")]
    EmptyComment,

    #[error("Message text is empty")]
    EmptyMessage,

    #[error("No active thread to send through")]
    NoActiveThread,

    #[error("No case is open to comment on")]
    NoActiveCase,

    #[error("Unknown case: {0}")]
    UnknownCase(CaseId),

    #[error("Attachment too large: {size} bytes (max {max})")]
    AttachmentTooLarge { size: usize, max: usize },
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// The validation failure behind this error, if that is what it is.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Io(_) => None,
        }
    }
}
