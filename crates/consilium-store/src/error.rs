use consilium_shared::ValidationError;

/// Convenience alias used throughout the crate.  Every store mutation either
/// applies completely or fails validation without touching state.
pub type Result<T> = std::result::Result<T, ValidationError>;
