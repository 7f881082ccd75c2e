//! # consilium-shared
//!
//! Identifier newtypes, constants and error types shared by the store and
//! client crates.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{EngineError, ValidationError};
pub use types::{CaseId, CommentId, MessageId, ThreadId, UserId};
