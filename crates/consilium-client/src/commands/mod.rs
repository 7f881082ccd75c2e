//! Mutation API exposed to the presentation layer.
//!
//! Each sub-module adds one group of operations to [`Engine`]. Every
//! operation either applies completely and publishes an
//! [`EngineEvent`](crate::events::EngineEvent), or returns an error with the
//! state untouched.
//!
//! [`Engine`]: crate::state::Engine

pub mod cases;
pub mod comments;
pub mod files;
pub mod likes;
pub mod messaging;
