//! # consilium-store
//!
//! In-memory state for the Consilium interaction overlay engine.
//!
//! The [`BaseStore`] holds the immutable records loaded at session start.
//! Local, unconfirmed mutations live beside it in the [`OverlayStore`]
//! (likes and comments) and the [`ThreadRegistry`] (chat threads and their
//! messages).  The [`merge`] module projects both layers into the values the
//! presentation layer displays.

pub mod base;
pub mod merge;
pub mod models;
pub mod overlay;
pub mod seed;
pub mod threads;

mod error;

pub use base::BaseStore;
pub use error::Result;
pub use models::*;
pub use overlay::OverlayStore;
pub use threads::ThreadRegistry;
