//! # consilium-client
//!
//! The interaction overlay engine driven by the presentation layer.
//!
//! An [`Engine`] merges the immutable base records with local, optimistic
//! mutations (likes, comments, chat messages and new threads) and exposes a
//! single coherent view of both.

pub mod commands;
pub mod config;
pub mod events;
pub mod session;
pub mod state;
pub mod views;

use tracing_subscriber::{fmt, EnvFilter};

pub use commands::files::PendingAttachment;
pub use config::ClientConfig;
pub use events::EngineEvent;
pub use state::{Engine, SharedEngine};

/// Install the global tracing subscriber (respects `RUST_LOG`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,consilium_client=debug,consilium_store=debug")
    });

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
