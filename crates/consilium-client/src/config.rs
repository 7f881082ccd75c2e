//! Client configuration loaded from environment variables.
//!
//! All settings have sensible defaults so the engine can start with zero
//! configuration for local development.

use consilium_shared::constants::{DEFAULT_CURRENT_USER_ID, MAX_ATTACHMENT_SIZE};
use consilium_shared::UserId;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Id of the signed-in doctor; used as the sender of chat messages.
    /// Env: `CONSILIUM_USER_ID`
    /// Default: `7`
    pub current_user_id: UserId,

    /// Display name credited on comments written by the current user.
    /// Env: `CONSILIUM_USER_NAME`
    /// Default: `"Dr. Current User"`
    pub current_user_name: String,

    /// Specialty credited on comments written by the current user.
    /// Env: `CONSILIUM_USER_SPECIALTY`
    /// Default: `"Therapist"`
    pub current_user_specialty: String,

    /// Largest attachment accepted, in bytes.
    /// Env: `CONSILIUM_MAX_ATTACHMENT_BYTES`
    /// Default: 50 MiB
    pub max_attachment_bytes: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            current_user_id: UserId(DEFAULT_CURRENT_USER_ID),
            current_user_name: "Dr. Current User".to_string(),
            current_user_specialty: "Therapist".to_string(),
            max_attachment_bytes: MAX_ATTACHMENT_SIZE,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup("CONSILIUM_USER_ID") {
            match val.trim().parse::<u64>() {
                Ok(id) => config.current_user_id = UserId(id),
                Err(e) => {
                    tracing::warn!(
                        value = %val,
                        error = %e,
                        "Invalid CONSILIUM_USER_ID, using default"
                    );
                }
            }
        }

        if let Some(name) = lookup("CONSILIUM_USER_NAME") {
            if !name.trim().is_empty() {
                config.current_user_name = name;
            }
        }

        if let Some(specialty) = lookup("CONSILIUM_USER_SPECIALTY") {
            if !specialty.trim().is_empty() {
                config.current_user_specialty = specialty;
            }
        }

        if let Some(val) = lookup("CONSILIUM_MAX_ATTACHMENT_BYTES") {
            match val.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.max_attachment_bytes = n,
                _ => {
                    tracing::warn!(
                        value = %val,
                        "Invalid CONSILIUM_MAX_ATTACHMENT_BYTES, using default"
                    );
                }
            }
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }
}
