//! File and image attachments.
//!
//! Reading the bytes is the only asynchronous step.  It produces a
//! [`PendingAttachment`] without touching the engine, so a read that is
//! cancelled or fails leaves every thread exactly as it was.  Only
//! [`Engine::send_attachment`] appends to a thread.

use std::path::Path;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::info;
use uuid::Uuid;

use consilium_shared::constants::{ATTACHMENT_BODY_PREFIX, ATTACHMENT_URL_SCHEME};
use consilium_shared::{EngineError, ThreadId, UserId, ValidationError};
use consilium_store::{Attachment, Message, MessageKind};

use crate::events::{emit_event, EngineEvent};
use crate::state::Engine;

/// A fully read file, ready to be attached to a message.
#[derive(Debug, Clone)]
pub struct PendingAttachment {
    pub file_name: String,
    pub media_type: String,
    bytes: Arc<[u8]>,
}

impl PendingAttachment {
    /// Read an attachment to the end from `reader`.
    ///
    /// Fails with [`ValidationError::AttachmentTooLarge`] as soon as more
    /// than `max_bytes` have been read.
    pub async fn read_from<R>(
        mut reader: R,
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        max_bytes: usize,
    ) -> Result<Self, EngineError>
    where
        R: AsyncRead + Unpin,
    {
        let mut bytes = Vec::new();
        // One byte over the limit is enough to know it does not fit.
        let limit = u64::try_from(max_bytes).unwrap_or(u64::MAX).saturating_add(1);
        (&mut reader).take(limit).read_to_end(&mut bytes).await?;

        if bytes.len() > max_bytes {
            return Err(ValidationError::AttachmentTooLarge {
                size: bytes.len(),
                max: max_bytes,
            }
            .into());
        }

        Ok(Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes: bytes.into(),
        })
    }

    /// Read an attachment from disk, naming it after the file.
    pub async fn from_path(
        path: impl AsRef<Path>,
        media_type: impl Into<String>,
        max_bytes: usize,
    ) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        let size = tokio::fs::metadata(path).await?.len();
        if size > u64::try_from(max_bytes).unwrap_or(u64::MAX) {
            return Err(ValidationError::AttachmentTooLarge {
                size: usize::try_from(size).unwrap_or(usize::MAX),
                max: max_bytes,
            }
            .into());
        }

        let file = tokio::fs::File::open(path).await?;
        Self::read_from(file, file_name, media_type, max_bytes).await
    }

    pub fn kind(&self) -> MessageKind {
        MessageKind::for_media_type(&self.media_type)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Engine {
    /// Append a message carrying `file` to the active thread.
    ///
    /// The kind is `image` for `image/*` media types and `file` otherwise.
    /// Fails with [`ValidationError::NoActiveThread`] when `thread_id` is not
    /// the active thread.
    pub fn send_attachment(
        &mut self,
        thread_id: ThreadId,
        sender_id: UserId,
        file: PendingAttachment,
    ) -> Result<Message, ValidationError> {
        self.ensure_active_thread(thread_id)?;

        let url = format!("{ATTACHMENT_URL_SCHEME}{}", Uuid::new_v4());
        let kind = file.kind();
        let size = file.len();
        let attachment = Attachment {
            url: url.clone(),
            file_name: file.file_name.clone(),
            media_type: file.media_type.clone(),
            size: size as u64,
            content_hash: blake3::hash(&file.bytes).to_hex().to_string(),
        };
        let body = format!("{ATTACHMENT_BODY_PREFIX}{}", file.file_name);

        let message = self
            .threads
            .append(thread_id, sender_id, kind, body, Some(attachment))?;
        self.blobs.insert(url, file.bytes);

        info!(
            thread = %thread_id,
            message = %message.id,
            file_name = %file.file_name,
            size,
            kind = ?kind,
            "Attachment sent"
        );
        emit_event(
            &self.events,
            EngineEvent::MessageAppended {
                thread_id,
                message_id: message.id,
            },
        );
        Ok(message)
    }

    /// Send an attachment from the current user through the active thread.
    pub fn send_attachment_to_active(
        &mut self,
        file: PendingAttachment,
    ) -> Result<Message, ValidationError> {
        let thread_id = self
            .session
            .active_thread()
            .ok_or(ValidationError::NoActiveThread)?;
        let sender = self.config.current_user_id;
        self.send_attachment(thread_id, sender, file)
    }
}
