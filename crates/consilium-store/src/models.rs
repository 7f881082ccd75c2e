//! Domain model structs held by the engine.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be handed
//! directly to the presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use consilium_shared::constants::IMAGE_MEDIA_PREFIX;
use consilium_shared::{CaseId, CommentId, MessageId, ThreadId, UserId};

// ---------------------------------------------------------------------------
// Author
// ---------------------------------------------------------------------------

/// The doctor credited with a case or a comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub specialty: String,
}

impl Author {
    pub fn new(name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specialty: specialty.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Case
// ---------------------------------------------------------------------------

/// A clinical case published to the feed.  Never edited after load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Case {
    pub id: CaseId,
    pub title: String,
    /// Medical specialty the case is filed under.
    pub specialty: String,
    pub author: Author,
    pub description: String,
    /// Display tags, in display order.
    pub tags: Vec<String>,
    /// Like count as loaded, before any local likes.
    pub base_like_count: u32,
    /// Comments as loaded, oldest first.
    pub base_comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Comment
// ---------------------------------------------------------------------------

/// A comment under a case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub author: Author,
    /// Never empty after trimming.
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub base_like_count: u32,
}

// ---------------------------------------------------------------------------
// ChatUser
// ---------------------------------------------------------------------------

/// A directory entry: somebody the current user can open a chat with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatUser {
    pub id: UserId,
    pub name: String,
    pub specialty: String,
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Image,
    File,
}

impl MessageKind {
    /// Classify an attachment by its declared media type.
    pub fn for_media_type(media_type: &str) -> Self {
        if media_type.starts_with(IMAGE_MEDIA_PREFIX) {
            Self::Image
        } else {
            Self::File
        }
    }
}

/// Reference to a file that was attached to a message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    /// Local object url the presentation layer can render from.
    pub url: String,
    pub file_name: String,
    pub media_type: String,
    pub size: u64,
    /// BLAKE3 hash of the file bytes (hex).
    pub content_hash: String,
}

/// A single chat message.  Append-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub sender_id: UserId,
    pub kind: MessageKind,
    pub body: String,
    pub attachment: Option<Attachment>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// ChatThread
// ---------------------------------------------------------------------------

/// A one-to-one conversation with a directory user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatThread {
    pub id: ThreadId,
    /// Lookup key into the user directory, not an owned copy.
    pub counterpart: UserId,
    /// Oldest first.
    pub messages: Vec<Message>,
    pub unread: u32,
}

impl ChatThread {
    /// A fresh, empty thread with nothing unread.
    pub fn new(id: ThreadId, counterpart: UserId) -> Self {
        Self {
            id,
            counterpart,
            messages: Vec::new(),
            unread: 0,
        }
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Id the next appended message will receive.
    pub fn next_message_id(&self) -> MessageId {
        self.messages
            .iter()
            .map(|m| m.id)
            .max()
            .map_or(MessageId(1), MessageId::next)
    }
}
