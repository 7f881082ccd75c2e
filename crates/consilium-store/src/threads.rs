//! Chat threads for the current session.
//!
//! The registry starts from the seeded threads of the base store; threads
//! opened from the directory and every message sent locally are added on
//! top.  At most one thread exists per counterpart.

use chrono::Utc;
use tracing::debug;

use consilium_shared::types::next_free_id;
use consilium_shared::{ThreadId, UserId, ValidationError};

use crate::error::Result;
use crate::models::{Attachment, ChatThread, Message, MessageKind};

#[derive(Debug, Clone, Default)]
pub struct ThreadRegistry {
    /// Newest first.
    threads: Vec<ChatThread>,
}

impl ThreadRegistry {
    pub fn new(seeded: &[ChatThread]) -> Self {
        Self {
            threads: seeded.to_vec(),
        }
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    pub fn get(&self, id: ThreadId) -> Option<&ChatThread> {
        self.threads.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: ThreadId) -> bool {
        self.get(id).is_some()
    }

    pub fn find_by_counterpart(&self, user: UserId) -> Option<&ChatThread> {
        self.threads.iter().find(|t| t.counterpart == user)
    }

    /// All threads, newest first.
    pub fn threads(&self) -> &[ChatThread] {
        &self.threads
    }

    pub fn len(&self) -> usize {
        self.threads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }

    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    /// Return the thread with `counterpart`, creating an empty one at the
    /// front of the list if none exists.  The flag is `true` when a thread
    /// was created.
    pub fn get_or_create(&mut self, counterpart: UserId) -> (ThreadId, bool) {
        if let Some(existing) = self.find_by_counterpart(counterpart) {
            return (existing.id, false);
        }

        let id: ThreadId = next_free_id(self.threads.iter().map(|t| t.id.0));
        self.threads.insert(0, ChatThread::new(id, counterpart));
        debug!(thread = %id, counterpart = %counterpart, "Created chat thread");
        (id, true)
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    /// Append a message to a thread and return a copy of it.
    ///
    /// Fails with [`ValidationError::NoActiveThread`] when `thread_id` is not
    /// registered; the registry is untouched in that case.
    pub fn append(
        &mut self,
        thread_id: ThreadId,
        sender_id: UserId,
        kind: MessageKind,
        body: String,
        attachment: Option<Attachment>,
    ) -> Result<Message> {
        let thread = self
            .threads
            .iter_mut()
            .find(|t| t.id == thread_id)
            .ok_or(ValidationError::NoActiveThread)?;

        let message = Message {
            id: thread.next_message_id(),
            sender_id,
            kind,
            body,
            attachment,
            created_at: Utc::now(),
        };
        thread.messages.push(message.clone());

        debug!(
            thread = %thread_id,
            message = %message.id,
            kind = ?kind,
            "Appended chat message"
        );
        Ok(message)
    }

    /// Reset a thread's unread counter.  Returns `false` if it was already
    /// zero or the thread is unknown.
    pub fn mark_read(&mut self, thread_id: ThreadId) -> bool {
        match self.threads.iter_mut().find(|t| t.id == thread_id) {
            Some(thread) if thread.unread > 0 => {
                thread.unread = 0;
                true
            }
            _ => false,
        }
    }
}
