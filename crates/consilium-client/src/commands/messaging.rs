use tracing::info;

use consilium_shared::{ThreadId, UserId, ValidationError};
use consilium_store::{Message, MessageKind};

use crate::events::{emit_event, EngineEvent};
use crate::state::Engine;

impl Engine {
    /// Open the conversation with a directory user.
    ///
    /// Reuses the existing thread with `user_id` when there is one, so a
    /// user never ends up with two threads.  Returns `None` for a user that
    /// is not in the directory.
    pub fn open_thread_with_user(&mut self, user_id: UserId) -> Option<ThreadId> {
        let opened = self
            .session
            .open_thread_with_user(&self.base, &mut self.threads, user_id)?;

        info!(
            thread = %opened.thread_id,
            user = %user_id,
            created = opened.created,
            "Chat opened"
        );
        emit_event(
            &self.events,
            EngineEvent::ThreadOpened {
                thread_id: opened.thread_id,
                created: opened.created,
            },
        );
        Some(opened.thread_id)
    }

    /// Select an existing thread.  Unknown ids are a no-op.
    pub fn open_thread(&mut self, thread_id: ThreadId) -> bool {
        if !self.session.open_thread(&mut self.threads, thread_id) {
            return false;
        }
        emit_event(
            &self.events,
            EngineEvent::ThreadOpened {
                thread_id,
                created: false,
            },
        );
        true
    }

    /// Fails with [`ValidationError::NoActiveThread`] unless `thread_id` is
    /// the thread currently open in the session.
    pub(crate) fn ensure_active_thread(
        &self,
        thread_id: ThreadId,
    ) -> Result<(), ValidationError> {
        if self.session.active_thread() == Some(thread_id) {
            Ok(())
        } else {
            Err(ValidationError::NoActiveThread)
        }
    }

    /// Append a text message to the active thread.
    ///
    /// Fails with [`ValidationError::EmptyMessage`] for blank text and
    /// [`ValidationError::NoActiveThread`] when `thread_id` is not the
    /// active thread.
    pub fn send_message(
        &mut self,
        thread_id: ThreadId,
        sender_id: UserId,
        text: &str,
    ) -> Result<Message, ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        self.ensure_active_thread(thread_id)?;

        let message = self.threads.append(
            thread_id,
            sender_id,
            MessageKind::Text,
            text.to_string(),
            None,
        )?;

        info!(thread = %thread_id, message = %message.id, "Message sent");
        emit_event(
            &self.events,
            EngineEvent::MessageAppended {
                thread_id,
                message_id: message.id,
            },
        );
        Ok(message)
    }

    /// Send a text message from the current user through the active thread.
    pub fn send_to_active(&mut self, text: &str) -> Result<Message, ValidationError> {
        let thread_id = self
            .session
            .active_thread()
            .ok_or(ValidationError::NoActiveThread)?;
        let sender = self.config.current_user_id;
        self.send_message(thread_id, sender, text)
    }
}
