//! Display-ready projections for the presentation layer.
//!
//! Everything here is computed from the merge functions on each call; the
//! DTOs serialize in camelCase so they can be handed straight to a UI.

use chrono::{DateTime, Utc};
use serde::Serialize;

use consilium_shared::{CaseId, CommentId, MessageId, ThreadId, UserId};
use consilium_store::{Attachment, Case, ChatThread, Comment, Message, MessageKind};

use crate::state::Engine;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CaseView {
    pub id: CaseId,
    pub title: String,
    pub specialty: String,
    pub author_name: String,
    pub author_specialty: String,
    pub author_initials: String,
    pub description: String,
    pub tags: Vec<String>,
    pub likes: u32,
    pub comment_count: usize,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: CommentId,
    pub author_name: String,
    pub author_specialty: String,
    pub author_initials: String,
    pub content: String,
    pub likes: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThreadSummary {
    pub id: ThreadId,
    pub counterpart_id: UserId,
    pub counterpart_name: String,
    pub counterpart_specialty: String,
    pub counterpart_initials: String,
    pub last_message: Option<String>,
    pub unread: u32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    pub id: MessageId,
    pub is_mine: bool,
    pub kind: MessageKind,
    pub body: String,
    pub attachment: Option<Attachment>,
    pub created_at: DateTime<Utc>,
}

/// Avatar fallback: first letter of each of the first two words.
///
/// ```
/// assert_eq!(consilium_client::views::initials("Dr. Kozlov I.P."), "DK");
/// ```
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .collect()
}

impl Engine {
    pub fn case_view(&self, case: &Case) -> CaseView {
        CaseView {
            id: case.id,
            title: case.title.clone(),
            specialty: case.specialty.clone(),
            author_name: case.author.name.clone(),
            author_specialty: case.author.specialty.clone(),
            author_initials: initials(&case.author.name),
            description: case.description.clone(),
            tags: case.tags.clone(),
            likes: self.effective_like_count(case),
            comment_count: self.effective_comment_count(case),
            created_at: case.created_at,
        }
    }

    /// The feed, in base order, with local likes and comments applied.
    pub fn feed(&self) -> Vec<CaseView> {
        self.cases().iter().map(|c| self.case_view(c)).collect()
    }

    pub fn comment_view(&self, comment: &Comment) -> CommentView {
        CommentView {
            id: comment.id,
            author_name: comment.author.name.clone(),
            author_specialty: comment.author.specialty.clone(),
            author_initials: initials(&comment.author.name),
            content: comment.content.clone(),
            likes: self.effective_comment_like_count(comment),
            created_at: comment.created_at,
        }
    }

    /// Merged comments of a case, oldest first.  Empty for unknown cases.
    pub fn case_comments(&self, case_id: CaseId) -> Vec<CommentView> {
        self.case(case_id)
            .map(|case| {
                self.effective_comment_list(case)
                    .iter()
                    .map(|c| self.comment_view(c))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn thread_summary(&self, thread: &ChatThread) -> ThreadSummary {
        let counterpart = self.base.user(thread.counterpart);
        let name = counterpart.map(|u| u.name.clone()).unwrap_or_default();
        ThreadSummary {
            id: thread.id,
            counterpart_id: thread.counterpart,
            counterpart_initials: initials(&name),
            counterpart_name: name,
            counterpart_specialty: counterpart
                .map(|u| u.specialty.clone())
                .unwrap_or_default(),
            last_message: thread.last_message().map(|m| m.body.clone()),
            unread: thread.unread,
            is_active: self.active_thread() == Some(thread.id),
        }
    }

    /// The thread list, newest first.
    pub fn thread_summaries(&self) -> Vec<ThreadSummary> {
        self.threads().iter().map(|t| self.thread_summary(t)).collect()
    }

    fn message_view(&self, message: &Message) -> MessageView {
        MessageView {
            id: message.id,
            is_mine: message.sender_id == self.config.current_user_id,
            kind: message.kind,
            body: message.body.clone(),
            attachment: message.attachment.clone(),
            created_at: message.created_at,
        }
    }

    /// Messages of the active thread from the current user's point of view.
    pub fn active_message_views(&self) -> Vec<MessageView> {
        self.active_messages()
            .iter()
            .map(|m| self.message_view(m))
            .collect()
    }
}
