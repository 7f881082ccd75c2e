//! Local, unconfirmed deltas layered over the base cases.
//!
//! Three maps are kept, each keyed by the id of the entity it shadows:
//!
//! - case like counts,
//! - per-case comment lists (seeded from the base list on the first append),
//! - comment like counts.
//!
//! A missing key always means "no local change, use the base value".

use std::collections::HashMap;

use chrono::Utc;
use tracing::debug;

use consilium_shared::{CaseId, CommentId, ValidationError};

use crate::error::Result;
use crate::models::{Author, Case, Comment};

#[derive(Debug, Clone, Default)]
pub struct OverlayStore {
    likes: HashMap<CaseId, u32>,
    comments: HashMap<CaseId, Vec<Comment>>,
    comment_likes: HashMap<CommentId, u32>,
    /// Highest comment id issued or loaded so far.  Never reset, so ids stay
    /// unique across cases and across `clear()`.
    last_comment_id: u64,
}

impl OverlayStore {
    /// Create an empty overlay.  `max_base_comment_id` is the largest
    /// comment id present in the base data; new ids are issued above it.
    pub fn new(max_base_comment_id: u64) -> Self {
        Self {
            last_comment_id: max_base_comment_id,
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Add one like to `case` and return the new effective count.
    ///
    /// Every call increments; there is no per-user deduplication.
    pub fn record_like(&mut self, case: &Case) -> u32 {
        let count = self.likes.entry(case.id).or_insert(case.base_like_count);
        *count = count.saturating_add(1);
        debug!(case = %case.id, likes = *count, "Recorded case like");
        *count
    }

    /// Add one like to a comment whose base count is supplied by the caller.
    pub fn record_comment_like(&mut self, comment_id: CommentId, base_like_count: u32) -> u32 {
        let count = self
            .comment_likes
            .entry(comment_id)
            .or_insert(base_like_count);
        *count = count.saturating_add(1);
        debug!(comment = %comment_id, likes = *count, "Recorded comment like");
        *count
    }

    /// Append a locally-authored comment to `case`.
    ///
    /// Content is trimmed; empty content is rejected and nothing changes.
    /// The first append for a case copies the base comment list into the
    /// overlay, after which the overlay list replaces the base list in every
    /// merged view.
    pub fn append_comment(
        &mut self,
        case: &Case,
        author_name: &str,
        author_specialty: &str,
        content: &str,
    ) -> Result<Comment> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ValidationError::EmptyComment);
        }

        let list = self
            .comments
            .entry(case.id)
            .or_insert_with(|| case.base_comments.clone());

        let visible_max = list.iter().map(|c| c.id.0).max().unwrap_or(0);
        let id = CommentId(self.last_comment_id.max(visible_max).saturating_add(1));
        self.last_comment_id = id.0;

        let comment = Comment {
            id,
            author: Author::new(author_name, author_specialty),
            content: content.to_string(),
            created_at: Utc::now(),
            base_like_count: 0,
        };
        list.push(comment.clone());

        debug!(
            case = %case.id,
            comment = %id,
            total = list.len(),
            "Appended local comment"
        );
        Ok(comment)
    }

    /// Drop every local delta.  Issued comment ids are not reused.
    pub fn clear(&mut self) {
        self.likes.clear();
        self.comments.clear();
        self.comment_likes.clear();
    }

    // ------------------------------------------------------------------
    // Raw reads (see `merge` for the effective values)
    // ------------------------------------------------------------------

    pub fn like_override(&self, case_id: CaseId) -> Option<u32> {
        self.likes.get(&case_id).copied()
    }

    pub fn comment_override(&self, case_id: CaseId) -> Option<&[Comment]> {
        self.comments.get(&case_id).map(Vec::as_slice)
    }

    pub fn comment_like_override(&self, comment_id: CommentId) -> Option<u32> {
        self.comment_likes.get(&comment_id).copied()
    }

    /// Whether no local delta of any kind is held.
    pub fn is_empty(&self) -> bool {
        self.likes.is_empty() && self.comments.is_empty() && self.comment_likes.is_empty()
    }
}
