use tracing::info;

use consilium_shared::{CaseId, CommentId, ValidationError};

use crate::events::{emit_event, EngineEvent};
use crate::state::Engine;

impl Engine {
    /// Like a case and return its new effective like count.
    ///
    /// Each call adds one like, including repeated clicks.
    pub fn record_like(&mut self, case_id: CaseId) -> Result<u32, ValidationError> {
        let case = self
            .base
            .case(case_id)
            .ok_or(ValidationError::UnknownCase(case_id))?;
        let likes = self.overlay.record_like(case);

        info!(case = %case_id, likes, "Case liked");
        emit_event(&self.events, EngineEvent::CaseLiked { case_id, likes });
        Ok(likes)
    }

    /// Like a comment whose base like count the caller supplies.
    pub fn record_comment_like(&mut self, comment_id: CommentId, base_like_count: u32) -> u32 {
        let likes = self.overlay.record_comment_like(comment_id, base_like_count);

        info!(comment = %comment_id, likes, "Comment liked");
        emit_event(&self.events, EngineEvent::CommentLiked { comment_id, likes });
        likes
    }
}
