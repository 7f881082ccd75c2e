use tracing::info;

use consilium_shared::{CaseId, ValidationError};
use consilium_store::Comment;

use crate::events::{emit_event, EngineEvent};
use crate::state::Engine;

impl Engine {
    /// Append a local comment to a case.
    ///
    /// Blank content fails with [`ValidationError::EmptyComment`]; an unknown
    /// case with [`ValidationError::UnknownCase`].  Either way nothing changes.
    pub fn append_comment(
        &mut self,
        case_id: CaseId,
        author_name: &str,
        author_specialty: &str,
        content: &str,
    ) -> Result<Comment, ValidationError> {
        let case = self
            .base
            .case(case_id)
            .ok_or(ValidationError::UnknownCase(case_id))?;
        let comment = self
            .overlay
            .append_comment(case, author_name, author_specialty, content)?;

        info!(case = %case_id, comment = %comment.id, "Comment added");
        emit_event(
            &self.events,
            EngineEvent::CommentAdded {
                case_id,
                comment_id: comment.id,
            },
        );
        Ok(comment)
    }

    /// Append a comment authored by the configured current user.
    pub fn comment_as_current_user(
        &mut self,
        case_id: CaseId,
        content: &str,
    ) -> Result<Comment, ValidationError> {
        let name = self.config.current_user_name.clone();
        let specialty = self.config.current_user_specialty.clone();
        self.append_comment(case_id, &name, &specialty, content)
    }

    /// Comment on the case whose detail view is open, as the current user.
    pub fn comment_on_active_case(&mut self, content: &str) -> Result<Comment, ValidationError> {
        let case_id = self
            .session
            .active_case_detail()
            .ok_or(ValidationError::NoActiveCase)?;
        self.comment_as_current_user(case_id, content)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ClientConfig;
    use crate::state::Engine;
    use consilium_shared::{CaseId, ValidationError};
    use consilium_store::seed::demo_base_store;

    fn engine() -> Engine {
        Engine::new(demo_base_store(), ClientConfig::default())
    }

    #[test]
    fn test_append_grows_merged_list_by_one() {
        let mut engine = engine();
        let comment = engine
            .append_comment(CaseId(1), "doctor X", "cardiology", "agree")
            .unwrap();

        let case = engine.case(CaseId(1)).unwrap();
        assert_eq!(engine.effective_comment_count(case), 3);
        let list = engine.effective_comment_list(case);
        assert_eq!(list[2].content, "agree");
        assert_eq!(list[2].id, comment.id);
        assert_eq!(case.base_comments.len(), 2);
    }

    #[test]
    fn test_new_comment_id_is_unused_in_case() {
        let mut engine = engine();
        let comment = engine.comment_as_current_user(CaseId(1), "noted").unwrap();
        let case = engine.case(CaseId(1)).unwrap();
        assert!(case.base_comments.iter().all(|c| c.id != comment.id));
        assert_eq!(comment.author.name, "Dr. Current User");
    }

    #[test]
    fn test_blank_comments_rejected_without_change() {
        let mut engine = engine();
        for blank in ["", "   "] {
            assert_eq!(
                engine.append_comment(CaseId(1), "doctor X", "cardiology", blank),
                Err(ValidationError::EmptyComment)
            );
        }
        let case = engine.case(CaseId(1)).unwrap();
        assert_eq!(engine.effective_comment_count(case), 2);
        assert!(engine.overlay.is_empty());
    }

    #[test]
    fn test_comment_on_active_case_requires_open_detail() {
        let mut engine = engine();
        assert_eq!(
            engine.comment_on_active_case("hello"),
            Err(ValidationError::NoActiveCase)
        );

        engine.open_case_detail(CaseId(2));
        engine.comment_on_active_case("CT ordered").unwrap();
        let case = engine.case(CaseId(2)).unwrap();
        assert_eq!(engine.effective_comment_count(case), 2);
    }
}
