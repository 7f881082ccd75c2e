//! Pure projections of base records through the overlay.
//!
//! None of these functions can fail and none of them cache anything: callers
//! recompute on every read.

use crate::models::{Case, Comment};
use crate::overlay::OverlayStore;

/// Local like count if one was recorded, the base count otherwise.
pub fn effective_like_count(overlay: &OverlayStore, case: &Case) -> u32 {
    overlay
        .like_override(case.id)
        .unwrap_or(case.base_like_count)
}

/// The comment list to display for `case`, oldest first.
///
/// Once a local comment has been appended the overlay list (seeded from the
/// base list at that moment) replaces the base list outright.
pub fn effective_comment_list<'a>(overlay: &'a OverlayStore, case: &'a Case) -> &'a [Comment] {
    overlay
        .comment_override(case.id)
        .unwrap_or(case.base_comments.as_slice())
}

pub fn effective_comment_count(overlay: &OverlayStore, case: &Case) -> usize {
    effective_comment_list(overlay, case).len()
}

pub fn effective_comment_like_count(overlay: &OverlayStore, comment: &Comment) -> u32 {
    overlay
        .comment_like_override(comment.id)
        .unwrap_or(comment.base_like_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Author;
    use chrono::Utc;
    use consilium_shared::{CaseId, CommentId};

    fn comment(id: u64, likes: u32) -> Comment {
        Comment {
            id: CommentId(id),
            author: Author::new("Dr. Petrova E.M.", "Clinical pharmacologist"),
            content: format!("base {id}"),
            created_at: Utc::now(),
            base_like_count: likes,
        }
    }

    fn case_with(likes: u32, comments: Vec<Comment>) -> Case {
        Case {
            id: CaseId(1),
            title: "Autoimmune workup".into(),
            specialty: "Rheumatology".into(),
            author: Author::new("Dr. Ivanova A.S.", "Rheumatologist"),
            description: String::new(),
            tags: vec!["Autoimmune".into()],
            base_like_count: likes,
            base_comments: comments,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_untouched_case_shows_base_values() {
        let case = case_with(24, vec![comment(1, 3), comment(2, 0)]);
        let overlay = OverlayStore::default();

        assert_eq!(effective_like_count(&overlay, &case), 24);
        assert_eq!(effective_comment_count(&overlay, &case), 2);
        assert_eq!(effective_comment_list(&overlay, &case), case.base_comments.as_slice());
        assert_eq!(effective_comment_like_count(&overlay, &case.base_comments[0]), 3);
    }

    #[test]
    fn test_likes_add_on_top_of_base() {
        let case = case_with(24, vec![]);
        let mut overlay = OverlayStore::default();
        for _ in 0..3 {
            overlay.record_like(&case);
        }
        assert_eq!(effective_like_count(&overlay, &case), 27);
    }

    #[test]
    fn test_overlay_comment_list_replaces_base() {
        let case = case_with(0, vec![comment(1, 0), comment(2, 0)]);
        let mut overlay = OverlayStore::new(2);
        overlay
            .append_comment(&case, "doctor X", "cardiology", "agree")
            .unwrap();

        let list = effective_comment_list(&overlay, &case);
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].content, "base 1");
        assert_eq!(list[2].content, "agree");
        assert_eq!(effective_comment_count(&overlay, &case), 3);
    }

    #[test]
    fn test_comment_like_overlay() {
        let base = comment(5, 2);
        let mut overlay = OverlayStore::default();
        overlay.record_comment_like(base.id, base.base_like_count);
        assert_eq!(effective_comment_like_count(&overlay, &base), 3);
    }
}
