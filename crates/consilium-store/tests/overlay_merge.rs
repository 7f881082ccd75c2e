use std::collections::HashSet;

use consilium_shared::{CaseId, UserId};
use consilium_store::merge::{
    effective_comment_count, effective_comment_like_count, effective_comment_list,
    effective_like_count,
};
use consilium_store::seed::demo_base_store;
use consilium_store::{MessageKind, OverlayStore, ThreadRegistry};

#[test]
fn base_values_until_first_local_write() {
    let base = demo_base_store();
    let overlay = OverlayStore::new(base.max_comment_id());

    for case in base.cases() {
        assert_eq!(effective_like_count(&overlay, case), case.base_like_count);
        assert_eq!(effective_comment_list(&overlay, case), case.base_comments.as_slice());
        for comment in &case.base_comments {
            assert_eq!(
                effective_comment_like_count(&overlay, comment),
                comment.base_like_count
            );
        }
    }
}

#[test]
fn n_likes_add_n() {
    let base = demo_base_store();
    let mut overlay = OverlayStore::new(base.max_comment_id());
    let case = base.case(CaseId(3)).unwrap();

    for n in 1..=10 {
        overlay.record_like(case);
        assert_eq!(effective_like_count(&overlay, case), case.base_like_count + n);
    }
}

#[test]
fn local_comment_ids_unique_across_cases() {
    let base = demo_base_store();
    let mut overlay = OverlayStore::new(base.max_comment_id());

    let mut ids = Vec::new();
    for case in base.cases() {
        ids.push(overlay.append_comment(case, "a", "b", "x").unwrap().id);
    }
    let distinct: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(distinct.len(), ids.len());
    assert!(ids.iter().all(|id| id.0 > base.max_comment_id()));

    let case = base.case(CaseId(2)).unwrap();
    assert_eq!(effective_comment_count(&overlay, case), 2);
}

#[test]
fn registry_keeps_one_thread_per_counterpart() {
    let base = demo_base_store();
    let mut threads = ThreadRegistry::new(base.seeded_threads());

    for user in base.users() {
        threads.get_or_create(user.id);
        threads.get_or_create(user.id);
    }
    assert_eq!(threads.len(), base.users().len());

    let (id, created) = threads.get_or_create(UserId(1));
    assert!(!created);
    let message = threads
        .append(id, UserId(7), MessageKind::Text, "hi".into(), None)
        .unwrap();
    assert_eq!(message.id.0, 5);
}
