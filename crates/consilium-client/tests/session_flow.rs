use std::thread;

use consilium_client::{ClientConfig, Engine, EngineEvent, PendingAttachment};
use consilium_shared::{CaseId, UserId, ValidationError};
use consilium_store::seed::demo_base_store;
use consilium_store::MessageKind;

fn engine() -> Engine {
    Engine::new(demo_base_store(), ClientConfig::default())
}

#[test]
fn likes_and_comment_on_seeded_case() {
    let mut engine = engine();

    for _ in 0..3 {
        engine.record_like(CaseId(1)).unwrap();
    }
    engine
        .append_comment(CaseId(1), "doctor X", "cardiology", "agree")
        .unwrap();

    let case = engine.case(CaseId(1)).unwrap();
    assert_eq!(engine.effective_like_count(case), 27);
    assert_eq!(engine.effective_comment_count(case), 3);
    assert_eq!(engine.effective_comment_list(case)[2].content, "agree");
}

#[test]
fn comment_count_grows_by_one_per_success() {
    let mut engine = engine();
    let mut expected = 2;

    for text in ["first", " ", "second", "", "third"] {
        let result = engine.append_comment(CaseId(3), "Dr. Y", "Oncology", text);
        if text.trim().is_empty() {
            assert_eq!(result, Err(ValidationError::EmptyComment));
        } else {
            result.unwrap();
            expected += 1;
        }
        let case = engine.case(CaseId(3)).unwrap();
        assert_eq!(engine.effective_comment_count(case), expected);
    }
    assert_eq!(engine.case(CaseId(3)).unwrap().base_comments.len(), 2);
}

#[test]
fn reopened_chat_collects_messages_in_one_thread() {
    let mut engine = engine();
    let me = engine.config().current_user_id;
    let user = UserId(2);

    let thread = engine.open_thread_with_user(user).unwrap();
    engine.send_message(thread, me, "hello").unwrap();
    let again = engine.open_thread_with_user(user).unwrap();
    engine.send_message(again, me, "follow-up").unwrap();

    assert_eq!(thread, again);
    let bodies: Vec<_> = engine
        .thread(thread)
        .unwrap()
        .messages
        .iter()
        .map(|m| m.body.as_str())
        .collect();
    assert_eq!(bodies, ["hello", "follow-up"]);
    assert_eq!(engine.threads().len(), 3);
}

#[tokio::test]
async fn attachments_are_classified_by_media_type() {
    let mut engine = engine();
    engine.open_thread_with_user(UserId(4)).unwrap();

    let png = PendingAttachment::read_from(&b"png"[..], "ecg.png", "image/png", 64)
        .await
        .unwrap();
    let pdf = PendingAttachment::read_from(&b"pdf"[..], "ecg.pdf", "application/pdf", 64)
        .await
        .unwrap();

    assert_eq!(
        engine.send_attachment_to_active(png).unwrap().kind,
        MessageKind::Image
    );
    assert_eq!(
        engine.send_attachment_to_active(pdf).unwrap().kind,
        MessageKind::File
    );
}

#[test]
fn every_mutation_publishes_an_event() {
    let mut engine = engine();
    let mut rx = engine.subscribe();

    engine.record_like(CaseId(2)).unwrap();
    assert_eq!(
        engine.append_comment(CaseId(2), "a", "b", "   "),
        Err(ValidationError::EmptyComment)
    );
    engine.open_case_detail(CaseId(2));

    assert_eq!(
        rx.try_recv().unwrap(),
        EngineEvent::CaseLiked {
            case_id: CaseId(2),
            likes: 20
        }
    );
    assert_eq!(
        rx.try_recv().unwrap(),
        EngineEvent::CaseDetailChanged {
            case_id: Some(CaseId(2))
        }
    );
    assert!(rx.try_recv().is_err());
}

#[test]
fn shared_engine_counts_every_like_exactly_once() {
    let shared = engine().into_shared();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    shared.lock().unwrap().record_like(CaseId(1)).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let guard = shared.lock().unwrap();
    let case = guard.case(CaseId(1)).unwrap();
    assert_eq!(guard.effective_like_count(case), 24 + 200);
}

#[test]
fn clear_returns_to_base_view() {
    let mut engine = engine();
    engine.record_like(CaseId(1)).unwrap();
    engine.comment_as_current_user(CaseId(1), "note").unwrap();
    engine.open_thread_with_user(UserId(3)).unwrap();

    engine.clear();

    let case = engine.case(CaseId(1)).unwrap();
    assert_eq!(engine.effective_like_count(case), 24);
    assert_eq!(engine.effective_comment_count(case), 2);
    assert_eq!(engine.active_thread(), None);
    assert_eq!(engine.threads().len(), 2);
}
