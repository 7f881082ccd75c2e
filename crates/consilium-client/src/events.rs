use serde::Serialize;
use tokio::sync::broadcast;

use consilium_shared::{CaseId, CommentId, MessageId, ThreadId};

pub const EVENT_CASE_LIKED: &str = "case-liked";
pub const EVENT_COMMENT_LIKED: &str = "comment-liked";
pub const EVENT_COMMENT_ADDED: &str = "comment-added";
pub const EVENT_THREAD_OPENED: &str = "thread-opened";
pub const EVENT_MESSAGE_APPENDED: &str = "message-appended";
pub const EVENT_CASE_DETAIL_CHANGED: &str = "case-detail-changed";

/// Published after every successful mutation so the presentation layer
/// knows which part of the merged view to re-read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EngineEvent {
    #[serde(rename_all = "camelCase")]
    CaseLiked { case_id: CaseId, likes: u32 },
    #[serde(rename_all = "camelCase")]
    CommentLiked { comment_id: CommentId, likes: u32 },
    #[serde(rename_all = "camelCase")]
    CommentAdded { case_id: CaseId, comment_id: CommentId },
    #[serde(rename_all = "camelCase")]
    ThreadOpened { thread_id: ThreadId, created: bool },
    #[serde(rename_all = "camelCase")]
    MessageAppended { thread_id: ThreadId, message_id: MessageId },
    #[serde(rename_all = "camelCase")]
    CaseDetailChanged { case_id: Option<CaseId> },
}

impl EngineEvent {
    /// Stable event name, e.g. for forwarding over an IPC bridge.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CaseLiked { .. } => EVENT_CASE_LIKED,
            Self::CommentLiked { .. } => EVENT_COMMENT_LIKED,
            Self::CommentAdded { .. } => EVENT_COMMENT_ADDED,
            Self::ThreadOpened { .. } => EVENT_THREAD_OPENED,
            Self::MessageAppended { .. } => EVENT_MESSAGE_APPENDED,
            Self::CaseDetailChanged { .. } => EVENT_CASE_DETAIL_CHANGED,
        }
    }
}

/// Publish an event.  Having no subscriber is normal and not an error.
pub fn emit_event(tx: &broadcast::Sender<EngineEvent>, event: EngineEvent) {
    let name = event.name();
    if tx.send(event).is_err() {
        tracing::trace!(event = name, "No subscribers for engine event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_with_tag() {
        let event = EngineEvent::CaseLiked {
            case_id: CaseId(1),
            likes: 25,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "caseLiked", "caseId": 1, "likes": 25 })
        );
        assert_eq!(event.name(), EVENT_CASE_LIKED);
    }

    #[test]
    fn test_emit_without_subscribers_is_silent() {
        let (tx, rx) = broadcast::channel(4);
        drop(rx);
        emit_event(&tx, EngineEvent::CaseDetailChanged { case_id: None });
    }

    #[tokio::test]
    async fn test_emit_reaches_subscriber() {
        let (tx, mut rx) = broadcast::channel(4);
        emit_event(
            &tx,
            EngineEvent::ThreadOpened {
                thread_id: ThreadId(3),
                created: true,
            },
        );
        let got = rx.recv().await.unwrap();
        assert_eq!(
            got,
            EngineEvent::ThreadOpened {
                thread_id: ThreadId(3),
                created: true
            }
        );
    }
}
