//! The demo dataset the app boots with: three feed cases, the six-doctor
//! directory and two existing conversations.
//!
//! Feed comment counts are the length of each case's comment list, so the
//! cases carry a few real comments (2, 1 and 2) rather than the larger
//! display-only counters of the mockup feed.

use chrono::{DateTime, Duration, Utc};

use consilium_shared::constants::DEFAULT_CURRENT_USER_ID;
use consilium_shared::{CaseId, CommentId, MessageId, ThreadId, UserId};

use crate::base::BaseStore;
use crate::models::{Author, Case, ChatThread, ChatUser, Comment, Message, MessageKind};

/// Build the demo base store with timestamps relative to now.
pub fn demo_base_store() -> BaseStore {
    demo_base_store_at(Utc::now())
}

/// Build the demo base store with timestamps relative to `now`.
pub fn demo_base_store_at(now: DateTime<Utc>) -> BaseStore {
    BaseStore::new(demo_cases(now), demo_users(), demo_threads(now))
}

fn user(id: u64, name: &str, specialty: &str) -> ChatUser {
    ChatUser {
        id: UserId(id),
        name: name.into(),
        specialty: specialty.into(),
    }
}

fn demo_users() -> Vec<ChatUser> {
    vec![
        user(1, "Dr. Ivanova A.S.", "Rheumatologist"),
        user(2, "Dr. Smirnov P.V.", "Pulmonologist"),
        user(3, "Dr. Petrova E.M.", "Clinical pharmacologist"),
        user(4, "Dr. Kozlov I.P.", "Cardiologist"),
        user(5, "Dr. Novikova S.A.", "Oncologist"),
        user(6, "Dr. Morozov D.V.", "Surgeon"),
    ]
}

fn comment(id: u64, author: Author, content: &str, at: DateTime<Utc>, likes: u32) -> Comment {
    Comment {
        id: CommentId(id),
        author,
        content: content.into(),
        created_at: at,
        base_like_count: likes,
    }
}

fn demo_cases(now: DateTime<Utc>) -> Vec<Case> {
    let kozlov = Author::new("Dr. Kozlov I.P.", "Cardiologist");
    let novikova = Author::new("Dr. Novikova S.A.", "Oncologist");
    let morozov = Author::new("Dr. Morozov D.V.", "Surgeon");

    vec![
        Case {
            id: CaseId(1),
            title: "Difficult diagnosis of an autoimmune disease".into(),
            specialty: "Rheumatology".into(),
            author: Author::new("Dr. Ivanova A.S.", "Rheumatologist"),
            description: "Female patient, 42, complaining of joint pain and morning \
                          stiffness for more than 2 months. ANA positive, RF negative..."
                .into(),
            tags: vec!["Autoimmune".into(), "Diagnostics".into(), "Rheumatology".into()],
            base_like_count: 24,
            base_comments: vec![
                comment(
                    1,
                    kozlov.clone(),
                    "Was anti-CCP checked? Would help rule out early RA.",
                    now - Duration::minutes(90),
                    3,
                ),
                comment(
                    2,
                    novikova.clone(),
                    "Consider a paraneoplastic process given the age.",
                    now - Duration::minutes(45),
                    1,
                ),
            ],
            created_at: now - Duration::hours(2),
        },
        Case {
            id: CaseId(2),
            title: "Atypical clinical picture in pneumonia".into(),
            specialty: "Pulmonology".into(),
            author: Author::new("Dr. Smirnov P.V.", "Pulmonologist"),
            description: "Male, 65, admitted with dyspnea. Radiography showed bilateral \
                          involvement but without the typical signs..."
                .into(),
            tags: vec!["Pulmonology".into(), "Infections".into(), "CT".into()],
            base_like_count: 19,
            base_comments: vec![comment(
                3,
                morozov,
                "CT with contrast would clarify the picture.",
                now - Duration::hours(3),
                2,
            )],
            created_at: now - Duration::hours(5),
        },
        Case {
            id: CaseId(3),
            title: "Rare case of a drug interaction".into(),
            specialty: "Clinical pharmacology".into(),
            author: Author::new("Dr. Petrova E.M.", "Clinical pharmacologist"),
            description: "The patient was on a combination of drugs that led to an unusual \
                          adverse reaction. Our experience adjusting the therapy..."
                .into(),
            tags: vec!["Pharmacology".into(), "Side effects".into(), "Safety".into()],
            base_like_count: 31,
            base_comments: vec![
                comment(
                    4,
                    kozlov,
                    "Which statin was involved?",
                    now - Duration::hours(20),
                    0,
                ),
                comment(
                    5,
                    novikova,
                    "We saw something similar with macrolides.",
                    now - Duration::hours(18),
                    4,
                ),
            ],
            created_at: now - Duration::days(1),
        },
    ]
}

fn text(id: u64, sender: u64, body: &str, at: DateTime<Utc>) -> Message {
    Message {
        id: MessageId(id),
        sender_id: UserId(sender),
        kind: MessageKind::Text,
        body: body.into(),
        attachment: None,
        created_at: at,
    }
}

fn demo_threads(now: DateTime<Utc>) -> Vec<ChatThread> {
    let me = DEFAULT_CURRENT_USER_ID;
    vec![
        ChatThread {
            id: ThreadId(1),
            counterpart: UserId(1),
            messages: vec![
                text(1, 1, "Hello, colleague! I need a consultation on a patient.", now - Duration::minutes(60)),
                text(2, me, "Hello! Of course, happy to help. Describe the case.", now - Duration::minutes(50)),
                text(3, 1, "Sending the chest X-rays.", now - Duration::minutes(40)),
                text(4, 1, "Thank you for the consultation on the patient.", now - Duration::minutes(10)),
            ],
            unread: 2,
        },
        ChatThread {
            id: ThreadId(2),
            counterpart: UserId(4),
            messages: vec![text(1, 4, "Sent the ECG results.", now - Duration::hours(4))],
            unread: 0,
        },
    ]
}
