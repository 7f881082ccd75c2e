//! The immutable base dataset loaded once at session start.

use std::collections::HashMap;

use tracing::{info, warn};

use consilium_shared::{CaseId, UserId};

use crate::models::{Case, ChatThread, ChatUser};

/// Seed records for cases, the user directory and pre-existing chats.
///
/// Nothing in this struct changes after [`BaseStore::new`] returns; local
/// mutations go to the overlay layers instead.
#[derive(Debug, Clone, Default)]
pub struct BaseStore {
    cases: Vec<Case>,
    case_index: HashMap<CaseId, usize>,
    users: Vec<ChatUser>,
    threads: Vec<ChatThread>,
}

impl BaseStore {
    /// Build a base store from loaded records.
    ///
    /// Records with a duplicate id are dropped (first one wins) so lookups
    /// stay unambiguous.
    pub fn new(cases: Vec<Case>, users: Vec<ChatUser>, threads: Vec<ChatThread>) -> Self {
        let mut kept_cases = Vec::with_capacity(cases.len());
        let mut case_index = HashMap::with_capacity(cases.len());
        for case in cases {
            if case_index.contains_key(&case.id) {
                warn!(case = %case.id, "Dropping case with duplicate id");
                continue;
            }
            case_index.insert(case.id, kept_cases.len());
            kept_cases.push(case);
        }

        let mut kept_users: Vec<ChatUser> = Vec::with_capacity(users.len());
        for user in users {
            if kept_users.iter().any(|u| u.id == user.id) {
                warn!(user = %user.id, "Dropping directory user with duplicate id");
                continue;
            }
            kept_users.push(user);
        }

        let mut kept_threads: Vec<ChatThread> = Vec::with_capacity(threads.len());
        for thread in threads {
            if kept_threads
                .iter()
                .any(|t| t.id == thread.id || t.counterpart == thread.counterpart)
            {
                warn!(thread = %thread.id, "Dropping duplicate seeded thread");
                continue;
            }
            kept_threads.push(thread);
        }

        info!(
            cases = kept_cases.len(),
            users = kept_users.len(),
            threads = kept_threads.len(),
            "Loaded base store"
        );

        Self {
            cases: kept_cases,
            case_index,
            users: kept_users,
            threads: kept_threads,
        }
    }

    /// All cases, in feed order.
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn case(&self, id: CaseId) -> Option<&Case> {
        self.case_index.get(&id).map(|&i| &self.cases[i])
    }

    /// The chat user directory.
    pub fn users(&self) -> &[ChatUser] {
        &self.users
    }

    pub fn user(&self, id: UserId) -> Option<&ChatUser> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Threads that existed before the session started, newest first.
    pub fn seeded_threads(&self) -> &[ChatThread] {
        &self.threads
    }

    /// Largest comment id used by any case, or 0 when there are none.
    pub fn max_comment_id(&self) -> u64 {
        self.cases
            .iter()
            .flat_map(|c| c.base_comments.iter())
            .map(|c| c.id.0)
            .max()
            .unwrap_or(0)
    }
}
