//! Which thread and which case detail the user is looking at.
//!
//! The two pointers are independent: either, both or neither may be set.
//! Both are plain ids; the records themselves stay in the stores.

use tracing::debug;

use consilium_shared::{CaseId, ThreadId, UserId};
use consilium_store::{BaseStore, ThreadRegistry};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSelector {
    active_thread: Option<ThreadId>,
    active_case_detail: Option<CaseId>,
}

/// Outcome of [`SessionSelector::open_thread_with_user`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenedThread {
    pub thread_id: ThreadId,
    /// `false` when an existing thread with the user was reused.
    pub created: bool,
}

impl SessionSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_thread(&self) -> Option<ThreadId> {
        self.active_thread
    }

    pub fn active_case_detail(&self) -> Option<CaseId> {
        self.active_case_detail
    }

    /// Activate the single thread with `user`, creating it if needed.
    ///
    /// Returns `None` (and changes nothing) when `user` is not in the
    /// directory.
    pub fn open_thread_with_user(
        &mut self,
        base: &BaseStore,
        threads: &mut ThreadRegistry,
        user: UserId,
    ) -> Option<OpenedThread> {
        if base.user(user).is_none() {
            debug!(user = %user, "Ignoring chat request for unknown user");
            return None;
        }

        let (thread_id, created) = threads.get_or_create(user);
        threads.mark_read(thread_id);
        self.active_thread = Some(thread_id);
        debug!(thread = %thread_id, user = %user, created, "Activated thread");

        Some(OpenedThread { thread_id, created })
    }

    /// Activate an existing thread.  Unknown ids are ignored.
    pub fn open_thread(&mut self, threads: &mut ThreadRegistry, thread_id: ThreadId) -> bool {
        if !threads.contains(thread_id) {
            debug!(thread = %thread_id, "Ignoring selection of unknown thread");
            return false;
        }
        threads.mark_read(thread_id);
        self.active_thread = Some(thread_id);
        true
    }

    /// Point the case detail view at `case_id`.  Unknown ids are ignored.
    pub fn open_case_detail(&mut self, base: &BaseStore, case_id: CaseId) -> bool {
        if base.case(case_id).is_none() {
            debug!(case = %case_id, "Ignoring detail request for unknown case");
            return false;
        }
        self.active_case_detail = Some(case_id);
        true
    }

    /// Close the case detail view.  Returns the id that was open, if any.
    pub fn close_case_detail(&mut self) -> Option<CaseId> {
        self.active_case_detail.take()
    }

    /// Drop both pointers.
    pub fn reset(&mut self) {
        self.active_thread = None;
        self.active_case_detail = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consilium_store::seed::demo_base_store;

    #[test]
    fn test_open_with_user_reuses_seeded_thread() {
        let base = demo_base_store();
        let mut threads = ThreadRegistry::new(base.seeded_threads());
        let mut session = SessionSelector::new();

        let opened = session
            .open_thread_with_user(&base, &mut threads, UserId(4))
            .unwrap();
        assert!(!opened.created);
        assert_eq!(opened.thread_id, ThreadId(2));
        assert_eq!(session.active_thread(), Some(ThreadId(2)));
        assert_eq!(threads.len(), 2);
    }

    #[test]
    fn test_open_with_user_twice_yields_one_thread() {
        let base = demo_base_store();
        let mut threads = ThreadRegistry::new(base.seeded_threads());
        let mut session = SessionSelector::new();

        let first = session
            .open_thread_with_user(&base, &mut threads, UserId(6))
            .unwrap();
        let second = session
            .open_thread_with_user(&base, &mut threads, UserId(6))
            .unwrap();

        assert!(first.created);
        assert!(!second.created);
        assert_eq!(first.thread_id, second.thread_id);
        assert_eq!(threads.len(), 3);
    }

    #[test]
    fn test_unknown_user_is_ignored() {
        let base = demo_base_store();
        let mut threads = ThreadRegistry::new(base.seeded_threads());
        let mut session = SessionSelector::new();

        assert!(session
            .open_thread_with_user(&base, &mut threads, UserId(99))
            .is_none());
        assert_eq!(session.active_thread(), None);
        assert_eq!(threads.len(), 2);
    }

    #[test]
    fn test_open_thread_marks_read_and_ignores_unknown() {
        let base = demo_base_store();
        let mut threads = ThreadRegistry::new(base.seeded_threads());
        let mut session = SessionSelector::new();

        assert!(!session.open_thread(&mut threads, ThreadId(77)));
        assert_eq!(session.active_thread(), None);

        assert!(session.open_thread(&mut threads, ThreadId(1)));
        assert_eq!(session.active_thread(), Some(ThreadId(1)));
        assert_eq!(threads.get(ThreadId(1)).unwrap().unread, 0);
    }

    #[test]
    fn test_case_detail_is_independent_of_thread() {
        let base = demo_base_store();
        let mut threads = ThreadRegistry::new(base.seeded_threads());
        let mut session = SessionSelector::new();

        session.open_thread(&mut threads, ThreadId(1));
        assert!(session.open_case_detail(&base, CaseId(2)));
        assert!(!session.open_case_detail(&base, CaseId(40)));
        assert_eq!(session.active_case_detail(), Some(CaseId(2)));
        assert_eq!(session.active_thread(), Some(ThreadId(1)));

        assert_eq!(session.close_case_detail(), Some(CaseId(2)));
        assert_eq!(session.close_case_detail(), None);
        assert_eq!(session.active_thread(), Some(ThreadId(1)));
    }
}
