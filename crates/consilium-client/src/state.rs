//! The engine state shared by every command.
//!
//! [`Engine`] is an explicitly owned value: create one per session and pass
//! it by reference.  Hosts with more than one caller wrap it in
//! [`SharedEngine`] so every mutation runs under the mutex.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;

use consilium_shared::constants::EVENT_CHANNEL_CAPACITY;
use consilium_shared::{CaseId, ThreadId};
use consilium_store::{
    merge, BaseStore, Case, ChatThread, ChatUser, Comment, Message, OverlayStore, ThreadRegistry,
};

use crate::config::ClientConfig;
use crate::events::EngineEvent;
use crate::session::SessionSelector;

/// Engine state guarded for concurrent callers.
pub type SharedEngine = Arc<Mutex<Engine>>;

/// Central engine state.
///
/// Holds the immutable base records, the local overlay, the chat threads,
/// the session pointers, and the change-event channel.
pub struct Engine {
    pub(crate) config: ClientConfig,
    pub(crate) base: BaseStore,
    pub(crate) overlay: OverlayStore,
    pub(crate) threads: ThreadRegistry,
    pub(crate) session: SessionSelector,
    /// Attachment bytes by their `blob:` url.
    pub(crate) blobs: HashMap<String, Arc<[u8]>>,
    pub(crate) events: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Start a session over `base`.
    pub fn new(base: BaseStore, config: ClientConfig) -> Self {
        let overlay = OverlayStore::new(base.max_comment_id());
        let threads = ThreadRegistry::new(base.seeded_threads());
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        tracing::info!(
            user = %config.current_user_id,
            cases = base.cases().len(),
            threads = threads.len(),
            "Engine session started"
        );

        Self {
            config,
            base,
            overlay,
            threads,
            session: SessionSelector::new(),
            blobs: HashMap::new(),
            events,
        }
    }

    pub fn into_shared(self) -> SharedEngine {
        Arc::new(Mutex::new(self))
    }

    /// Receive an [`EngineEvent`] after every successful mutation.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.events.subscribe()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Base records
    // ------------------------------------------------------------------

    pub fn cases(&self) -> &[Case] {
        self.base.cases()
    }

    pub fn case(&self, id: CaseId) -> Option<&Case> {
        self.base.case(id)
    }

    /// The chat directory.
    pub fn users(&self) -> &[ChatUser] {
        self.base.users()
    }

    // ------------------------------------------------------------------
    // Merged reads
    // ------------------------------------------------------------------

    pub fn effective_like_count(&self, case: &Case) -> u32 {
        merge::effective_like_count(&self.overlay, case)
    }

    pub fn effective_comment_list<'a>(&'a self, case: &'a Case) -> &'a [Comment] {
        merge::effective_comment_list(&self.overlay, case)
    }

    pub fn effective_comment_count(&self, case: &Case) -> usize {
        merge::effective_comment_count(&self.overlay, case)
    }

    pub fn effective_comment_like_count(&self, comment: &Comment) -> u32 {
        merge::effective_comment_like_count(&self.overlay, comment)
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    pub fn active_thread(&self) -> Option<ThreadId> {
        self.session.active_thread()
    }

    pub fn active_case_detail(&self) -> Option<CaseId> {
        self.session.active_case_detail()
    }

    /// All threads, newest first.
    pub fn threads(&self) -> &[ChatThread] {
        self.threads.threads()
    }

    pub fn thread(&self, id: ThreadId) -> Option<&ChatThread> {
        self.threads.get(id)
    }

    /// Messages of the active thread, oldest first; empty when no thread is
    /// active.
    pub fn active_messages(&self) -> &[Message] {
        self.active_thread()
            .and_then(|id| self.threads.get(id))
            .map(|t| t.messages.as_slice())
            .unwrap_or(&[])
    }

    /// Bytes behind an attachment url, if it was sent in this session.
    pub fn attachment_bytes(&self, url: &str) -> Option<&[u8]> {
        self.blobs.get(url).map(|b| &b[..])
    }

    /// Drop all local state: overlay deltas, created threads, sent messages,
    /// attachment bytes and the session pointers.  For session teardown.
    pub fn clear(&mut self) {
        self.overlay.clear();
        self.threads = ThreadRegistry::new(self.base.seeded_threads());
        self.session.reset();
        self.blobs.clear();
        tracing::info!("Engine state cleared");
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(BaseStore::default(), ClientConfig::default())
    }
}
