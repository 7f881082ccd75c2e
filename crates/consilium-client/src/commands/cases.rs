use tracing::debug;

use consilium_shared::CaseId;

use crate::events::{emit_event, EngineEvent};
use crate::state::Engine;

impl Engine {
    /// Open the detail view of a case.  Unknown ids are a no-op; returns
    /// whether the pointer moved to `case_id`.
    pub fn open_case_detail(&mut self, case_id: CaseId) -> bool {
        if !self.session.open_case_detail(&self.base, case_id) {
            return false;
        }
        debug!(case = %case_id, "Opened case detail");
        emit_event(
            &self.events,
            EngineEvent::CaseDetailChanged {
                case_id: Some(case_id),
            },
        );
        true
    }

    pub fn close_case_detail(&mut self) {
        if let Some(case_id) = self.session.close_case_detail() {
            debug!(case = %case_id, "Closed case detail");
            emit_event(&self.events, EngineEvent::CaseDetailChanged { case_id: None });
        }
    }
}
