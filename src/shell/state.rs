use std::sync::Arc;

use crate::modules::attendance::use_cases::check_in::handler::CheckInHandler;
use crate::modules::attendance::use_cases::list_attendees::handler::ListAttendeesHandler;
use crate::shared::infrastructure::attendance_store::AttendanceStore;

#[derive(Clone)]
pub struct AppState {
    pub check_in_handler: Arc<CheckInHandler<dyn AttendanceStore>>,
    pub list_attendees_handler: Arc<ListAttendeesHandler<dyn AttendanceStore>>,
}

impl AppState {
    /// Wires both use cases to the same store.
    pub fn new(store: Arc<dyn AttendanceStore>) -> Self {
        Self {
            check_in_handler: Arc::new(CheckInHandler::new(store.clone())),
            list_attendees_handler: Arc::new(ListAttendeesHandler::new(store)),
        }
    }
}
