use std::sync::Arc;

use crate::modules::attendance::core::attendee_count::AttendeeCount;
use crate::modules::attendance::use_cases::check_in::command::CheckIn;
use crate::modules::attendance::use_cases::check_in::decide::decide_check_in;
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::attendance_store::AttendanceStore;

pub struct CheckInHandler<TStore>
where
    TStore: AttendanceStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CheckInHandler<TStore>
where
    TStore: AttendanceStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: CheckIn) -> Result<AttendeeCount, ApplicationError> {
        let name = decide_check_in(&command)?;
        let count = self.store.increment(&name).await?;
        tracing::info!(name = %name, count, "attendee checked in");
        Ok(AttendeeCount::new(name.into_inner(), count))
    }
}
