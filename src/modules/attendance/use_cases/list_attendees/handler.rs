use std::sync::Arc;

use crate::modules::attendance::core::snapshot::AttendanceSnapshot;
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::attendance_store::AttendanceStore;

pub struct ListAttendeesHandler<TStore>
where
    TStore: AttendanceStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListAttendeesHandler<TStore>
where
    TStore: AttendanceStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<AttendanceSnapshot, ApplicationError> {
        Ok(self.store.get_all().await?)
    }
}
