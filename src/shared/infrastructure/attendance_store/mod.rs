// Port for the attendance counts.
//
// Handlers only see this trait. The in memory adapter backs the running
// service and the tests; a persistent adapter can be swapped in behind it.

pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::attendance::core::attendee_name::AttendeeName;
use crate::modules::attendance::core::snapshot::AttendanceSnapshot;

#[derive(Debug, Error)]
pub enum AttendanceStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait AttendanceStore: Send + Sync {
    async fn get_all(&self) -> Result<AttendanceSnapshot, AttendanceStoreError>;

    /// Adds one check-in for `name` and returns its new count.
    async fn increment(&self, name: &AttendeeName) -> Result<u64, AttendanceStoreError>;
}
