use thiserror::Error;

use crate::modules::attendance::use_cases::check_in::decision::DecideError;
use crate::shared::infrastructure::attendance_store::AttendanceStoreError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DecideError),

    #[error(transparent)]
    Store(#[from] AttendanceStoreError),
}
