// Pure validation for a check-in. Never touches the store.

use crate::modules::attendance::core::attendee_name::AttendeeName;
use crate::modules::attendance::use_cases::check_in::command::CheckIn;
use crate::modules::attendance::use_cases::check_in::decision::DecideError;

pub fn decide_check_in(command: &CheckIn) -> Result<AttendeeName, DecideError> {
    command
        .name
        .as_deref()
        .and_then(AttendeeName::parse)
        .ok_or(DecideError::NameRequired)
}
