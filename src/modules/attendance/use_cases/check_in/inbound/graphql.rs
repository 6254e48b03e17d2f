use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::attendance::use_cases::check_in::command::CheckIn;
use crate::modules::attendance::use_cases::list_attendees::inbound::graphql::GqlAttendee;
use crate::shell::state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn check_in(&self, context: &Context<'_>, name: String) -> GqlResult<GqlAttendee> {
        let state = context.data_unchecked::<AppState>();
        let checked_in = state
            .check_in_handler
            .handle(CheckIn::new(name))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(checked_in.into())
    }
}
