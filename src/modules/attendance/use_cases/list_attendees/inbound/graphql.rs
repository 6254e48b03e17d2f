use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::attendance::core::attendee_count::AttendeeCount;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(name = "Attendee")]
pub struct GqlAttendee {
    pub name: String,
    pub count: u64,
}

impl From<AttendeeCount> for GqlAttendee {
    fn from(v: AttendeeCount) -> Self {
        Self {
            name: v.name,
            count: v.count,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every attendee in order of first check-in.
    async fn attendees(&self, context: &Context<'_>) -> GqlResult<Vec<GqlAttendee>> {
        let state = context.data_unchecked::<AppState>();
        let snapshot = state
            .list_attendees_handler
            .handle()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(snapshot.into_iter().map(Into::into).collect())
    }
}
