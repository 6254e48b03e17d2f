// Composition root.
//
// - Fixed server configuration and the seed attendees.
// - Wires the store into the use case handlers.
// - Builds the HTTP router, GraphQL schema and static asset service.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
