use std::sync::Arc;

use crate::shell::state::AppState;
use crate::tests::fixtures::stores::{make_offline_store, make_seeded_store};

pub fn make_test_state() -> AppState {
    AppState::new(Arc::new(make_seeded_store()))
}

pub fn make_offline_store_state() -> AppState {
    AppState::new(Arc::new(make_offline_store()))
}
