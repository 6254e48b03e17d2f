use rstest::fixture;

use crate::shared::infrastructure::attendance_store::in_memory::InMemoryAttendanceStore;
use crate::shell::config::SEED_ATTENDEES;

pub fn make_seeded_store() -> InMemoryAttendanceStore {
    InMemoryAttendanceStore::seeded(SEED_ATTENDEES.iter().copied())
}

pub fn make_offline_store() -> InMemoryAttendanceStore {
    let mut store = make_seeded_store();
    store.toggle_offline();
    store
}

#[fixture]
pub fn seeded_store() -> InMemoryAttendanceStore {
    make_seeded_store()
}
