use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::attendance::core::attendee_count::AttendeeCount;
use crate::modules::attendance::core::attendee_name::AttendeeName;
use crate::modules::attendance::core::snapshot::AttendanceSnapshot;
use crate::shared::infrastructure::attendance_store::{AttendanceStore, AttendanceStoreError};

#[derive(Default)]
struct Counts {
    entries: Vec<AttendeeCount>,
    positions: HashMap<String, usize>,
}

impl Counts {
    fn bump(&mut self, name: &str, by: u64) -> u64 {
        match self.positions.get(name) {
            Some(&position) => {
                let entry = &mut self.entries[position];
                entry.count += by;
                entry.count
            }
            None => {
                self.positions.insert(name.to_string(), self.entries.len());
                self.entries.push(AttendeeCount::new(name, by));
                by
            }
        }
    }
}

/// Process-local counts. Everything is lost when the process exits.
#[derive(Default)]
pub struct InMemoryAttendanceStore {
    counts: RwLock<Counts>,
    offline: bool,
}

impl InMemoryAttendanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the given counts. Entries with a zero count are skipped and
    /// repeated names are summed.
    pub fn seeded<I, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, u64)>,
        N: AsRef<str>,
    {
        let mut counts = Counts::default();
        for (name, count) in entries {
            if count > 0 {
                counts.bump(name.as_ref(), count);
            }
        }
        Self {
            counts: RwLock::new(counts),
            offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn ensure_online(&self) -> Result<(), AttendanceStoreError> {
        if self.offline {
            return Err(AttendanceStoreError::Backend(
                "Attendance store offline".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl AttendanceStore for InMemoryAttendanceStore {
    async fn get_all(&self) -> Result<AttendanceSnapshot, AttendanceStoreError> {
        self.ensure_online()?;
        let guard = self.counts.read().await;
        Ok(AttendanceSnapshot::new(guard.entries.clone()))
    }

    async fn increment(&self, name: &AttendeeName) -> Result<u64, AttendanceStoreError> {
        self.ensure_online()?;
        let mut guard = self.counts.write().await;
        Ok(guard.bump(name.as_str(), 1))
    }
}
