use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::modules::attendance::core::attendee_count::AttendeeCount;

/// Every attendee with their current count, in order of first check-in.
///
/// Serializes as a JSON object `{ "name": count, ... }`, writing the keys in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceSnapshot {
    entries: Vec<AttendeeCount>,
}

impl AttendanceSnapshot {
    pub fn new(entries: Vec<AttendeeCount>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[AttendeeCount] {
        &self.entries
    }

    pub fn count_of(&self, name: &str) -> u64 {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for AttendanceSnapshot {
    type Item = AttendeeCount;
    type IntoIter = std::vec::IntoIter<AttendeeCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for AttendanceSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.count)?;
        }
        map.end()
    }
}
