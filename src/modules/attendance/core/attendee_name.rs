use std::fmt;

/// A trimmed, non-empty attendee name. Names are compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttendeeName(String);

impl AttendeeName {
    /// Trims surrounding whitespace. Returns `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AttendeeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
