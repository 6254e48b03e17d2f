// Command data type for checking an attendee in.
//
// Carries the name exactly as received. `None` means the request had no
// string name at all; trimming and validation happen in `decide`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckIn {
    pub name: Option<String>,
}

impl CheckIn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    pub fn without_name() -> Self {
        Self { name: None }
    }
}
