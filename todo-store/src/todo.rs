use serde::{Deserialize, Serialize};

/// A single task record.
///
/// `completed` is always `false` when created and no store operation changes it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
        }
    }

    /// Numeric value of the id, if it is one. Used to seed id assignment.
    pub fn numeric_id(&self) -> Option<u64> {
        self.id.parse().ok()
    }
}
