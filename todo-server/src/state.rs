//! Shared application state for request handlers.

use crate::schema::TodoSchema;

/// State cloned into every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Executable schema; owns the todo store as context data.
    pub schema: TodoSchema,
}

impl AppState {
    pub fn new(schema: TodoSchema) -> Self {
        Self { schema }
    }
}
