//! JSON-file backed todo list.
//!
//! The crate owns the data model and the single piece of state in the system:
//!
//! - **[`todo`]**: The [`todo::Todo`] record as it appears on disk and over the API.
//! - **[`store`]**: [`store::TodoStore`], the in-memory sequence loaded once from a
//!   JSON file and rewritten in full after every mutation.
//!
//! The store is an owned value. Callers that share it across requests wrap it
//! themselves (the server keeps it behind an async mutex).

pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod todo;
