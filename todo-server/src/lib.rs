//! Todo server - GraphQL API over a todo list stored in a single JSON file.
//!
//! The binary (`src/main.rs`) does the wiring. The library exposes what the
//! integration tests in `tests/` need to check the process from outside.

pub mod exit_codes;
