//! Test-only helpers for building todo files and stores.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::store::{TodoStore, load_todos, write_todos};
use crate::todo::Todo;

/// Create a not-completed todo.
pub fn todo(id: &str, text: &str) -> Todo {
    Todo::new(id, text)
}

/// Write `todos` to `path` in the store's on-disk format.
pub fn write_todos_file(path: &Path, todos: &[Todo]) -> Result<()> {
    write_todos(path, todos).with_context(|| format!("write {}", path.display()))
}

/// A data file inside a temp dir that is removed on drop.
pub struct TestStore {
    _dir: TempDir,
    path: PathBuf,
}

impl TestStore {
    /// Temp data file containing an empty array.
    pub fn new() -> Result<Self> {
        Self::with_todos(&[])
    }

    /// Temp data file seeded with `todos`.
    pub fn with_todos(todos: &[Todo]) -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        let path = dir.path().join("todos.json");
        write_todos_file(&path, todos)?;
        Ok(Self { _dir: dir, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<TodoStore> {
        TodoStore::load(&self.path)
    }

    /// Parse the data file as it currently is on disk.
    pub fn read_file(&self) -> Result<Vec<Todo>> {
        load_todos(&self.path)
    }
}
