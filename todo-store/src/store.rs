//! Todo list storage: load once from a JSON file, rewrite it after every mutation.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::debug;

use crate::todo::Todo;

/// Failures of a store operation, surfaced to API callers as request errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Todo with id {id} not found")]
    NotFound { id: String },
    #[error("no todo ids left to assign")]
    IdsExhausted,
    #[error("persist todos to {}: {}", .path.display(), .source)]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// In-memory todo sequence mirrored to a JSON file.
///
/// The sequence is the source of truth while the process runs. Each mutation is
/// applied to a copy, the copy is written to disk in full, and only then does it
/// replace the in-memory sequence.
#[derive(Debug)]
pub struct TodoStore {
    path: PathBuf,
    todos: Vec<Todo>,
    /// Next id handed out by `add`. Never decreases; `None` once past `u64::MAX`.
    next_id: Option<u64>,
}

impl TodoStore {
    /// Load the store from `path`. Fails if the file is missing or is not a JSON
    /// array of todos.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let todos = load_todos(&path)?;
        let next_id = initial_next_id(&todos);
        debug!(path = %path.display(), count = todos.len(), next_id = ?next_id, "todo store loaded");
        Ok(Self {
            path,
            todos,
            next_id,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All todos in insertion order.
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// First todo whose id matches.
    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Append a new, not-completed todo and persist.
    pub fn add(&mut self, text: impl Into<String>) -> Result<Todo, StoreError> {
        let id = self.next_id.ok_or(StoreError::IdsExhausted)?;
        let todo = Todo::new(id.to_string(), text);
        let mut staged = self.todos.clone();
        staged.push(todo.clone());
        self.commit(staged)?;
        self.next_id = id.checked_add(1);
        debug!(id = %todo.id, "todo added");
        Ok(todo)
    }

    /// Replace the text of the first todo with `id` and persist.
    pub fn edit(&mut self, id: &str, text: impl Into<String>) -> Result<Todo, StoreError> {
        let index = self.position(id)?;
        let mut staged = self.todos.clone();
        staged[index].text = text.into();
        let updated = staged[index].clone();
        self.commit(staged)?;
        debug!(id, "todo edited");
        Ok(updated)
    }

    /// Remove the first todo with `id`, persist, and return it as it was.
    pub fn delete(&mut self, id: &str) -> Result<Todo, StoreError> {
        let index = self.position(id)?;
        let mut staged = self.todos.clone();
        let removed = staged.remove(index);
        self.commit(staged)?;
        debug!(id, "todo deleted");
        Ok(removed)
    }

    fn position(&self, id: &str) -> Result<usize, StoreError> {
        self.todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    fn commit(&mut self, staged: Vec<Todo>) -> Result<(), StoreError> {
        write_todos(&self.path, &staged).map_err(|source| StoreError::Persist {
            path: self.path.clone(),
            source,
        })?;
        self.todos = staged;
        Ok(())
    }
}

/// Read and parse a JSON array of todos.
pub fn load_todos(path: &Path) -> Result<Vec<Todo>> {
    debug!(path = %path.display(), "loading todos");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read todos {}", path.display()))?;
    let todos: Vec<Todo> = serde_json::from_str(&contents)
        .with_context(|| format!("parse todos {}", path.display()))?;
    Ok(todos)
}

/// Overwrite `path` with the full sequence as pretty JSON plus trailing newline.
///
/// The file handle is scoped to this call and dropped on every return path.
pub fn write_todos(path: &Path, todos: &[Todo]) -> io::Result<()> {
    debug!(path = %path.display(), count = todos.len(), "writing todos");
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, todos)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// One past the larger of the record count and the highest numeric id, so an
/// id freed by a delete is never handed out again. `None` when that would
/// overflow.
fn initial_next_id(todos: &[Todo]) -> Option<u64> {
    let highest = todos.iter().filter_map(Todo::numeric_id).max().unwrap_or(0);
    highest.max(todos.len() as u64).checked_add(1)
}
