//! # Storage Layer
//!
//! The [`DataStore`] trait is the raw line I/O for the two task files. It
//! knows nothing about tasks: [`load`], [`save`] and [`append`] put the codec
//! on top of it and are what the command layer calls.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage on two plain files
//!   (`todo.txt` and `done.txt`).
//! - [`memory::InMemoryStore`]: no persistence, used by the command tests.
//!
//! ## Whole-file semantics
//!
//! Every mutation loads the full list, changes it in memory and writes the
//! full list back. Only the archive is ever appended to.
//!
//! ## Limitations
//!
//! There is no locking of any kind. Two processes racing on the same file
//! lose updates (last writer wins). Interleaved appends to the archive are
//! not guarded either.

use crate::codec::{self, CodecOptions};
use crate::error::Result;
use crate::model::{Task, TaskList, TaskMap};
use std::path::PathBuf;
use tracing::debug;

pub mod fs;
pub mod memory;

/// Raw line storage for the todo and done lists.
pub trait DataStore {
    /// Read every line of a list. A missing list is an error, never empty.
    fn read_lines(&self, list: TaskList) -> Result<Vec<String>>;

    /// Replace the whole content of a list.
    fn write_lines(&mut self, list: TaskList, lines: &[String]) -> Result<()>;

    /// Append after the existing content, creating the list if absent.
    fn append_lines(&mut self, list: TaskList, lines: &[String]) -> Result<()>;

    /// Create an empty list unless one exists. Returns whether it was created.
    fn create_list(&mut self, list: TaskList) -> Result<bool>;

    /// Where the list lives, for display.
    fn list_path(&self, list: TaskList) -> PathBuf;
}

/// Loads a list into a position map, numbering lines from 1.
pub fn load<S: DataStore>(store: &S, list: TaskList, options: CodecOptions) -> Result<TaskMap> {
    let lines = store.read_lines(list)?;
    let map = TaskMap::from_tasks(
        lines
            .iter()
            .map(|line| codec::decode_with(line, options)),
    );
    debug!(?list, tasks = map.len(), "loaded task list");
    Ok(map)
}

/// Rewrites a list from a position map, in ascending position order.
pub fn save<S: DataStore>(
    store: &mut S,
    list: TaskList,
    map: &TaskMap,
    options: CodecOptions,
) -> Result<()> {
    let lines: Vec<String> = map
        .iter()
        .map(|(_, task)| codec::encode_with(task, options))
        .collect();
    store.write_lines(list, &lines)?;
    debug!(?list, tasks = lines.len(), "saved task list");
    Ok(())
}

/// Appends tasks to a list in the given order.
pub fn append<S: DataStore>(
    store: &mut S,
    list: TaskList,
    tasks: &[Task],
    options: CodecOptions,
) -> Result<()> {
    let lines: Vec<String> = tasks
        .iter()
        .map(|task| codec::encode_with(task, options))
        .collect();
    store.append_lines(list, &lines)?;
    debug!(?list, tasks = lines.len(), "appended to task list");
    Ok(())
}
