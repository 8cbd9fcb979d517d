use super::DataStore;
use crate::error::{Result, TogoError};
use crate::model::TaskList;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// In-memory storage for tests. A list that was never written behaves like a
/// missing file.
#[derive(Default)]
pub struct InMemoryStore {
    lists: HashMap<TaskList, Vec<String>>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lines(mut self, list: TaskList, lines: &[&str]) -> Self {
        self.lists
            .insert(list, lines.iter().map(|l| l.to_string()).collect());
        self
    }

    /// Current content of a list, `None` when it does not exist.
    pub fn lines(&self, list: TaskList) -> Option<&[String]> {
        self.lists.get(&list).map(Vec::as_slice)
    }

    /// Make every write fail, for error path tests.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error {
            return Err(TogoError::Io(io::Error::other("Simulated write error")));
        }
        Ok(())
    }
}

impl DataStore for InMemoryStore {
    fn read_lines(&self, list: TaskList) -> Result<Vec<String>> {
        self.lists.get(&list).cloned().ok_or_else(|| {
            TogoError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", self.list_path(list).display()),
            ))
        })
    }

    fn write_lines(&mut self, list: TaskList, lines: &[String]) -> Result<()> {
        self.check_writable()?;
        self.lists.insert(list, lines.to_vec());
        Ok(())
    }

    fn append_lines(&mut self, list: TaskList, lines: &[String]) -> Result<()> {
        self.check_writable()?;
        self.lists
            .entry(list)
            .or_default()
            .extend_from_slice(lines);
        Ok(())
    }

    fn create_list(&mut self, list: TaskList) -> Result<bool> {
        if self.lists.contains_key(&list) {
            return Ok(false);
        }
        self.check_writable()?;
        self.lists.insert(list, Vec::new());
        Ok(true)
    }

    fn list_path(&self, list: TaskList) -> PathBuf {
        match list {
            TaskList::Todo => PathBuf::from("memory://todo.txt"),
            TaskList::Done => PathBuf::from("memory://done.txt"),
        }
    }
}
