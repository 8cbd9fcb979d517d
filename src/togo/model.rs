use chrono::NaiveDate;
use std::collections::HashMap;

/// Which file an operation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskList {
    /// The active list (`todo.txt`).
    Todo,
    /// The archive of completed tasks (`done.txt`).
    Done,
}

/// One logical to-do line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Task {
    pub done: bool,
    pub priority: Option<char>,
    pub completion_date: Option<NaiveDate>,
    pub creation_date: Option<NaiveDate>,
    // Still carries the +project and @context tokens verbatim
    pub subject: String,
}

impl Task {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            ..Self::default()
        }
    }

    /// Flips the completion marker and returns the new state.
    ///
    /// Dates are left alone: stamping a completion date is up to the caller.
    pub fn toggle_done(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }

    /// `+project` tokens in order of first appearance, sigil included.
    pub fn projects(&self) -> Vec<&str> {
        tagged_words(&self.subject, '+')
    }

    /// `@context` tokens in order of first appearance, sigil included.
    pub fn contexts(&self) -> Vec<&str> {
        tagged_words(&self.subject, '@')
    }

    pub fn matches(&self, query: &str) -> bool {
        self.subject.contains(query)
    }
}

/// A task together with the position it had when the command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTask {
    pub position: usize,
    pub task: Task,
}

impl DisplayTask {
    pub fn new(position: usize, task: Task) -> Self {
        Self { position, task }
    }
}

fn tagged_words(subject: &str, sigil: char) -> Vec<&str> {
    let mut words: Vec<&str> = Vec::new();
    for word in subject.split_whitespace() {
        let is_tag = word.starts_with(sigil) && word.len() > sigil.len_utf8();
        if is_tag && !words.contains(&word) {
            words.push(word);
        }
    }
    words
}

/// Tasks keyed by their 1-based line position at load time.
///
/// Positions are not identifiers: they are recomputed on every load. The
/// backing map has no order of its own, so every ordered walk goes through
/// [`TaskMap::positions`], which sorts the keys explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskMap {
    tasks: HashMap<usize, Task>,
}

impl TaskMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Numbers tasks contiguously from 1 in iteration order.
    pub fn from_tasks<I: IntoIterator<Item = Task>>(tasks: I) -> Self {
        let tasks = tasks
            .into_iter()
            .enumerate()
            .map(|(i, task)| (i + 1, task))
            .collect();
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Task> {
        self.tasks.get(&position)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut Task> {
        self.tasks.get_mut(&position)
    }

    pub fn insert(&mut self, position: usize, task: Task) -> Option<Task> {
        self.tasks.insert(position, task)
    }

    /// Appends after the highest position and returns the new position.
    pub fn push(&mut self, task: Task) -> usize {
        let position = self.tasks.keys().max().map_or(1, |last| last + 1);
        self.tasks.insert(position, task);
        position
    }

    pub fn remove(&mut self, position: usize) -> Option<Task> {
        self.tasks.remove(&position)
    }

    /// All positions, ascending.
    pub fn positions(&self) -> Vec<usize> {
        let mut keys: Vec<usize> = self.tasks.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Walks the tasks in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Task)> + '_ {
        self.positions()
            .into_iter()
            .filter_map(move |pos| self.tasks.get(&pos).map(|task| (pos, task)))
    }

    /// Consumes the map into `(position, task)` pairs in ascending order.
    pub fn into_sorted(mut self) -> Vec<(usize, Task)> {
        self.positions()
            .into_iter()
            .filter_map(|pos| self.tasks.remove(&pos).map(|task| (pos, task)))
            .collect()
    }
}
