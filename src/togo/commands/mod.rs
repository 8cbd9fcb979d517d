//! # Command Layer
//!
//! One module per operation, each exposing a `run` function that takes a
//! [`DataStore`](crate::store::DataStore) and plain arguments and returns a
//! [`CmdResult`]. Commands never print; the messages they return are rendered
//! by whichever client called them.
//!
//! Every mutating command follows the same shape: load the whole list, change
//! the position map once, write the whole list back.

use crate::config::TogoConfig;
use crate::model::DisplayTask;
use std::path::PathBuf;

pub mod add;
pub mod archive;
pub mod complete;
pub mod config;
pub mod delete;
pub mod init;
pub mod list;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Tasks the command changed, with the position they had.
    pub affected_tasks: Vec<DisplayTask>,
    /// Tasks selected for display by a listing.
    pub listed_tasks: Vec<DisplayTask>,
    /// Size of the whole list a listing was taken from.
    pub total_tasks: usize,
    /// The file the command read or wrote.
    pub source: Option<PathBuf>,
    pub config: Option<TogoConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_tasks(mut self, tasks: Vec<DisplayTask>) -> Self {
        self.affected_tasks = tasks;
        self
    }

    pub fn with_listed_tasks(mut self, tasks: Vec<DisplayTask>, total: usize) -> Self {
        self.listed_tasks = tasks;
        self.total_tasks = total;
        self
    }

    pub fn with_source(mut self, source: PathBuf) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_config(mut self, config: TogoConfig) -> Self {
        self.config = Some(config);
        self
    }
}
