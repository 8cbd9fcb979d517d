//! # API Facade
//!
//! `TogoApi` is the single entry point for every togo operation, whatever the
//! UI. It owns the store and the resolved configuration, and passes both
//! explicitly into the command layer: there is no global state.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Resolves settings** (codec options, date stamping) from [`TogoConfig`]
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no business logic.
//!
//! `TogoApi<S: DataStore>` is generic over storage:
//! - Production: `TogoApi<FileStore>`
//! - Testing: `TogoApi<InMemoryStore>`

use crate::codec::CodecOptions;
use crate::commands;
use crate::config::TogoConfig;
use crate::error::Result;
use crate::model::{TaskList, TaskMap};
use crate::store::{self, DataStore};
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

/// The main API facade for togo operations.
pub struct TogoApi<S: DataStore> {
    store: S,
    config: TogoConfig,
    config_dir: PathBuf,
}

impl<S: DataStore> TogoApi<S> {
    pub fn new(store: S, config: TogoConfig, config_dir: PathBuf) -> Self {
        Self {
            store,
            config,
            config_dir,
        }
    }

    fn codec_options(&self) -> CodecOptions {
        self.config.codec_options()
    }

    /// Loads the todo list as a position map.
    pub fn load_tasks(&self) -> Result<TaskMap> {
        store::load(&self.store, TaskList::Todo, self.codec_options())
    }

    pub fn list_tasks<Q: AsRef<str>>(&self, queries: &[Q]) -> Result<CmdResult> {
        commands::list::run(&self.store, TaskList::Todo, queries, self.codec_options())
    }

    pub fn list_archived<Q: AsRef<str>>(&self, queries: &[Q]) -> Result<CmdResult> {
        commands::list::run(&self.store, TaskList::Done, queries, self.codec_options())
    }

    pub fn add_task(&mut self, text: &str) -> Result<CmdResult> {
        let today = Local::now().date_naive();
        self.add_task_on(text, today)
    }

    /// Like [`TogoApi::add_task`] with an explicit "today".
    pub fn add_task_on(&mut self, text: &str, today: NaiveDate) -> Result<CmdResult> {
        let stamp = self.config.prepend_date.then_some(today);
        let options = self.codec_options();
        commands::add::run(&mut self.store, text, stamp, options)
    }

    pub fn complete_task(&mut self, position: usize) -> Result<CmdResult> {
        let options = self.codec_options();
        commands::complete::run(&mut self.store, position, options)
    }

    pub fn delete_task(&mut self, position: usize) -> Result<CmdResult> {
        let options = self.codec_options();
        commands::delete::run(&mut self.store, position, options)
    }

    pub fn archive_tasks(&mut self) -> Result<CmdResult> {
        let options = self.codec_options();
        commands::archive::run(&mut self.store, options)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn init(&mut self) -> Result<CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api(lines: &[&str], config: TogoConfig) -> TogoApi<InMemoryStore> {
        let store = InMemoryStore::new().with_lines(TaskList::Todo, lines);
        TogoApi::new(store, config, PathBuf::from("unused"))
    }

    #[test]
    fn add_stamps_only_when_configured() {
        let day = NaiveDate::from_ymd_opt(2024, 2, 3).unwrap();

        let mut plain = api(&[], TogoConfig::default());
        let result = plain.add_task_on("no stamp", day).unwrap();
        assert_eq!(result.affected_tasks[0].task.creation_date, None);

        let config = TogoConfig {
            prepend_date: true,
            ..TogoConfig::default()
        };
        let mut stamping = api(&[], config);
        let result = stamping.add_task_on("stamped", day).unwrap();
        assert_eq!(result.affected_tasks[0].task.creation_date, Some(day));
    }

    #[test]
    fn priority_option_reaches_the_codec() {
        let config = TogoConfig {
            priority: true,
            ..TogoConfig::default()
        };
        let mut api = api(&["(A) urgent", "calm"], config);

        let map = api.load_tasks().unwrap();
        assert_eq!(map.get(1).unwrap().priority, Some('A'));
        assert_eq!(map.get(1).unwrap().subject, "urgent");

        api.complete_task(1).unwrap();
        let listed = api.list_tasks(&["urgent"]).unwrap();
        assert_eq!(listed.listed_tasks.len(), 1);
        assert!(listed.listed_tasks[0].task.done);
        assert_eq!(listed.listed_tasks[0].task.priority, Some('A'));
    }

    #[test]
    fn dispatches_lifecycle() {
        let mut api = api(&["a", "b"], TogoConfig::default());

        api.complete_task(1).unwrap();
        api.delete_task(2).unwrap();
        let archived = api.archive_tasks().unwrap();
        assert_eq!(archived.affected_tasks.len(), 1);

        assert!(api.load_tasks().unwrap().is_empty());
        let no_queries: [&str; 0] = [];
        let done = api.list_archived(&no_queries).unwrap();
        assert_eq!(done.listed_tasks[0].task.subject, "a");
    }
}
