use crate::codec::{self, CodecOptions};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TogoError};
use crate::model::{DisplayTask, TaskList};
use crate::store::{self, DataStore};
use chrono::NaiveDate;
use tracing::info;

/// Decodes `text` and appends it as the last task of the todo list.
///
/// `stamp` becomes the creation date when the text does not carry one.
pub fn run<S: DataStore>(
    store: &mut S,
    text: &str,
    stamp: Option<NaiveDate>,
    options: CodecOptions,
) -> Result<CmdResult> {
    if text.trim().is_empty() {
        return Err(TogoError::Api("Todo text cannot be empty".into()));
    }
    if text.contains(&['\n', '\r'][..]) {
        return Err(TogoError::Api("Todo text must be a single line".into()));
    }

    let mut map = store::load(store, TaskList::Todo, options)?;

    let mut task = codec::decode_with(text, options);
    if task.creation_date.is_none() {
        task.creation_date = stamp;
    }
    let position = map.push(task.clone());

    store::save(store, TaskList::Todo, &map, options)?;
    info!(position, "added task");

    let path = store.list_path(TaskList::Todo);
    let mut result = CmdResult::default()
        .with_affected_tasks(vec![DisplayTask::new(position, task)])
        .with_source(path.clone());
    result.add_message(CmdMessage::success(format!(
        "Added ({}):",
        path.display()
    )));
    Ok(result)
}
