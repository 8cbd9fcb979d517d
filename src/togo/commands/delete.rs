use crate::codec::CodecOptions;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{DisplayTask, TaskList};
use crate::store::{self, DataStore};
use tracing::{info, warn};

/// Removes the task at `position`.
///
/// A position that does not exist is not an error: nothing is written and
/// the result carries no affected task.
pub fn run<S: DataStore>(
    store: &mut S,
    position: usize,
    options: CodecOptions,
) -> Result<CmdResult> {
    let mut map = store::load(store, TaskList::Todo, options)?;
    let path = store.list_path(TaskList::Todo);

    let Some(task) = map.remove(position) else {
        warn!(position, "nothing to delete");
        let mut result = CmdResult::default().with_source(path);
        result.add_message(CmdMessage::warning(format!(
            "No todo number {}, nothing deleted",
            position
        )));
        return Ok(result);
    };

    store::save(store, TaskList::Todo, &map, options)?;
    info!(position, remaining = map.len(), "deleted task");

    let mut result = CmdResult::default()
        .with_affected_tasks(vec![DisplayTask::new(position, task)])
        .with_source(path);
    result.add_message(CmdMessage::success(format!("Deleted todo {}:", position)));
    Ok(result)
}
