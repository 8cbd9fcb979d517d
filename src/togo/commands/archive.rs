use crate::codec::CodecOptions;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{DisplayTask, TaskList, TaskMap};
use crate::store::{self, DataStore};
use tracing::info;

/// Moves every done task from the todo list to the end of the done list.
///
/// The done tasks are appended before the todo list is rewritten, so a failed
/// append leaves the todo list untouched. The archive is created when absent
/// and never truncated.
pub fn run<S: DataStore>(store: &mut S, options: CodecOptions) -> Result<CmdResult> {
    let map = store::load(store, TaskList::Todo, options)?;

    let (moved, kept): (Vec<_>, Vec<_>) = map
        .into_sorted()
        .into_iter()
        .partition(|(_, task)| task.done);

    let done_path = store.list_path(TaskList::Done);
    if moved.is_empty() {
        let mut result = CmdResult::default().with_source(done_path);
        result.add_message(CmdMessage::info("No completed todos to archive"));
        return Ok(result);
    }

    let moved_tasks: Vec<_> = moved.iter().map(|(_, task)| task.clone()).collect();
    store::append(store, TaskList::Done, &moved_tasks, options)?;

    let remaining = TaskMap::from_tasks(kept.into_iter().map(|(_, task)| task));
    store::save(store, TaskList::Todo, &remaining, options)?;

    info!(
        moved = moved.len(),
        remaining = remaining.len(),
        "archived done tasks"
    );

    let mut result = CmdResult::default()
        .with_affected_tasks(
            moved
                .into_iter()
                .map(|(position, task)| DisplayTask::new(position, task))
                .collect(),
        )
        .with_source(done_path.clone());
    result.add_message(CmdMessage::success(format!(
        "Archived {} todo(s) to {}:",
        result.affected_tasks.len(),
        done_path.display()
    )));
    Ok(result)
}
