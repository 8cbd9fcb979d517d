use crate::codec::CodecOptions;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TogoError};
use crate::model::{DisplayTask, TaskList};
use crate::store::{self, DataStore};
use tracing::{info, warn};

/// Flips the done marker of the task at `position`.
///
/// Completion dates are not stamped or cleared here.
pub fn run<S: DataStore>(
    store: &mut S,
    position: usize,
    options: CodecOptions,
) -> Result<CmdResult> {
    let mut map = store::load(store, TaskList::Todo, options)?;

    let task = match map.get_mut(position) {
        Some(task) => {
            task.toggle_done();
            task.clone()
        }
        None => {
            warn!(position, "no task at position");
            return Err(TogoError::TaskNotFound(position));
        }
    };

    store::save(store, TaskList::Todo, &map, options)?;
    info!(position, done = task.done, "toggled task");

    let verb = if task.done { "Completed" } else { "Reopened" };
    let mut result = CmdResult::default()
        .with_affected_tasks(vec![DisplayTask::new(position, task)])
        .with_source(store.list_path(TaskList::Todo));
    result.add_message(CmdMessage::success(format!("{} todo {}:", verb, position)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn toggles_back_and_forth() {
        let mut store = InMemoryStore::new().with_lines(TaskList::Todo, &["a", "2021-01-01 b"]);

        let result = run(&mut store, 2, CodecOptions::default()).unwrap();
        assert!(result.affected_tasks[0].task.done);
        assert_eq!(
            store.lines(TaskList::Todo).unwrap(),
            &["a", "x 2021-01-01 b"]
        );

        let result = run(&mut store, 2, CodecOptions::default()).unwrap();
        assert!(!result.affected_tasks[0].task.done);
        assert_eq!(store.lines(TaskList::Todo).unwrap(), &["a", "2021-01-01 b"]);
    }

    #[test]
    fn does_not_stamp_completion_date() {
        let mut store = InMemoryStore::new().with_lines(TaskList::Todo, &["2021-01-01 b"]);

        let result = run(&mut store, 1, CodecOptions::default()).unwrap();
        assert_eq!(result.affected_tasks[0].task.completion_date, None);
    }

    #[test]
    fn unknown_position_is_not_found_and_leaves_store() {
        let mut store = InMemoryStore::new().with_lines(TaskList::Todo, &["a"]);
        store.set_simulate_write_error(true);

        for position in [0, 2] {
            let err = run(&mut store, position, CodecOptions::default()).unwrap_err();
            assert!(matches!(err, TogoError::TaskNotFound(p) if p == position));
        }
        assert_eq!(store.lines(TaskList::Todo).unwrap(), &["a"]);
    }

    #[test]
    fn write_failure_is_reported() {
        let mut store = InMemoryStore::new().with_lines(TaskList::Todo, &["a"]);
        store.set_simulate_write_error(true);

        assert!(matches!(
            run(&mut store, 1, CodecOptions::default()),
            Err(TogoError::Io(_))
        ));
    }
}
