use crate::codec::CodecOptions;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{DisplayTask, TaskList};
use crate::store::{self, DataStore};

/// Lists tasks in position order. With queries, keeps tasks whose subject
/// contains at least one of them.
pub fn run<S: DataStore, Q: AsRef<str>>(
    store: &S,
    list: TaskList,
    queries: &[Q],
    options: CodecOptions,
) -> Result<CmdResult> {
    let map = store::load(store, list, options)?;
    let total = map.len();

    let listed: Vec<DisplayTask> = map
        .into_sorted()
        .into_iter()
        .filter(|(_, task)| queries.is_empty() || queries.iter().any(|q| task.matches(q.as_ref())))
        .map(|(position, task)| DisplayTask::new(position, task))
        .collect();

    Ok(CmdResult::default()
        .with_listed_tasks(listed, total)
        .with_source(store.list_path(list)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn store() -> InMemoryStore {
        InMemoryStore::new().with_lines(
            TaskList::Todo,
            &[
                "call mom +home @phone",
                "x 2021-01-02 2021-01-01 buy milk @store",
                "write report +work",
                "fix sink +home",
            ],
        )
    }

    #[test]
    fn lists_everything_without_queries() {
        let no_queries: [&str; 0] = [];
        let result = run(&store(), TaskList::Todo, &no_queries, CodecOptions::default()).unwrap();

        assert_eq!(result.total_tasks, 4);
        let positions: Vec<_> = result.listed_tasks.iter().map(|dt| dt.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);
        assert_eq!(result.source, Some(PathBuf::from("memory://todo.txt")));
    }

    #[test]
    fn keeps_original_positions_when_filtering() {
        let result = run(&store(), TaskList::Todo, &["+home"], CodecOptions::default()).unwrap();

        assert_eq!(result.total_tasks, 4);
        let positions: Vec<_> = result.listed_tasks.iter().map(|dt| dt.position).collect();
        assert_eq!(positions, vec![1, 4]);
    }

    #[test]
    fn any_query_matches_once() {
        let result = run(
            &store(),
            TaskList::Todo,
            &["milk", "@store", "report"],
            CodecOptions::default(),
        )
        .unwrap();

        let positions: Vec<_> = result.listed_tasks.iter().map(|dt| dt.position).collect();
        assert_eq!(positions, vec![2, 3]);
    }

    #[test]
    fn lists_the_archive() {
        let store = InMemoryStore::new().with_lines(TaskList::Done, &["x old"]);
        let no_queries: [&str; 0] = [];
        let result = run(&store, TaskList::Done, &no_queries, CodecOptions::default()).unwrap();

        assert_eq!(result.listed_tasks.len(), 1);
        assert!(result.listed_tasks[0].task.done);
    }
}
