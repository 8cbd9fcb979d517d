use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TaskList;
use crate::store::DataStore;
use tracing::info;

/// Creates an empty todo list if there is none yet. Loading never does this
/// on its own.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let path = store.list_path(TaskList::Todo);
    let created = store.create_list(TaskList::Todo)?;

    let mut result = CmdResult::default().with_source(path.clone());
    if created {
        info!(path = %path.display(), "created todo list");
        result.add_message(CmdMessage::success(format!(
            "Initialized empty todo list at {}",
            path.display()
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Todo list already exists at {}",
            path.display()
        )));
    }
    Ok(result)
}
