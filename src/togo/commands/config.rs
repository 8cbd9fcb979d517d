use crate::commands::{CmdMessage, CmdResult};
use crate::config::TogoConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or updates `config.json` in `config_dir`.
///
/// A bad key or value is reported as an error message, not an `Err`, and
/// leaves the file as it was.
pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = TogoConfig::load(config_dir)?;

    let message = match action {
        ConfigAction::ShowAll => return Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => config
            .get(&key)
            .map(CmdMessage::info)
            .unwrap_or_else(|| CmdMessage::error(format!("Unknown config key: {}", key))),
        ConfigAction::Set(key, value) => match config.set(&key, &value) {
            Err(e) => CmdMessage::error(e),
            Ok(()) => {
                config.save(config_dir)?;
                let shown = config.get(&key).unwrap_or(value);
                CmdMessage::success(format!("{} set to {}", key, shown))
            }
        },
    };

    let mut result = CmdResult::default();
    result.add_message(message);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn set_persists_and_show_reads_back() {
        let dir = tempfile::tempdir().unwrap();

        let result = run(
            dir.path(),
            ConfigAction::Set("prepend-date".into(), "true".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let result = run(dir.path(), ConfigAction::ShowKey("prepend-date".into())).unwrap();
        assert_eq!(result.messages[0].content, "true");

        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert!(result.config.unwrap().prepend_date);
    }

    #[test]
    fn bad_key_reports_error_without_saving() {
        let dir = tempfile::tempdir().unwrap();

        let result = run(dir.path(), ConfigAction::Set("colour".into(), "x".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());

        let result = run(dir.path(), ConfigAction::ShowKey("colour".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
    }

    #[test]
    fn bad_value_keeps_previous_setting() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), ConfigAction::Set("priority".into(), "on".into())).unwrap();

        let result = run(dir.path(), ConfigAction::Set("priority".into(), "maybe".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);

        let result = run(dir.path(), ConfigAction::ShowKey("priority".into())).unwrap();
        assert_eq!(result.messages[0].content, "true");
    }
}
