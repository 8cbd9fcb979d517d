use crate::codec::CodecOptions;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_TODO_FILE: &str = "todo.txt";
const DEFAULT_DONE_FILE: &str = "done.txt";

/// Keys understood by [`TogoConfig::get`] and [`TogoConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["todo-file", "done-file", "prepend-date", "priority"];

/// Configuration for togo, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TogoConfig {
    /// The active task list
    #[serde(default = "default_todo_file")]
    pub todo_file: PathBuf,

    /// Archive for completed tasks; `done.txt` next to the todo file if unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done_file: Option<PathBuf>,

    /// Stamp today's date on added tasks that carry no creation date
    #[serde(default)]
    pub prepend_date: bool,

    /// Read and write the `(A)` priority tag
    #[serde(default)]
    pub priority: bool,
}

fn default_todo_file() -> PathBuf {
    PathBuf::from(DEFAULT_TODO_FILE)
}

impl Default for TogoConfig {
    fn default() -> Self {
        Self {
            todo_file: default_todo_file(),
            done_file: None,
            prepend_date: false,
            priority: false,
        }
    }
}

impl TogoConfig {
    /// Reads `config.json` from `config_dir`. No file means defaults.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        match fs::read_to_string(config_dir.as_ref().join(CONFIG_FILENAME)) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes `config.json`, creating `config_dir` as needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn done_file_path(&self) -> PathBuf {
        match &self.done_file {
            Some(path) => path.clone(),
            None => self.todo_file.with_file_name(DEFAULT_DONE_FILE),
        }
    }

    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions {
            parse_priority: self.priority,
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "todo-file" => Some(self.todo_file.display().to_string()),
            "done-file" => Some(self.done_file_path().display().to_string()),
            "prepend-date" => Some(self.prepend_date.to_string()),
            "priority" => Some(self.priority.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "todo-file" => self.todo_file = PathBuf::from(value),
            "done-file" => self.done_file = Some(PathBuf::from(value)),
            "prepend-date" => self.prepend_date = parse_bool(key, value)?,
            "priority" => self.priority = parse_bool(key, value)?,
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> std::result::Result<bool, String> {
    match value {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(format!("Invalid value for {}: {} (expected true or false)", key, value)),
    }
}
