use super::DataStore;
use crate::error::{Result, TogoError};
use crate::model::TaskList;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

/// File-backed storage: one plain text file per list.
pub struct FileStore {
    todo_path: PathBuf,
    done_path: PathBuf,
}

impl FileStore {
    pub fn new(todo_path: PathBuf, done_path: PathBuf) -> Self {
        Self {
            todo_path,
            done_path,
        }
    }

    fn path(&self, list: TaskList) -> &Path {
        match list {
            TaskList::Todo => &self.todo_path,
            TaskList::Done => &self.done_path,
        }
    }
}

fn render(lines: &[String]) -> String {
    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    content
}

/// Follows symlinks so a rename replaces the link target, not the link.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(TogoError::Io(e)),
    }
}

/// Writes next to the target, then renames over it.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let path = resolve_target(path)?;
    let path = path.as_path();
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("todo.txt");
    let tmp_path = path.with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

    fs::write(&tmp_path, content).map_err(TogoError::Io)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(TogoError::Io(e));
    }
    Ok(())
}

/// Splits raw file content into lines like `str::lines`. A line that is not
/// valid UTF-8 is kept, with the bad bytes replaced, rather than failing the
/// whole file.
fn split_lines(path: &Path, bytes: &[u8]) -> Vec<String> {
    if bytes.is_empty() {
        return Vec::new();
    }
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    body.split(|b| *b == b'\n')
        .enumerate()
        .map(|(i, raw)| {
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            match std::str::from_utf8(raw) {
                Ok(line) => line.to_string(),
                Err(_) => {
                    warn!(path = %path.display(), line = i + 1, "line is not valid UTF-8");
                    String::from_utf8_lossy(raw).into_owned()
                }
            }
        })
        .collect()
}

fn ends_without_newline(path: &Path) -> Result<bool> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(TogoError::Io(e)),
    };
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

impl DataStore for FileStore {
    fn read_lines(&self, list: TaskList) -> Result<Vec<String>> {
        let path = self.path(list);
        let bytes = fs::read(path).map_err(TogoError::Io)?;
        Ok(split_lines(path, &bytes))
    }

    fn write_lines(&mut self, list: TaskList, lines: &[String]) -> Result<()> {
        write_atomic(self.path(list), &render(lines))
    }

    fn append_lines(&mut self, list: TaskList, lines: &[String]) -> Result<()> {
        let path = self.path(list);
        let mut content = render(lines);
        if !content.is_empty() && ends_without_newline(path)? {
            content.insert(0, '\n');
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(TogoError::Io)?;
        file.write_all(content.as_bytes()).map_err(TogoError::Io)?;
        Ok(())
    }

    fn create_list(&mut self, list: TaskList) -> Result<bool> {
        let path = self.path(list);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TogoError::Io)?;
            }
        }
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(TogoError::Io(e)),
        }
    }

    fn list_path(&self, list: TaskList) -> PathBuf {
        self.path(list).to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_lines_matches_str_lines() {
        let path = Path::new("todo.txt");
        assert!(split_lines(path, b"").is_empty());
        assert_eq!(split_lines(path, b"\n"), vec![""]);
        assert_eq!(split_lines(path, b"a\r\nb"), vec!["a", "b"]);
        assert_eq!(split_lines(path, b"a\n\nb\n"), vec!["a", "", "b"]);
    }

    #[test]
    fn split_lines_replaces_bad_bytes_per_line() {
        let lines = split_lines(Path::new("todo.txt"), b"ok\ncaf\xe9\n");
        assert_eq!(lines, vec!["ok".to_string(), "caf\u{FFFD}".to_string()]);
    }
}
