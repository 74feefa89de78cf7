use std::fs;
use std::path::{Path, PathBuf};

use tempfile;

use remove_line::config::TARGET_PATH;

/// `count` lines of the form `line 1\n`, `line 2\n`, ...
pub fn numbered_lines(count: usize) -> Vec<String> {
    (1..count + 1).map(|i| format!("line {}\n", i)).collect()
}

pub fn read_lines<T: AsRef<Path>>(path: T) -> Vec<String> {
    let content = fs::read_to_string(path).unwrap();
    content.split_terminator('\n').map(|line| format!("{}\n", line)).collect()
}

/// Runs `cb` inside a fresh directory, handing it the path where the target
/// file lives. With `content` set the file (and its parents) are created first.
pub fn with_setup<F>(prefix: &str, content: Option<&[u8]>, cb: F)
where
    F: FnOnce(&Path, PathBuf),
{
    let temp_dir = tempfile::Builder::new().prefix(prefix).tempdir().unwrap();
    let target = temp_dir.path().join(TARGET_PATH);

    if let Some(content) = content {
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, content).unwrap();
    }

    cb(temp_dir.path(), target);
}

pub fn join_lines(lines: &[String]) -> Vec<u8> {
    lines.concat().into_bytes()
}

macro_rules! matches {
    ($e:expr, $p: pat) => {
        match $e {
            $p => true,
            _ => false
        }
    }
}
