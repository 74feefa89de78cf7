use std::path::{Path, PathBuf};

pub const TARGET_PATH: &'static str = "app/Actions/Psgc/ImportPsgcData.php";

// Counts from 1
pub const LINE_NUMBER: usize = 57;

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Config {
    path: PathBuf,
    line_index: usize,
}

impl Config {
    pub fn new<T: AsRef<Path>>(path: T, line_index: usize) -> Config {
        Config {
            path: path.as_ref().into(),
            line_index,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn line_index(&self) -> usize {
        self.line_index
    }

    pub fn line_number(&self) -> usize {
        self.line_index + 1
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new(TARGET_PATH, LINE_NUMBER - 1)
    }
}
