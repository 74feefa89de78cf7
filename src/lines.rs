use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::ops;
use std::path::Path;

use errors::{Error, Result};

/// Raw lines, terminators included.
#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct Lines(Vec<Vec<u8>>);

impl Lines {
    pub fn new(lines: Vec<Vec<u8>>) -> Lines {
        Lines(lines)
    }

    pub fn read_from<R: Read>(reader: R) -> ::std::io::Result<Lines> {
        let mut reader = BufReader::new(reader);
        let mut lines = vec![];
        loop {
            let mut line = vec![];
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            lines.push(line);
        }
        Ok(Lines(lines))
    }

    pub fn write_to<W: Write>(&self, writer: W) -> ::std::io::Result<()> {
        let mut writer = BufWriter::new(writer);
        for line in &self.0 {
            writer.write_all(line)?;
        }
        writer.flush()
    }

    pub fn load<T: AsRef<Path>>(path: T) -> Result<Lines> {
        let path = path.as_ref();
        let file = File::open(path).map_err(Error::read(path))?;
        let lines = Lines::read_from(file).map_err(Error::read(path))?;
        debug!("Loaded {} lines from {}", lines.len(), path.display());
        Ok(lines)
    }

    pub fn store<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(Error::write(path))?;
        self.write_to(file).map_err(Error::write(path))?;
        debug!("Wrote {} lines to {}", self.len(), path.display());
        Ok(())
    }

    /// Everything before `index` followed by everything after it. An index
    /// past the end leaves the sequence as it is.
    pub fn without(&self, index: usize) -> Lines {
        let before = &self.0[..index.min(self.0.len())];
        let after = &self.0[index.saturating_add(1).min(self.0.len())..];
        Lines(before.iter().chain(after).cloned().collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ops::Deref for Lines {
    type Target = [Vec<u8>];
    fn deref(&self) -> &[Vec<u8>] {
        &self.0
    }
}
