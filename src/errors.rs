use std::io;
use std::path::Path;
use std::result::Result as StdResult;

#[derive(Fail, Debug)]
pub enum Error {
    #[fail(display = "Could not read lines from {}", path)]
    Read {
        path: String,
        #[cause]
        error: io::Error,
    },
    #[fail(display = "Could not write lines to {}", path)]
    Write {
        path: String,
        #[cause]
        error: io::Error,
    },
}

impl Error {
    pub(crate) fn read<T: AsRef<Path>>(path: T) -> impl FnOnce(io::Error) -> Error {
        let path = path.as_ref().display().to_string();
        move |error| Error::Read { path, error }
    }

    pub(crate) fn write<T: AsRef<Path>>(path: T) -> impl FnOnce(io::Error) -> Error {
        let path = path.as_ref().display().to_string();
        move |error| Error::Write { path, error }
    }
}

pub type Result<T> = StdResult<T, Error>;
