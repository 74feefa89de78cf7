#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

pub mod config;
pub mod errors;
pub mod lines;
pub mod report;

use config::Config;
use lines::Lines;
use report::Report;

pub use errors::*;

/// Loads the target file, drops the configured line and writes the rest back.
///
/// Nothing is written if loading fails. An out of range index is not an
/// error: the file is rewritten as it was.
pub fn remove_line(config: &Config) -> Result<Report> {
    let lines = Lines::load(config.path())?;
    let remaining = lines.without(config.line_index());
    if remaining.len() == lines.len() {
        warn!(
            "{} has only {} lines, line {} left in place",
            config.path().display(),
            lines.len(),
            config.line_number()
        );
    } else {
        info!(
            "Removing line {} of {}",
            config.line_number(),
            config.path().display()
        );
    }
    remaining.store(config.path())?;

    Ok(Report::new(
        config.line_number(),
        lines.len(),
        remaining.len(),
    ))
}
