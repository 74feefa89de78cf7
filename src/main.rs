extern crate env_logger;
extern crate failure;
extern crate remove_line;

#[macro_use]
extern crate clap;

use std::process;

use failure::Fail;

use remove_line::config::Config;
use remove_line::report::Report;
use remove_line::{remove_line, Result};

mod app;
mod args;

fn main() {
    env_logger::init();

    match run(args::parse()) {
        Ok(report) => {
            println!("{}", report);
            process::exit(0);
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            for cause in (&err as &Fail).iter_causes() {
                eprintln!("Caused by: {}", cause);
            }
            process::exit(1);
        }
    }
}

fn run(config: Config) -> Result<Report> {
    remove_line(&config)
}
