use clap::{App, AppSettings};

const ABOUT: &'static str = "
remove-line drops a single known-bad line from a fixed source file";

const LONG_ABOUT: &'static str = "
remove-line drops a single known-bad line from a fixed source file

Line 57 is removed from app/Actions/Psgc/ImportPsgcData.php, relative to the
current directory, and the file is overwritten in place. There is no backup
and running it a second time removes what used to be line 58.";

const AFTER_HELP: &'static str = "
Takes no arguments. Set RUST_LOG=debug to follow each step.";

pub fn app() -> App<'static, 'static> {
    App::new("remove-line")
        .author(crate_authors!())
        .version(crate_version!())
        .about(ABOUT)
        .long_about(LONG_ABOUT)
        .max_term_width(100)
        .setting(AppSettings::UnifiedHelpMessage)
        .help_message("Prints help information. Use --help for more details.")
        .after_help(AFTER_HELP)
}
