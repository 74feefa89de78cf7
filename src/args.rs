use remove_line::config::Config;

use app;

pub fn parse() -> Config {
    app::app().get_matches();
    Config::default()
}
