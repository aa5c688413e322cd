use anyhow::Result;
use clap::{App as Cli, Arg};
use recipe_navigator::{app::App, config::Config};

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

fn main() -> Result<()> {
    let matches = Cli::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("A simple recipe browsing app for the terminal")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("theme")
                .short("t")
                .long("theme")
                .value_name("NAME")
                .help("Overrides the configured theme")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("log-level")
                .short("l")
                .long("log-level")
                .value_name("LEVEL")
                .help("Overrides the configured log level")
                .possible_values(&LOG_LEVELS)
                .case_insensitive(true)
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(theme) = matches.value_of("theme") {
        config.override_theme(theme);
    }
    if let Some(level) = matches.value_of("log-level") {
        config.override_log_level(level);
    }

    App::start(config)
}
