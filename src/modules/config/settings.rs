use clap::{value_parser, Arg, ArgMatches, Command};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

use crate::{CONTACTS_FILE, LOG_FILE, PASSWORD_FILE};

/// What the binary was asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Authenticate and show the menu
    Interactive,
    /// Create the password file and exit
    InitPassword,
}

/// Runtime configuration: file locations and log level
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub contacts_file: PathBuf,
    pub password_file: PathBuf,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub mode: RunMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            contacts_file: PathBuf::from(CONTACTS_FILE),
            password_file: PathBuf::from(PASSWORD_FILE),
            log_file: PathBuf::from(LOG_FILE),
            log_level: LevelFilter::Info,
            mode: RunMode::Interactive,
        }
    }
}

/// Command-line definition; every option also reads an environment variable
pub fn build_cli() -> Command {
    Command::new("contact-book")
        .about("A password-protected contact book for the terminal")
        .arg(
            Arg::new("contacts-file")
                .long("contacts-file")
                .env("CONTACT_BOOK_FILE")
                .value_name("PATH")
                .help("Where contacts are stored")
                .default_value(CONTACTS_FILE)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("password-file")
                .long("password-file")
                .env("CONTACT_BOOK_PASSWORD_FILE")
                .value_name("PATH")
                .help("File holding the password hash")
                .default_value(PASSWORD_FILE)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .env("CONTACT_BOOK_LOG_FILE")
                .value_name("PATH")
                .help("Append log records to this file")
                .default_value(LOG_FILE)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .env("CONTACT_BOOK_LOG_LEVEL")
                .value_name("LEVEL")
                .help("off, error, warn, info, debug or trace")
                .default_value("info"),
        )
        .subcommand(
            Command::new("init-password").about("Create the password file before first use"),
        )
}

impl AppConfig {
    /// Parse the process arguments; clap exits on `--help` or bad usage
    pub fn from_args() -> Result<Self, String> {
        Self::from_matches(&build_cli().get_matches())
    }

    pub fn from_matches(matches: &ArgMatches) -> Result<Self, String> {
        let defaults = Self::default();

        let path = |id: &str, fallback: &PathBuf| {
            matches
                .get_one::<PathBuf>(id)
                .cloned()
                .unwrap_or_else(|| fallback.clone())
        };

        let log_level = match matches.get_one::<String>("log-level") {
            Some(level) => LevelFilter::from_str(level)
                .map_err(|_| format!("Invalid log level: {}", level))?,
            None => defaults.log_level,
        };

        let mode = match matches.subcommand_name() {
            Some("init-password") => RunMode::InitPassword,
            _ => RunMode::Interactive,
        };

        Ok(Self {
            contacts_file: path("contacts-file", &defaults.contacts_file),
            password_file: path("password-file", &defaults.password_file),
            log_file: path("log-file", &defaults.log_file),
            log_level,
            mode,
        })
    }
}
