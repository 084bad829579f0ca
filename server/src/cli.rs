use std::fmt::{self, Formatter};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub(crate) enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Parser)]
/// Employee records web server - list, add and delete employees, their salaries and vacations
///
/// Settings are read from the configuration file, options given on the command line take
/// precedence.
#[command(author, version, about)] // Read from Cargo.toml
pub(crate) struct Opts {
    /// Configuration file, defaults to personnel.toml in the user's configuration directory
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to listen on, i.e. 127.0.0.1:5000
    #[arg(short, long)]
    pub listen: Option<String>,

    /// Sqlite database file
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// Writes the effective configuration to the configuration file and exits
    #[arg(long)]
    pub write_config: bool,

    #[arg(short, long)]
    pub verbosity: Option<LogLevel>,
}
