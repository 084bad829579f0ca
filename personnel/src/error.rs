use std::{io, path::PathBuf};

use crate::date;
use thiserror::Error;

#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug)]
pub enum PersonnelError {
    #[error("Unable to load the application configuration file {path:?}")]
    ApplicationConfig { path: PathBuf, source: io::Error },
    #[error("Unable to parse contents of {path}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Unable to create configuration file {path}")]
    ConfigFileCreation { path: PathBuf },
    #[error("Unable to open DBMS in file {path}: {reason}")]
    OpenDbms { path: String, reason: String },
    #[error("SQL dbms error: {0}")]
    Sql(String),
    #[error("Directory creation failed")]
    CreateDir(#[from] io::Error),
    #[error("Could not make sense of input: {0}")]
    BadInput(String),
    #[error("A salary for {month} is already recorded for employee {employee_id}")]
    SalaryPeriodTaken { employee_id: i64, month: String },
    #[error("Mutex locking error")]
    LockPoisoned,
    #[error("Unable to create database SQL schema: {0}")]
    DatabaseError(String),
}

impl From<rusqlite::Error> for PersonnelError {
    fn from(err: rusqlite::Error) -> Self {
        PersonnelError::Sql(format!("Sqlite error {err}"))
    }
}

impl From<date::Error> for PersonnelError {
    fn from(err: date::Error) -> Self {
        PersonnelError::BadInput(format!("{err}"))
    }
}
