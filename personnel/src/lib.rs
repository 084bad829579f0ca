//! Employee records: employees, their salaries per calendar month and their vacations,
//! kept in a local Sqlite database.
//!
//! The [`ApplicationRuntime`] is created once at startup. It owns the configuration and the
//! connection provider, and hands out services bound to a freshly opened connection, i.e.
//! one connection per request:
//!
//! ```rust,ignore
//! let runtime = ApplicationRuntimeBuilder::new().use_in_memory_db().build()?;
//! let employees = runtime.employee_service()?.list_employees()?;
//! ```
use crate::error::PersonnelError;
use config::AppConfiguration;
use log::debug;
use repository::database_manager::{DatabaseConfig, DatabaseManager};
use repository::sqlite::{
    SqliteEmployeeRepository, SqliteReferenceRepository, SqliteSalaryRepository,
    SqliteVacationRepository,
};
use service::employee_service::EmployeeService;
use service::reference_service::ReferenceService;
use service::salary_service::SalaryService;
use service::vacation_service::VacationService;
use std::path::PathBuf;
use std::sync::Arc;

pub mod config;
pub mod date;
pub mod error;
pub mod repository;
pub mod service;
pub mod types;

pub struct ApplicationRuntime {
    config: AppConfiguration,
    database: DatabaseManager,
}

impl ApplicationRuntime {
    #[must_use]
    pub fn config(&self) -> &AppConfiguration {
        &self.config
    }

    /// Service for listing, showing, adding and deleting employees, bound to a new connection.
    ///
    /// # Errors
    /// Returns an error if the database connection cannot be opened.
    pub fn employee_service(&self) -> Result<EmployeeService, PersonnelError> {
        let connection = self.database.connect()?;
        Ok(EmployeeService::new(
            Arc::new(SqliteEmployeeRepository::new(connection.clone())),
            Arc::new(SqliteSalaryRepository::new(connection.clone())),
            Arc::new(SqliteVacationRepository::new(connection)),
        ))
    }

    /// # Errors
    /// Returns an error if the database connection cannot be opened.
    pub fn salary_service(&self) -> Result<SalaryService, PersonnelError> {
        let connection = self.database.connect()?;
        Ok(SalaryService::new(Arc::new(SqliteSalaryRepository::new(
            connection,
        ))))
    }

    /// # Errors
    /// Returns an error if the database connection cannot be opened.
    pub fn vacation_service(&self) -> Result<VacationService, PersonnelError> {
        let connection = self.database.connect()?;
        Ok(VacationService::new(Arc::new(
            SqliteVacationRepository::new(connection),
        )))
    }

    /// # Errors
    /// Returns an error if the database connection cannot be opened.
    pub fn reference_service(&self) -> Result<ReferenceService, PersonnelError> {
        let connection = self.database.connect()?;
        Ok(ReferenceService::new(Arc::new(
            SqliteReferenceRepository::new(connection),
        )))
    }
}

/// Builds an [`ApplicationRuntime`]. Without further instructions the configuration
/// defaults are used and the database is the file named in the configuration.
#[derive(Default)]
pub struct ApplicationRuntimeBuilder {
    config: Option<AppConfiguration>,
    database: Option<DatabaseConfig>,
}

impl ApplicationRuntimeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(mut self, config: AppConfiguration) -> Self {
        self.config = Some(config);
        self
    }

    /// Keeps the database in memory, nothing survives the runtime. Used for testing.
    #[must_use]
    pub fn use_in_memory_db(mut self) -> Self {
        self.database = Some(DatabaseConfig::SqliteInMemory);
        self
    }

    /// Overrides the database file named in the configuration
    #[must_use]
    pub fn use_database_path(mut self, path: PathBuf) -> Self {
        self.database = Some(DatabaseConfig::SqliteOnDisk { path });
        self
    }

    /// Opens the database, creates the schema and seeds the configured reference data.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened, initialised or seeded.
    pub fn build(self) -> Result<ApplicationRuntime, PersonnelError> {
        let config = self.config.unwrap_or_default();
        let database_config = self.database.unwrap_or_else(|| DatabaseConfig::SqliteOnDisk {
            path: PathBuf::from(&config.database.path),
        });
        debug!("Building runtime with {database_config:?}");

        let runtime = ApplicationRuntime {
            database: DatabaseManager::new(&database_config)?,
            config,
        };
        runtime.reference_service()?.seed(&runtime.config.reference)?;

        Ok(runtime)
    }
}
