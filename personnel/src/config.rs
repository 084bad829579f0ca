use crate::error::PersonnelError;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use log::debug;

pub const DEFAULT_LISTEN_ADDRESS: &str = "127.0.0.1:5000";

/// Application configuration struct
/// Holds the address to listen on, the location of the database and the reference data to seed.
///
/// Every section may be left out of the TOML file, defaults are used in that case.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
pub struct AppConfiguration {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub database: DatabaseSettings,

    #[serde(default)]
    pub reference: ReferenceData,
}

/// Holds the configuration for the `server` section of the Toml file
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct ServerSettings {
    /// Socket address the web server binds to
    pub listen: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            listen: DEFAULT_LISTEN_ADDRESS.to_string(),
        }
    }
}

/// Holds the configuration for the `database` section of the Toml file
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct DatabaseSettings {
    /// The path to the Sqlite database file
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        DatabaseSettings {
            path: database_file().to_string_lossy().to_string(),
        }
    }
}

/// Positions and departments inserted at startup unless already present
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
pub struct ReferenceData {
    #[serde(default)]
    pub positions: Vec<String>,
    #[serde(default)]
    pub departments: Vec<String>,
}

/// Filename holding the application configuration parameters
#[must_use]
pub fn configuration_file() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from("personnel.toml"),
        |dirs| dirs.config_dir().join("personnel.toml"),
    )
}

/// Filename of the Sqlite DBMS holding the employee records
#[must_use]
pub fn database_file() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from("personnel.db"),
        |dirs| dirs.data_dir().join("personnel.db"),
    )
}

/// Loads the configuration.
///
/// An explicitly given file must exist. When no file is given, the default location is
/// tried and the built-in defaults are used if there is nothing there.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load(path: Option<&Path>) -> Result<AppConfiguration, PersonnelError> {
    match path {
        Some(path) => read(path),
        None => {
            let default_path = configuration_file();
            if default_path.exists() {
                read(&default_path)
            } else {
                debug!(
                    "No configuration file at {}, using defaults",
                    default_path.to_string_lossy()
                );
                Ok(AppConfiguration::default())
            }
        }
    }
}

/// Writes the configuration to `path`, creating the directory if needed.
///
/// # Errors
/// Returns `PersonnelError::ConfigFileCreation` if the file cannot be written.
pub fn save(cfg: &AppConfiguration, path: &Path) -> Result<(), PersonnelError> {
    create_configuration_file(cfg, path).map_err(|_src_err| PersonnelError::ConfigFileCreation {
        path: path.to_path_buf(),
    })
}

#[allow(clippy::missing_errors_doc)]
pub fn application_config_to_string(cfg: &AppConfiguration) -> Result<String> {
    Ok(toml::to_string::<AppConfiguration>(cfg)?)
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "personnel", "personnel")
}

/// Reads the `Application` configuration struct from the supplied TOML file
fn read(path: &Path) -> Result<AppConfiguration, PersonnelError> {
    let mut file = File::open(path).map_err(|source| PersonnelError::ApplicationConfig {
        path: path.into(),
        source,
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|source| PersonnelError::ApplicationConfig {
            path: path.into(),
            source,
        })?;
    toml::from_str::<AppConfiguration>(&contents).map_err(|source| PersonnelError::TomlParse {
        path: path.into(),
        source,
    })
}

fn create_configuration_file(cfg: &AppConfiguration, path: &Path) -> Result<()> {
    if let Some(directory) = path.parent() {
        if !directory.as_os_str().is_empty() && !directory.try_exists()? {
            fs::create_dir_all(directory)?;
        }
    }

    let mut file = File::create(path)?;
    let toml = application_config_to_string(cfg)?;
    file.write_all(toml.as_bytes())?;

    Ok(())
}
