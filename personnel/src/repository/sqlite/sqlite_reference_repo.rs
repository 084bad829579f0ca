use crate::error::PersonnelError;
use crate::repository::reference_repository::ReferenceRepository;
use crate::repository::SharedSqliteConnection;
use crate::types::{Department, Position};
use log::debug;
use rusqlite::params;

pub struct SqliteReferenceRepository {
    connection: SharedSqliteConnection,
}

impl SqliteReferenceRepository {
    pub fn new(connection: SharedSqliteConnection) -> Self {
        Self { connection }
    }
}

const CREATE_POSITION_TABLE_SQL: &str = r"
    CREATE TABLE IF NOT EXISTS Position (
        position_id integer primary key not null,
        title varchar(256) not null unique
    );
";

const CREATE_DEPARTMENT_TABLE_SQL: &str = r"
    CREATE TABLE IF NOT EXISTS Department (
        department_id integer primary key not null,
        name varchar(256) not null unique
    );
";

/// Creates the `Position` table in the database.
pub(crate) fn create_position_table(
    connection: &SharedSqliteConnection,
) -> Result<(), PersonnelError> {
    let conn = connection.lock().map_err(|_| PersonnelError::LockPoisoned)?;
    conn.execute(CREATE_POSITION_TABLE_SQL, [])?;
    Ok(())
}

/// Creates the `Department` table in the database.
pub(crate) fn create_department_table(
    connection: &SharedSqliteConnection,
) -> Result<(), PersonnelError> {
    let conn = connection.lock().map_err(|_| PersonnelError::LockPoisoned)?;
    conn.execute(CREATE_DEPARTMENT_TABLE_SQL, [])?;
    Ok(())
}

impl ReferenceRepository for SqliteReferenceRepository {
    fn find_positions(&self) -> Result<Vec<Position>, PersonnelError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| PersonnelError::LockPoisoned)?;
        let mut stmt =
            conn.prepare("SELECT position_id, title FROM Position ORDER BY position_id")?;
        let positions = stmt
            .query_map([], |row| {
                Ok(Position {
                    position_id: row.get(0)?,
                    title: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(positions)
    }

    fn find_departments(&self) -> Result<Vec<Department>, PersonnelError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| PersonnelError::LockPoisoned)?;
        let mut stmt =
            conn.prepare("SELECT department_id, name FROM Department ORDER BY department_id")?;
        let departments = stmt
            .query_map([], |row| {
                Ok(Department {
                    department_id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(departments)
    }

    fn add_position_if_missing(&self, title: &str) -> Result<bool, PersonnelError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| PersonnelError::LockPoisoned)?;
        let inserted = conn
            .execute(
                "INSERT OR IGNORE INTO Position (title) VALUES (?1)",
                params![title],
            )
            .map_err(|e| PersonnelError::Sql(format!("Unable to insert position {title}: {e}")))?;
        debug!("Position '{title}' inserted: {}", inserted > 0);
        Ok(inserted > 0)
    }

    fn add_department_if_missing(&self, name: &str) -> Result<bool, PersonnelError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| PersonnelError::LockPoisoned)?;
        let inserted = conn
            .execute(
                "INSERT OR IGNORE INTO Department (name) VALUES (?1)",
                params![name],
            )
            .map_err(|e| {
                PersonnelError::Sql(format!("Unable to insert department {name}: {e}"))
            })?;
        debug!("Department '{name}' inserted: {}", inserted > 0);
        Ok(inserted > 0)
    }
}
