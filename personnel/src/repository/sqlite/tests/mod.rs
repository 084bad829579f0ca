
use super::*;
use crate::repository::database_manager::{DatabaseConfig, DatabaseManager};
use crate::types::NewEmployee;
use rusqlite::params;

/// Creates a `DatabaseManager` with an in-memory database suitable for testing.
pub fn test_database_manager() -> Result<DatabaseManager, PersonnelError> {
    DatabaseManager::new(&DatabaseConfig::SqliteInMemory)
}

/// Opens a connection to a fresh, empty in-memory database. The manager is returned as
/// well, since the database disappears when it is dropped.
pub fn test_connection() -> Result<(DatabaseManager, SharedSqliteConnection), PersonnelError> {
    let manager = test_database_manager()?;
    let connection = manager.connect()?;
    Ok((manager, connection))
}

pub fn insert_position(connection: &SharedSqliteConnection, title: &str) -> i64 {
    let conn = connection.lock().unwrap();
    conn.query_row(
        "INSERT INTO Position (title) VALUES (?1) RETURNING position_id",
        params![title],
        |row| row.get(0),
    )
    .unwrap()
}

pub fn insert_department(connection: &SharedSqliteConnection, name: &str) -> i64 {
    let conn = connection.lock().unwrap();
    conn.query_row(
        "INSERT INTO Department (name) VALUES (?1) RETURNING department_id",
        params![name],
        |row| row.get(0),
    )
    .unwrap()
}

pub fn new_employee(first_name: &str, last_name: &str) -> NewEmployee {
    NewEmployee {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        ..Default::default()
    }
}

pub fn count_rows(connection: &SharedSqliteConnection, sql: &str, employee_id: i64) -> i64 {
    let conn = connection.lock().unwrap();
    conn.query_row(sql, params![employee_id], |row| row.get(0))
        .unwrap()
}
