use crate::error::PersonnelError;
use crate::repository::SharedSqliteConnection;

pub(crate) mod sqlite_employee_repo;
pub(crate) mod sqlite_reference_repo;
pub(crate) mod sqlite_salary_repo;
pub(crate) mod sqlite_vacation_repo;

pub use sqlite_employee_repo::SqliteEmployeeRepository;
pub use sqlite_reference_repo::SqliteReferenceRepository;
pub use sqlite_salary_repo::SqliteSalaryRepository;
pub use sqlite_vacation_repo::SqliteVacationRepository;

/// Creates the entire database schema by running schema creation functions for all entities.
/// Referenced tables are created before the tables referring to them.
#[allow(clippy::module_name_repetitions)]
pub(crate) fn create_schema(connection: &SharedSqliteConnection) -> Result<(), PersonnelError> {
    sqlite_reference_repo::create_position_table(connection)?;
    sqlite_reference_repo::create_department_table(connection)?;
    sqlite_employee_repo::create_employee_table(connection)?;
    sqlite_salary_repo::create_salary_table(connection)?;
    sqlite_vacation_repo::create_vacation_table(connection)?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests;
