use crate::error::PersonnelError;
use crate::repository::vacation_repository::VacationRepository;
use crate::repository::SharedSqliteConnection;
use crate::types::{NewVacation, Vacation};
use log::debug;
use rusqlite::params;

pub struct SqliteVacationRepository {
    connection: SharedSqliteConnection,
}

impl SqliteVacationRepository {
    pub fn new(connection: SharedSqliteConnection) -> Self {
        Self { connection }
    }
}

const CREATE_VACATION_TABLE_SQL: &str = r"
    CREATE TABLE IF NOT EXISTS Vacation (
        vacation_id integer primary key not null,
        employee_id integer not null,
        start_date date not null,
        end_date date not null,
        FOREIGN KEY (employee_id) REFERENCES Employee(employee_id)
    );
";

/// Creates the `Vacation` table in the database.
pub(crate) fn create_vacation_table(
    connection: &SharedSqliteConnection,
) -> Result<(), PersonnelError> {
    let conn = connection.lock().map_err(|_| PersonnelError::LockPoisoned)?;
    conn.execute(CREATE_VACATION_TABLE_SQL, [])?;
    Ok(())
}

impl VacationRepository for SqliteVacationRepository {
    fn insert(&self, vacation: &NewVacation) -> Result<i64, PersonnelError> {
        debug!("Adding {:?} to DBMS", &vacation);
        let conn = self
            .connection
            .lock()
            .map_err(|_| PersonnelError::LockPoisoned)?;
        let id = conn
            .query_row(
                r"INSERT INTO Vacation (employee_id, start_date, end_date)
                  VALUES (?1, ?2, ?3)
                  RETURNING vacation_id",
                params![vacation.employee_id, vacation.start_date, vacation.end_date],
                |row| row.get(0),
            )
            .map_err(|e| PersonnelError::Sql(format!("Unable to insert into Vacation: {e}")))?;
        Ok(id)
    }

    fn find_by_employee(&self, employee_id: i64) -> Result<Vec<Vacation>, PersonnelError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| PersonnelError::LockPoisoned)?;
        let mut stmt = conn.prepare(
            r"SELECT vacation_id, employee_id, start_date, end_date
              FROM Vacation
              WHERE employee_id = ?1
              ORDER BY start_date DESC",
        )?;
        let vacations = stmt
            .query_map(params![employee_id], |row| {
                Ok(Vacation {
                    vacation_id: row.get(0)?,
                    employee_id: row.get(1)?,
                    start_date: row.get(2)?,
                    end_date: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(vacations)
    }
}
