use crate::error::PersonnelError;
use crate::repository::salary_repository::SalaryRepository;
use crate::repository::SharedSqliteConnection;
use crate::types::{MonthRange, NewSalary, Salary};
use log::debug;
use rusqlite::{ffi, params, Connection, ErrorCode, TransactionBehavior};

pub struct SqliteSalaryRepository {
    connection: SharedSqliteConnection,
}

impl SqliteSalaryRepository {
    pub fn new(connection: SharedSqliteConnection) -> Self {
        Self { connection }
    }
}

/// SQL statement to create the `Salary` table.
const CREATE_SALARY_TABLE_SQL: &str = r"
    CREATE TABLE IF NOT EXISTS Salary (
        salary_id integer primary key not null,
        employee_id integer not null,
        amount real not null,
        from_date date not null,
        to_date date not null,
        FOREIGN KEY (employee_id) REFERENCES Employee(employee_id)
    );
";

/// One salary per employee and month. Kept as a separate index so that it is added to
/// databases created before it existed.
const CREATE_SALARY_MONTH_INDEX_SQL: &str = r"
    CREATE UNIQUE INDEX IF NOT EXISTS salary_employee_month
        ON Salary (employee_id, from_date);
";

/// Creates the `Salary` table in the database.
pub(crate) fn create_salary_table(
    connection: &SharedSqliteConnection,
) -> Result<(), PersonnelError> {
    let conn = connection.lock().map_err(|_| PersonnelError::LockPoisoned)?;
    conn.execute(CREATE_SALARY_TABLE_SQL, [])?;
    conn.execute(CREATE_SALARY_MONTH_INDEX_SQL, [])?;
    Ok(())
}

fn period_taken(salary: &NewSalary) -> PersonnelError {
    PersonnelError::SalaryPeriodTaken {
        employee_id: salary.employee_id,
        month: salary.period.first_day.format("%Y-%m").to_string(),
    }
}

fn overlaps(conn: &Connection, employee_id: i64, period: &MonthRange) -> Result<bool, PersonnelError> {
    let count: i64 = conn.query_row(
        r"SELECT count(*) FROM Salary
          WHERE employee_id = ?1 AND from_date <= ?3 AND to_date >= ?2",
        params![employee_id, period.first_day, period.last_day],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

impl SalaryRepository for SqliteSalaryRepository {
    fn insert(&self, salary: &NewSalary) -> Result<i64, PersonnelError> {
        debug!("Adding {:?} to DBMS", &salary);
        let mut conn = self
            .connection
            .lock()
            .map_err(|_| PersonnelError::LockPoisoned)?;

        // Takes the write lock up front, concurrent writers wait in the busy handler
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        if overlaps(&tx, salary.employee_id, &salary.period)? {
            return Err(period_taken(salary));
        }
        let id = tx
            .query_row(
                r"INSERT INTO Salary (employee_id, amount, from_date, to_date)
                  VALUES (?1, ?2, ?3, ?4)
                  RETURNING salary_id",
                params![
                    salary.employee_id,
                    salary.amount,
                    salary.period.first_day,
                    salary.period.last_day,
                ],
                |row| row.get(0),
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == ErrorCode::ConstraintViolation
                        && err.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
                {
                    period_taken(salary)
                }
                e => PersonnelError::Sql(format!("Unable to insert into Salary: {e}")),
            })?;
        tx.commit()?;
        Ok(id)
    }

    fn find_by_employee(&self, employee_id: i64) -> Result<Vec<Salary>, PersonnelError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| PersonnelError::LockPoisoned)?;
        let mut stmt = conn.prepare(
            r"SELECT salary_id, employee_id, amount, from_date, to_date
              FROM Salary
              WHERE employee_id = ?1
              ORDER BY from_date DESC",
        )?;
        let salaries = stmt
            .query_map(params![employee_id], |row| {
                Ok(Salary {
                    salary_id: row.get(0)?,
                    employee_id: row.get(1)?,
                    amount: row.get(2)?,
                    from_date: row.get(3)?,
                    to_date: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(salaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::month_bounds;
    use crate::repository::employee_repository::EmployeeRepository;
    use crate::repository::sqlite::sqlite_employee_repo::SqliteEmployeeRepository;
    use crate::repository::sqlite::tests::{new_employee, test_connection};
    use chrono::NaiveDate;

    fn salary(employee_id: i64, amount: f64, year: i32, month: u32) -> NewSalary {
        NewSalary {
            employee_id,
            amount,
            period: month_bounds(year, month).unwrap(),
        }
    }

    #[test]
    fn test_insert_salary_for_month() -> Result<(), PersonnelError> {
        let (_manager, connection) = test_connection()?;
        let employee_id =
            SqliteEmployeeRepository::new(connection.clone()).insert(&new_employee("Анна", "Смирнова"))?;
        let repo = SqliteSalaryRepository::new(connection);

        let id = repo.insert(&salary(employee_id, 1000.0, 2025, 2))?;

        let salaries = repo.find_by_employee(employee_id)?;
        assert_eq!(salaries.len(), 1);
        let stored = &salaries[0];
        assert_eq!(stored.salary_id, id);
        assert_eq!(stored.employee_id, employee_id);
        assert!((stored.amount - 1000.0).abs() < f64::EPSILON);
        assert_eq!(stored.from_date, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert_eq!(stored.to_date, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
        Ok(())
    }

    #[test]
    fn test_salaries_latest_month_first() -> Result<(), PersonnelError> {
        let (_manager, connection) = test_connection()?;
        let employee_id =
            SqliteEmployeeRepository::new(connection.clone()).insert(&new_employee("Анна", "Смирнова"))?;
        let repo = SqliteSalaryRepository::new(connection);

        repo.insert(&salary(employee_id, 900.0, 2024, 11))?;
        repo.insert(&salary(employee_id, 1100.0, 2025, 3))?;
        repo.insert(&salary(employee_id, 1000.0, 2025, 1))?;

        let months: Vec<NaiveDate> = repo
            .find_by_employee(employee_id)?
            .iter()
            .map(|s| s.from_date)
            .collect();
        assert_eq!(
            months,
            vec![
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_overlapping_period_is_refused() -> Result<(), PersonnelError> {
        let (_manager, connection) = test_connection()?;
        let employees = SqliteEmployeeRepository::new(connection.clone());
        let anna = employees.insert(&new_employee("Анна", "Смирнова"))?;
        let oleg = employees.insert(&new_employee("Олег", "Кузнецов"))?;
        let repo = SqliteSalaryRepository::new(connection);

        repo.insert(&salary(anna, 1000.0, 2025, 2))?;

        match repo.insert(&salary(anna, 1200.0, 2025, 2)) {
            Err(PersonnelError::SalaryPeriodTaken { employee_id, month }) => {
                assert_eq!(employee_id, anna);
                assert_eq!(month, "2025-02");
            }
            other => panic!("Unexpected result {other:?}"),
        }
        repo.insert(&salary(anna, 1000.0, 2025, 3))?;
        repo.insert(&salary(oleg, 1000.0, 2025, 2))?;
        assert_eq!(repo.find_by_employee(anna)?.len(), 2);
        Ok(())
    }

    #[test]
    fn test_unique_month_index_maps_to_period_taken() -> Result<(), PersonnelError> {
        let (_manager, connection) = test_connection()?;
        let anna = SqliteEmployeeRepository::new(connection.clone())
            .insert(&new_employee("Анна", "Смирнова"))?;
        // A row with a deviating end date escapes the range check, not the index
        connection.lock().unwrap().execute(
            "INSERT INTO Salary (employee_id, amount, from_date, to_date) VALUES (?1, 1.0, '2025-02-01', '2025-01-31')",
            params![anna],
        )?;
        let repo = SqliteSalaryRepository::new(connection);

        assert!(matches!(
            repo.insert(&salary(anna, 1000.0, 2025, 2)),
            Err(PersonnelError::SalaryPeriodTaken { .. })
        ));
        assert_eq!(repo.find_by_employee(anna)?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_salary_for_unknown_employee_is_rejected() -> Result<(), PersonnelError> {
        let (_manager, connection) = test_connection()?;
        let repo = SqliteSalaryRepository::new(connection);
        assert!(repo.insert(&salary(77, 1000.0, 2025, 2)).is_err());
        Ok(())
    }
}
