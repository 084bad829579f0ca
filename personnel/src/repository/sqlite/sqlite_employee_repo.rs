use crate::error::PersonnelError;
use crate::repository::employee_repository::EmployeeRepository;
use crate::repository::SharedSqliteConnection;
use crate::types::{CascadeDeletion, EmployeeDetail, EmployeeSummary, NewEmployee};
use log::debug;
use rusqlite::{named_params, params, OptionalExtension};

pub struct SqliteEmployeeRepository {
    connection: SharedSqliteConnection,
}

impl SqliteEmployeeRepository {
    pub fn new(connection: SharedSqliteConnection) -> Self {
        Self { connection }
    }
}

/// SQL statement to create the `Employee` table.
const CREATE_EMPLOYEE_TABLE_SQL: &str = r"
    CREATE TABLE IF NOT EXISTS Employee (
        employee_id integer primary key not null,
        first_name varchar(128) not null,
        last_name varchar(128) not null,
        birth_date date,
        phone varchar(64),
        email varchar(256),
        hire_date date,
        position_id integer,
        department_id integer,
        FOREIGN KEY (position_id) REFERENCES Position(position_id),
        FOREIGN KEY (department_id) REFERENCES Department(department_id)
    );
";

/// Creates the `Employee` table in the database.
pub(crate) fn create_employee_table(
    connection: &SharedSqliteConnection,
) -> Result<(), PersonnelError> {
    let conn = connection.lock().map_err(|_| PersonnelError::LockPoisoned)?;
    conn.execute(CREATE_EMPLOYEE_TABLE_SQL, [])?;
    Ok(())
}

impl EmployeeRepository for SqliteEmployeeRepository {
    fn find_all(&self) -> Result<Vec<EmployeeSummary>, PersonnelError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| PersonnelError::LockPoisoned)?;
        let mut stmt = conn.prepare(
            r"
            SELECT e.employee_id, e.first_name, e.last_name, e.phone,
                   p.title AS position_name,
                   d.name AS department_name
            FROM Employee e
            LEFT JOIN Position p ON e.position_id = p.position_id
            LEFT JOIN Department d ON e.department_id = d.department_id
            ORDER BY e.employee_id
        ",
        )?;
        let employees = stmt
            .query_map([], |row| {
                Ok(EmployeeSummary {
                    employee_id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                    phone: row.get(3)?,
                    position_name: row.get(4)?,
                    department_name: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Found {} employees", employees.len());
        Ok(employees)
    }

    fn insert(&self, employee: &NewEmployee) -> Result<i64, PersonnelError> {
        debug!("Adding {:?} to DBMS", &employee);
        let conn = self
            .connection
            .lock()
            .map_err(|_| PersonnelError::LockPoisoned)?;
        let id = conn
            .query_row(
                r"INSERT INTO Employee (
                    first_name, last_name, birth_date, phone, email,
                    hire_date, position_id, department_id
                ) VALUES (
                    :first_name, :last_name, :birth_date, :phone, :email,
                    :hire_date, :position_id, :department_id
                )
                RETURNING employee_id",
                named_params! {
                    ":first_name": employee.first_name,
                    ":last_name": employee.last_name,
                    ":birth_date": employee.birth_date,
                    ":phone": employee.phone,
                    ":email": employee.email,
                    ":hire_date": employee.hire_date,
                    ":position_id": employee.position_id,
                    ":department_id": employee.department_id,
                },
                |row| row.get(0),
            )
            .map_err(|e| PersonnelError::Sql(format!("Unable to insert into Employee: {e}")))?;
        Ok(id)
    }

    fn find_by_id(&self, employee_id: i64) -> Result<Option<EmployeeDetail>, PersonnelError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| PersonnelError::LockPoisoned)?;
        let mut stmt = conn.prepare(
            r"
            SELECT e.employee_id, e.first_name, e.last_name, e.birth_date, e.hire_date,
                   e.phone, e.email, e.position_id, e.department_id,
                   p.title AS position_name,
                   d.name AS department_name
            FROM Employee e
            LEFT JOIN Position p ON e.position_id = p.position_id
            LEFT JOIN Department d ON e.department_id = d.department_id
            WHERE e.employee_id = ?1
        ",
        )?;
        let employee = stmt
            .query_row(params![employee_id], |row| {
                Ok(EmployeeDetail {
                    employee_id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                    birth_date: row.get(3)?,
                    hire_date: row.get(4)?,
                    phone: row.get(5)?,
                    email: row.get(6)?,
                    position_id: row.get(7)?,
                    department_id: row.get(8)?,
                    position_name: row.get(9)?,
                    department_name: row.get(10)?,
                })
            })
            .optional()?;
        Ok(employee)
    }

    fn delete_cascade(&self, employee_id: i64) -> Result<CascadeDeletion, PersonnelError> {
        let mut conn = self
            .connection
            .lock()
            .map_err(|_| PersonnelError::LockPoisoned)?;
        let tx = conn.transaction()?;

        let salaries = tx.execute(
            "DELETE FROM Salary WHERE employee_id = ?1",
            params![employee_id],
        )?;
        let vacations = tx.execute(
            "DELETE FROM Vacation WHERE employee_id = ?1",
            params![employee_id],
        )?;
        let employees = tx.execute(
            "DELETE FROM Employee WHERE employee_id = ?1",
            params![employee_id],
        )?;
        tx.commit()?;

        debug!(
            "Deleted employee {employee_id}: {salaries} salaries, {vacations} vacations, {employees} employee rows"
        );
        Ok(CascadeDeletion {
            salaries,
            vacations,
            employees,
        })
    }
}
