use crate::error::PersonnelError;
use crate::types::{CascadeDeletion, EmployeeDetail, EmployeeSummary, NewEmployee};

pub trait EmployeeRepository: Send + Sync {
    ///
    /// Retrieves every employee, together with the title of the position and the name of the
    /// department, ordered by employee id.
    ///
    /// Employees without a position or a department are included, their labels are `None`.
    ///
    /// # Errors
    /// * Returns a `PersonnelError` if the query fails.
    fn find_all(&self) -> Result<Vec<EmployeeSummary>, PersonnelError>;

    ///
    /// Inserts a new employee.
    ///
    /// # Returns
    /// * `Ok(i64)` - The id generated for the new employee.
    ///
    /// # Errors
    /// * Returns a `PersonnelError` if the row is rejected, i.e. an unknown position or
    ///   department id violates a foreign key.
    fn insert(&self, employee: &NewEmployee) -> Result<i64, PersonnelError>;

    ///
    /// Finds a single employee, including position and department labels.
    ///
    /// # Returns
    /// * `Ok(None)` - If there is no employee with the given id.
    ///
    /// # Errors
    /// * Returns a `PersonnelError` if the query fails.
    fn find_by_id(&self, employee_id: i64) -> Result<Option<EmployeeDetail>, PersonnelError>;

    ///
    /// Deletes the salaries, the vacations and finally the employee itself, in that order,
    /// within a single transaction.
    ///
    /// # Errors
    /// * Returns a `PersonnelError` if any of the statements fail, in which case nothing is deleted.
    fn delete_cascade(&self, employee_id: i64) -> Result<CascadeDeletion, PersonnelError>;
}
