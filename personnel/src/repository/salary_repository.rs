use crate::error::PersonnelError;
use crate::types::{NewSalary, Salary};

pub trait SalaryRepository: Send + Sync {
    ///
    /// Inserts a salary covering the month range held by `salary`, unless the employee
    /// already has a salary overlapping that range. The check and the insert are atomic.
    ///
    /// # Returns
    /// * `Ok(i64)` - The generated salary id.
    ///
    /// # Errors
    /// * `PersonnelError::SalaryPeriodTaken` if an overlapping salary exists, nothing is written.
    /// * Returns a `PersonnelError` if the insert fails, i.e. the employee does not exist.
    fn insert(&self, salary: &NewSalary) -> Result<i64, PersonnelError>;

    ///
    /// Retrieves the salaries of an employee, most recent month first.
    ///
    /// # Errors
    /// * Returns a `PersonnelError` if the query fails.
    fn find_by_employee(&self, employee_id: i64) -> Result<Vec<Salary>, PersonnelError>;
}
