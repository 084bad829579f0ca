//! This module provides `EmployeeService`, the service responsible for listing, adding,
//! showing and deleting employees.
//!
//! The detail view needs the employee together with the salary and vacation history, so the
//! service is composed of the employee, salary and vacation repositories, all bound to the
//! same connection.
use crate::error::PersonnelError;
use crate::repository::employee_repository::EmployeeRepository;
use crate::repository::salary_repository::SalaryRepository;
use crate::repository::vacation_repository::VacationRepository;
use crate::types::{CascadeDeletion, EmployeeRecord, EmployeeSummary, NewEmployee};
use log::info;
use std::sync::Arc;

#[allow(clippy::module_name_repetitions)]
pub struct EmployeeService {
    employees: Arc<dyn EmployeeRepository>,
    salaries: Arc<dyn SalaryRepository>,
    vacations: Arc<dyn VacationRepository>,
}

impl EmployeeService {
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        salaries: Arc<dyn SalaryRepository>,
        vacations: Arc<dyn VacationRepository>,
    ) -> Self {
        Self {
            employees,
            salaries,
            vacations,
        }
    }

    /// All employees ordered by id, with position and department labels.
    ///
    /// # Errors
    /// Returns a `PersonnelError` if the query fails.
    pub fn list_employees(&self) -> Result<Vec<EmployeeSummary>, PersonnelError> {
        self.employees.find_all()
    }

    /// Stores a new employee and returns the generated id.
    ///
    /// # Errors
    /// Returns a `PersonnelError` if the database rejects the row.
    pub fn add_employee(&self, employee: &NewEmployee) -> Result<i64, PersonnelError> {
        let id = self.employees.insert(employee)?;
        info!(
            "Added employee {id}: {} {}",
            employee.first_name, employee.last_name
        );
        Ok(id)
    }

    /// Retrieves an employee with the salaries (latest month first) and the vacations
    /// (latest start first).
    ///
    /// # Returns
    ///
    /// `Ok(None)` if there is no such employee, in which case the salary and vacation
    /// tables are not queried.
    ///
    /// # Errors
    /// Returns a `PersonnelError` if any of the queries fail.
    pub fn employee_record(
        &self,
        employee_id: i64,
    ) -> Result<Option<EmployeeRecord>, PersonnelError> {
        let Some(employee) = self.employees.find_by_id(employee_id)? else {
            return Ok(None);
        };
        let salaries = self.salaries.find_by_employee(employee_id)?;
        let vacations = self.vacations.find_by_employee(employee_id)?;
        Ok(Some(EmployeeRecord {
            employee,
            salaries,
            vacations,
        }))
    }

    /// Deletes the employee with all salaries and vacations in one go.
    ///
    /// # Errors
    /// Returns a `PersonnelError` if the deletion fails, nothing is deleted in that case.
    pub fn delete_employee(&self, employee_id: i64) -> Result<CascadeDeletion, PersonnelError> {
        let deletion = self.employees.delete_cascade(employee_id)?;
        info!(
            "Deleted employee {employee_id} with {} salaries and {} vacations",
            deletion.salaries, deletion.vacations
        );
        Ok(deletion)
    }
}
