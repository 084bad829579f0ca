//! Monthly salaries. A salary always covers one whole calendar month: the caller names the
//! month, the service works out the first and last day.
use crate::date::month_bounds;
use crate::error::PersonnelError;
use crate::repository::salary_repository::SalaryRepository;
use crate::types::{NewSalary, YearMonth};
use log::{info, warn};
use std::sync::Arc;

#[allow(clippy::module_name_repetitions)]
pub struct SalaryService {
    repo: Arc<dyn SalaryRepository>,
}

impl SalaryService {
    pub fn new(repo: Arc<dyn SalaryRepository>) -> Self {
        Self { repo }
    }

    /// Records `amount` as the salary of the employee for the given month.
    ///
    /// # Returns
    ///
    /// The id of the new salary row.
    ///
    /// # Errors
    ///
    /// * `PersonnelError::BadInput` if the month is not a valid calendar month.
    /// * `PersonnelError::SalaryPeriodTaken` if the employee already has a salary overlapping
    ///   the month. Nothing is written in that case.
    /// * `PersonnelError::Sql` if the insert is rejected, i.e. for an unknown employee.
    pub fn add_monthly_salary(
        &self,
        employee_id: i64,
        amount: f64,
        month: YearMonth,
    ) -> Result<i64, PersonnelError> {
        let period = month_bounds(month.year, month.month)?;

        let id = self
            .repo
            .insert(&NewSalary {
                employee_id,
                amount,
                period,
            })
            .inspect_err(|e| {
                if let PersonnelError::SalaryPeriodTaken { .. } = e {
                    warn!("{e}");
                }
            })?;
        info!(
            "Added salary {id} of {amount} for employee {employee_id}, {} to {}",
            period.first_day, period.last_day
        );
        Ok(id)
    }
}
