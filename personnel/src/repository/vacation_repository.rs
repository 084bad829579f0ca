use crate::error::PersonnelError;
use crate::types::{NewVacation, Vacation};

pub trait VacationRepository: Send + Sync {
    fn insert(&self, vacation: &NewVacation) -> Result<i64, PersonnelError>;

    /// Vacations of an employee ordered by start date, latest first
    fn find_by_employee(&self, employee_id: i64) -> Result<Vec<Vacation>, PersonnelError>;
}
