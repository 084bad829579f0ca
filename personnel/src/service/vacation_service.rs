use crate::error::PersonnelError;
use crate::repository::vacation_repository::VacationRepository;
use crate::types::NewVacation;
use log::info;
use std::sync::Arc;

#[allow(clippy::module_name_repetitions)]
pub struct VacationService {
    repo: Arc<dyn VacationRepository>,
}

impl VacationService {
    pub fn new(repo: Arc<dyn VacationRepository>) -> Self {
        Self { repo }
    }

    /// Stores the vacation as given and returns the new id.
    ///
    /// # Errors
    /// Returns a `PersonnelError` if the insert is rejected.
    pub fn add_vacation(&self, vacation: &NewVacation) -> Result<i64, PersonnelError> {
        let id = self.repo.insert(vacation)?;
        info!(
            "Added vacation {id} for employee {}, {} to {}",
            vacation.employee_id, vacation.start_date, vacation.end_date
        );
        Ok(id)
    }
}
