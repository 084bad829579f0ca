//! Positions and departments. Read-only as far as the web pages are concerned, they are
//! seeded from the `[reference]` section of the configuration file.
use crate::config::ReferenceData;
use crate::error::PersonnelError;
use crate::repository::reference_repository::ReferenceRepository;
use crate::types::{Department, Position};
use log::info;
use std::sync::Arc;

#[allow(clippy::module_name_repetitions)]
pub struct ReferenceService {
    repo: Arc<dyn ReferenceRepository>,
}

impl ReferenceService {
    pub fn new(repo: Arc<dyn ReferenceRepository>) -> Self {
        Self { repo }
    }

    /// Positions and departments, both ordered by id, for the selection lists of the
    /// add-employee form.
    ///
    /// # Errors
    /// Returns a `PersonnelError` if any of the queries fail.
    pub fn positions_and_departments(
        &self,
    ) -> Result<(Vec<Position>, Vec<Department>), PersonnelError> {
        Ok((self.repo.find_positions()?, self.repo.find_departments()?))
    }

    /// Adds the configured positions and departments not yet present.
    ///
    /// # Returns
    /// The number of rows added.
    ///
    /// # Errors
    /// Returns a `PersonnelError` if an insert fails.
    pub fn seed(&self, reference: &ReferenceData) -> Result<usize, PersonnelError> {
        let mut added = 0;
        for title in reference.positions.iter().filter(|t| !t.trim().is_empty()) {
            if self.repo.add_position_if_missing(title.trim())? {
                added += 1;
            }
        }
        for name in reference.departments.iter().filter(|n| !n.trim().is_empty()) {
            if self.repo.add_department_if_missing(name.trim())? {
                added += 1;
            }
        }
        if added > 0 {
            info!("Seeded {added} positions and departments");
        }
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{mock, predicate::eq};

    mock! {
        pub ReferenceRepo {}

        impl ReferenceRepository for ReferenceRepo {
            fn find_positions(&self) -> Result<Vec<Position>, PersonnelError>;
            fn find_departments(&self) -> Result<Vec<Department>, PersonnelError>;
            fn add_position_if_missing(&self, title: &str) -> Result<bool, PersonnelError>;
            fn add_department_if_missing(&self, name: &str) -> Result<bool, PersonnelError>;
        }
    }

    #[test]
    fn test_seed_counts_new_rows_and_skips_blanks() {
        let mut repo = MockReferenceRepo::new();
        repo.expect_add_position_if_missing()
            .with(eq("Инженер"))
            .times(1)
            .returning(|_| Ok(true));
        repo.expect_add_position_if_missing()
            .with(eq("Бухгалтер"))
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_add_department_if_missing()
            .with(eq("Финансы"))
            .times(1)
            .returning(|_| Ok(true));

        let reference = ReferenceData {
            positions: vec![" Инженер ".into(), "Бухгалтер".into(), "  ".into()],
            departments: vec!["Финансы".into()],
        };
        let added = ReferenceService::new(Arc::new(repo))
            .seed(&reference)
            .unwrap();
        assert_eq!(added, 2);
    }
}
