use crate::error::PersonnelError;
use crate::types::{Department, Position};

/// Positions and departments, the reference data employees point to.
pub trait ReferenceRepository: Send + Sync {
    /// All positions ordered by id
    fn find_positions(&self) -> Result<Vec<Position>, PersonnelError>;

    /// All departments ordered by id
    fn find_departments(&self) -> Result<Vec<Department>, PersonnelError>;

    /// Inserts the position unless one with the same title exists.
    /// Returns `true` if a row was added.
    fn add_position_if_missing(&self, title: &str) -> Result<bool, PersonnelError>;

    /// Inserts the department unless one with the same name exists.
    /// Returns `true` if a row was added.
    fn add_department_if_missing(&self, name: &str) -> Result<bool, PersonnelError>;
}
