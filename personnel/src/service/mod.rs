pub mod employee_service;
pub mod reference_service;
pub mod salary_service;
pub mod vacation_service;
