use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Read-only reference data: a job title
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct Position {
    pub position_id: i64,
    pub title: String,
}

/// Read-only reference data: an organisational unit
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct Department {
    pub department_id: i64,
    pub name: String,
}

/// One row of the employee listing, with the position and department labels
/// resolved through left joins.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct EmployeeSummary {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub position_name: Option<String>,
    pub department_name: Option<String>,
}

/// A complete employee record
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct EmployeeDetail {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub hire_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub position_id: Option<i64>,
    pub department_id: Option<i64>,
    pub position_name: Option<String>,
    pub department_name: Option<String>,
}

impl EmployeeDetail {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }
}

/// Data required to insert a new employee. Absent optional values are stored as NULL.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Default)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub position_id: Option<i64>,
    pub department_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Salary {
    pub salary_id: i64,
    pub employee_id: i64,
    pub amount: f64,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

/// A salary for one calendar month, before it has been stored
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NewSalary {
    pub employee_id: i64,
    pub amount: f64,
    pub period: MonthRange,
}

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct Vacation {
    pub vacation_id: i64,
    pub employee_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct NewVacation {
    pub employee_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A calendar month, i.e. the value of an HTML `<input type="month">`
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Copy)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

/// First and last calendar day of a month
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Copy)]
pub struct MonthRange {
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

/// Number of rows removed when an employee and everything referencing it is deleted
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Copy, Default)]
pub struct CascadeDeletion {
    pub salaries: usize,
    pub vacations: usize,
    pub employees: usize,
}

/// An employee together with the salary and vacation history shown on the detail page
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct EmployeeRecord {
    pub employee: EmployeeDetail,
    pub salaries: Vec<Salary>,
    pub vacations: Vec<Vacation>,
}
