//! Request models for the three input forms. Each form is checked and turned into the
//! corresponding domain value before anything reaches the database; a failure carries the
//! message shown to the user.
use chrono::NaiveDate;
use personnel::date::{parse_date, parse_year_month};
use personnel::types::{NewEmployee, NewVacation, YearMonth};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("Заполните все поля!")]
    MissingFields,
    #[error("Заполните даты!")]
    MissingDates,
    #[error("Укажите имя и фамилию!")]
    MissingName,
    /// Carries the field name, never the submitted text
    #[error("Некорректная дата: {0}")]
    InvalidDate(&'static str),
    #[error("Некорректный месяц!")]
    InvalidMonth,
    #[error("Сумма должна быть положительным числом!")]
    InvalidAmount,
    #[error("Некорректный выбор: {0}")]
    InvalidReference(&'static str),
    #[error("Дата окончания отпуска раньше даты начала!")]
    VacationEndsBeforeStart,
}

#[derive(Deserialize, Debug, Default)]
pub struct EmployeeForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub hire_date: Option<String>,
    pub position_id: Option<String>,
    pub department_id: Option<String>,
}

impl EmployeeForm {
    /// # Errors
    /// Returns a `FormError` if a name is blank, a date does not parse or a selection is
    /// not a number.
    pub fn validate(self) -> Result<NewEmployee, FormError> {
        let first_name = non_blank(self.first_name).ok_or(FormError::MissingName)?;
        let last_name = non_blank(self.last_name).ok_or(FormError::MissingName)?;

        Ok(NewEmployee {
            first_name,
            last_name,
            birth_date: optional_date(self.birth_date, "дата рождения")?,
            phone: non_blank(self.phone),
            email: non_blank(self.email),
            hire_date: optional_date(self.hire_date, "дата приёма")?,
            position_id: optional_id(self.position_id, "должность")?,
            department_id: optional_id(self.department_id, "отдел")?,
        })
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct SalaryForm {
    pub amount: Option<String>,
    /// `YYYY-MM`
    pub salary_month: Option<String>,
}

impl SalaryForm {
    /// # Errors
    /// Returns a `FormError` if a field is blank, the amount is not a positive number or the
    /// month is not on the form `YYYY-MM`.
    pub fn validate(self) -> Result<(f64, YearMonth), FormError> {
        let (Some(amount), Some(month)) = (non_blank(self.amount), non_blank(self.salary_month))
        else {
            return Err(FormError::MissingFields);
        };

        let amount = amount
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a > 0.0)
            .ok_or(FormError::InvalidAmount)?;
        let month = parse_year_month(&month).map_err(|_| FormError::InvalidMonth)?;

        Ok((amount, month))
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct VacationForm {
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

impl VacationForm {
    /// # Errors
    /// Returns a `FormError` if a date is missing or invalid, or the vacation would end
    /// before it starts.
    pub fn validate(self, employee_id: i64) -> Result<NewVacation, FormError> {
        let (Some(from), Some(to)) = (non_blank(self.from_date), non_blank(self.to_date)) else {
            return Err(FormError::MissingDates);
        };
        let start_date = date(&from, "начало отпуска")?;
        let end_date = date(&to, "окончание отпуска")?;
        if end_date < start_date {
            return Err(FormError::VacationEndsBeforeStart);
        }

        Ok(NewVacation {
            employee_id,
            start_date,
            end_date,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn date(value: &str, field: &'static str) -> Result<NaiveDate, FormError> {
    parse_date(value).map_err(|_| FormError::InvalidDate(field))
}

fn optional_date(
    value: Option<String>,
    field: &'static str,
) -> Result<Option<NaiveDate>, FormError> {
    non_blank(value).map(|v| date(&v, field)).transpose()
}

fn optional_id(value: Option<String>, field: &'static str) -> Result<Option<i64>, FormError> {
    non_blank(value)
        .map(|v| {
            v.parse::<i64>()
                .map_err(|_| FormError::InvalidReference(field))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_employee_blank_optionals_become_none() {
        let form = EmployeeForm {
            first_name: some(" Иван "),
            last_name: some("Иванов"),
            birth_date: some(""),
            phone: some("   "),
            email: None,
            hire_date: some("2021-03-15"),
            position_id: some(""),
            department_id: some("2"),
        };
        let employee = form.validate().unwrap();
        assert_eq!(employee.first_name, "Иван");
        assert_eq!(employee.birth_date, None);
        assert_eq!(employee.phone, None);
        assert_eq!(employee.email, None);
        assert_eq!(employee.hire_date, NaiveDate::from_ymd_opt(2021, 3, 15));
        assert_eq!(employee.position_id, None);
        assert_eq!(employee.department_id, Some(2));
    }

    #[test]
    fn test_employee_needs_both_names() {
        let form = EmployeeForm {
            first_name: some("Иван"),
            last_name: some(" "),
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap_err(), FormError::MissingName);
    }

    #[test]
    fn test_employee_rejects_malformed_values() {
        let form = EmployeeForm {
            first_name: some("Иван"),
            last_name: some("Иванов"),
            birth_date: some("12.04.1990"),
            ..Default::default()
        };
        assert_eq!(
            form.validate().unwrap_err(),
            FormError::InvalidDate("дата рождения")
        );

        let form = EmployeeForm {
            first_name: some("Иван"),
            last_name: some("Иванов"),
            position_id: some("engineer"),
            ..Default::default()
        };
        assert_eq!(
            form.validate().unwrap_err(),
            FormError::InvalidReference("должность")
        );
    }

    #[test]
    fn test_rejected_input_is_not_repeated_in_the_message() {
        let pasted = "x".repeat(10_000);
        let form = EmployeeForm {
            first_name: some("Иван"),
            last_name: some("Иванов"),
            hire_date: Some(pasted.clone()),
            ..Default::default()
        };
        let message = form.validate().unwrap_err().to_string();
        assert_eq!(message, "Некорректная дата: дата приёма");

        let form = SalaryForm {
            amount: some("1000"),
            salary_month: Some(pasted.clone()),
        };
        assert!(!form.validate().unwrap_err().to_string().contains(&pasted));

        let form = EmployeeForm {
            first_name: some("Иван"),
            last_name: some("Иванов"),
            department_id: Some(pasted.clone()),
            ..Default::default()
        };
        assert!(form.validate().unwrap_err().to_string().len() < 100);
    }

    #[test]
    fn test_salary_requires_both_fields() {
        let form = SalaryForm {
            amount: some("1000"),
            salary_month: None,
        };
        assert_eq!(form.validate().unwrap_err(), FormError::MissingFields);

        let form = SalaryForm {
            amount: some(""),
            salary_month: some("2025-02"),
        };
        assert_eq!(form.validate().unwrap_err(), FormError::MissingFields);
    }

    #[test]
    fn test_salary_amount_must_be_positive() {
        for amount in ["0", "-5", "abc", "NaN", "inf"] {
            let form = SalaryForm {
                amount: some(amount),
                salary_month: some("2025-02"),
            };
            assert_eq!(
                form.validate().unwrap_err(),
                FormError::InvalidAmount,
                "amount {amount}"
            );
        }
    }

    #[test]
    fn test_salary_accepts_decimal_comma() {
        let form = SalaryForm {
            amount: some("1500,50"),
            salary_month: some("2025-02"),
        };
        let (amount, month) = form.validate().unwrap();
        assert!((amount - 1500.5).abs() < f64::EPSILON);
        assert_eq!(
            month,
            YearMonth {
                year: 2025,
                month: 2
            }
        );
    }

    #[test]
    fn test_salary_month_must_be_a_calendar_month() {
        let form = SalaryForm {
            amount: some("1000"),
            salary_month: some("2025-13"),
        };
        assert_eq!(form.validate().unwrap_err(), FormError::InvalidMonth);
    }

    #[test]
    fn test_vacation_requires_both_dates() {
        let form = VacationForm {
            from_date: some("2025-07-01"),
            to_date: None,
        };
        assert_eq!(form.validate(1).unwrap_err(), FormError::MissingDates);
    }

    #[test]
    fn test_vacation_must_not_end_before_it_starts() {
        let form = VacationForm {
            from_date: some("2025-07-14"),
            to_date: some("2025-07-01"),
        };
        assert_eq!(
            form.validate(1).unwrap_err(),
            FormError::VacationEndsBeforeStart
        );
    }

    #[test]
    fn test_single_day_vacation_is_fine() {
        let form = VacationForm {
            from_date: some("2025-07-14"),
            to_date: some("2025-07-14"),
        };
        let vacation = form.validate(9).unwrap();
        assert_eq!(vacation.employee_id, 9);
        assert_eq!(vacation.start_date, vacation.end_date);
    }
}
