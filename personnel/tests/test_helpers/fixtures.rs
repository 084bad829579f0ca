use chrono::NaiveDate;
use personnel::types::{NewEmployee, NewVacation, YearMonth};

pub fn ivanov(position_id: Option<i64>, department_id: Option<i64>) -> NewEmployee {
    NewEmployee {
        first_name: "Иван".to_string(),
        last_name: "Иванов".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1990, 4, 12),
        phone: Some("+7 900 000-00-01".to_string()),
        email: Some("ivanov@example.com".to_string()),
        hire_date: NaiveDate::from_ymd_opt(2020, 9, 1),
        position_id,
        department_id,
    }
}

#[allow(dead_code)]
pub fn unassigned(first_name: &str, last_name: &str) -> NewEmployee {
    NewEmployee {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn vacation(employee_id: i64, start: (i32, u32, u32), end: (i32, u32, u32)) -> NewVacation {
    NewVacation {
        employee_id,
        start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
        end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
    }
}

#[allow(dead_code)]
pub fn month(year: i32, month: u32) -> YearMonth {
    YearMonth { year, month }
}
