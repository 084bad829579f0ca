//! Route handlers. Database work runs on the blocking thread pool through [`blocking`],
//! each call opening its own connection.
use std::sync::Arc;

use axum::extract::{Form, Path, State};
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use log::{debug, warn};
use personnel::error::PersonnelError;
use personnel::ApplicationRuntime;

use crate::error::AppError;
use crate::flash::{self, Flash};
use crate::forms::{EmployeeForm, SalaryForm, VacationForm};
use crate::views;

pub type SharedRuntime = Arc<ApplicationRuntime>;

/// Runs `f` against the runtime on a worker thread where blocking is allowed.
async fn blocking<T, F>(runtime: &SharedRuntime, f: F) -> Result<T, AppError>
where
    F: FnOnce(&ApplicationRuntime) -> Result<T, PersonnelError> + Send + 'static,
    T: Send + 'static,
{
    let runtime = Arc::clone(runtime);
    Ok(tokio::task::spawn_blocking(move || f(&runtime)).await??)
}

/// Renders a page, clearing the status message if one was shown.
fn render(shown: Option<Flash>, html: String) -> Response {
    match shown {
        Some(_) => ([(SET_COOKIE, flash::clear_cookie())], Html(html)).into_response(),
        None => Html(html).into_response(),
    }
}

pub async fn list_employees(
    State(runtime): State<SharedRuntime>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let employees = blocking(&runtime, |rt| rt.employee_service()?.list_employees()).await?;
    debug!("Listing {} employees", employees.len());

    let shown = Flash::from_headers(&headers);
    let html = views::employee_list_page(&employees, shown.as_ref());
    Ok(render(shown, html))
}

pub async fn add_employee_form(
    State(runtime): State<SharedRuntime>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let (positions, departments) = blocking(&runtime, |rt| {
        rt.reference_service()?.positions_and_departments()
    })
    .await?;

    let shown = Flash::from_headers(&headers);
    let html = views::add_employee_page(&positions, &departments, shown.as_ref());
    Ok(render(shown, html))
}

pub async fn add_employee(
    State(runtime): State<SharedRuntime>,
    Form(form): Form<EmployeeForm>,
) -> Result<Response, AppError> {
    let employee = match form.validate() {
        Ok(employee) => employee,
        Err(e) => {
            warn!("Employee not added: {e}");
            return Ok(Flash::error(e.to_string()).redirect("/employee/add"));
        }
    };

    blocking(&runtime, move |rt| rt.employee_service()?.add_employee(&employee)).await?;
    Ok(Flash::success("Сотрудник добавлен!").redirect("/"))
}

pub async fn add_salary_form(Path(employee_id): Path<i64>, headers: HeaderMap) -> Response {
    let shown = Flash::from_headers(&headers);
    let html = views::add_salary_page(employee_id, shown.as_ref());
    render(shown, html)
}

pub async fn add_salary(
    State(runtime): State<SharedRuntime>,
    Path(employee_id): Path<i64>,
    Form(form): Form<SalaryForm>,
) -> Result<Response, AppError> {
    let form_location = format!("/employee/{employee_id}/salary/add");
    let (amount, month) = match form.validate() {
        Ok(valid) => valid,
        Err(e) => {
            warn!("Salary not added for employee {employee_id}: {e}");
            return Ok(Flash::error(e.to_string()).redirect(&form_location));
        }
    };

    let added = blocking(&runtime, move |rt| {
        match rt
            .salary_service()?
            .add_monthly_salary(employee_id, amount, month)
        {
            Ok(id) => Ok(Some(id)),
            Err(PersonnelError::SalaryPeriodTaken { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    })
    .await?;

    Ok(match added {
        Some(_) => Flash::success("Зарплата добавлена!").redirect(&format!("/employee/{employee_id}")),
        None => Flash::error("Зарплата за этот месяц уже добавлена!").redirect(&form_location),
    })
}

pub async fn add_vacation_form(Path(employee_id): Path<i64>, headers: HeaderMap) -> Response {
    let shown = Flash::from_headers(&headers);
    let html = views::add_vacation_page(employee_id, shown.as_ref());
    render(shown, html)
}

pub async fn add_vacation(
    State(runtime): State<SharedRuntime>,
    Path(employee_id): Path<i64>,
    Form(form): Form<VacationForm>,
) -> Result<Response, AppError> {
    let vacation = match form.validate(employee_id) {
        Ok(vacation) => vacation,
        Err(e) => {
            warn!("Vacation not added for employee {employee_id}: {e}");
            return Ok(Flash::error(e.to_string())
                .redirect(&format!("/employee/{employee_id}/vacation/add")));
        }
    };

    blocking(&runtime, move |rt| rt.vacation_service()?.add_vacation(&vacation)).await?;
    Ok(Flash::success("Отпуск добавлен!").redirect(&format!("/employee/{employee_id}")))
}

pub async fn show_employee(
    State(runtime): State<SharedRuntime>,
    Path(employee_id): Path<i64>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let record = blocking(&runtime, move |rt| {
        rt.employee_service()?.employee_record(employee_id)
    })
    .await?;

    let Some(record) = record else {
        debug!("No employee with id {employee_id}");
        return Ok(Flash::error("Сотрудник не найден!").redirect("/"));
    };

    let shown = Flash::from_headers(&headers);
    let html = views::employee_page(&record, shown.as_ref());
    Ok(render(shown, html))
}

pub async fn delete_employee(
    State(runtime): State<SharedRuntime>,
    Path(employee_id): Path<i64>,
) -> Result<Response, AppError> {
    blocking(&runtime, move |rt| rt.employee_service()?.delete_employee(employee_id)).await?;
    Ok(Flash::info("Сотрудник удалён!").redirect("/"))
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(views::not_found_page()))
}
