//! HTTP surface of the employee records application: routes, form handling, status
//! messages and HTML pages.
use axum::routing::{get, post};
use axum::Router;

pub mod error;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod views;

pub use handlers::SharedRuntime;

/// Creates the router with every page of the application
pub fn app(runtime: SharedRuntime) -> Router {
    Router::new()
        .route("/", get(handlers::list_employees))
        .route(
            "/employee/add",
            get(handlers::add_employee_form).post(handlers::add_employee),
        )
        .route("/employee/{id}", get(handlers::show_employee))
        .route(
            "/employee/{id}/salary/add",
            get(handlers::add_salary_form).post(handlers::add_salary),
        )
        .route(
            "/employee/{id}/vacation/add",
            get(handlers::add_vacation_form).post(handlers::add_vacation),
        )
        .route("/delete/{id}", post(handlers::delete_employee))
        .fallback(handlers::not_found)
        .with_state(runtime)
}
