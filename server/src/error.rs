use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use log::error;
use personnel::error::PersonnelError;
use thiserror::Error;
use tokio::task::JoinError;

use crate::views;

/// Failures no page can recover from. They are logged and answered with a 500 page.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Personnel(#[from] PersonnelError),
    #[error("Blocking database task failed: {0}")]
    Join(#[from] JoinError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Request failed: {self}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(views::internal_error_page()),
        )
            .into_response()
    }
}
