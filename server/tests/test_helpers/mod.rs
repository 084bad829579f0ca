use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use personnel::config::{AppConfiguration, ReferenceData};
use personnel::ApplicationRuntimeBuilder;
use personnel_server::flash::Flash;
use personnel_server::SharedRuntime;
use std::sync::Arc;
use tower::ServiceExt;

/// Creates the application on top of an in-memory database
pub fn create_test_app() -> (SharedRuntime, Router) {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = AppConfiguration {
        reference: ReferenceData {
            positions: vec!["Инженер".to_string()],
            departments: vec!["Финансы".to_string()],
        },
        ..Default::default()
    };
    let runtime = Arc::new(
        ApplicationRuntimeBuilder::new()
            .with_config(config)
            .use_in_memory_db()
            .build()
            .expect("Failed to create test runtime"),
    );
    let app = personnel_server::app(runtime.clone());
    (runtime, app)
}

pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut request = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(COOKIE, cookie);
    }
    app.clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(app: &Router, uri: &str, form: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Asserts a `303 See Other` to `location` and returns the `name=value` part of the
/// status message cookie that came with it
pub fn assert_redirect(response: &Response, location: &str) -> String {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], location);
    let set_cookie = response.headers()[SET_COOKIE].to_str().unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

/// Decodes the status message from a cookie pair returned by [`assert_redirect`]
pub fn flash_of(cookie: &str) -> Flash {
    let mut headers = axum::http::HeaderMap::new();
    headers.insert(COOKIE, cookie.parse().unwrap());
    Flash::from_headers(&headers).expect("cookie should carry a status message")
}
