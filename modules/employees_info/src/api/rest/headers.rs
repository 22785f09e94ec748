use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Headers every employee endpoint requires, checked for presence only.
///
/// This is the narrow counterpart of the config-driven gate at the server
/// boundary: the set is fixed in code, and a missing header fails closed with
/// a 400 naming it. Prohibition rules are not evaluated here.
pub const REQUIRED_HEADERS: &[&str] = &["uuid", "accept"];

pub async fn require_employee_headers(req: Request, next: Next) -> Response {
    for name in REQUIRED_HEADERS {
        if !req.headers().contains_key(*name) {
            return (
                StatusCode::BAD_REQUEST,
                format!("Missing required header: {name}"),
            )
                .into_response();
        }
    }
    next.run(req).await
}
