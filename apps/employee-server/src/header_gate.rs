//! Config-driven header gate applied to `/api/*` requests.
//!
//! The rule store lives in the immutable `headers` section of the app
//! configuration: per API name, an ordered list of tokens where a bare name
//! means "required, non-blank" and a `-` prefix means "must be absent".
//! Evaluation stops at the first violation; violations are plain-text 400
//! responses naming the header.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use runtime::HeadersConfig;

/// Extract the API name from the request path.
///
/// Assumes the format `/{context}/{api}/...`: `/api/employees/abc` yields
/// `employees`. Paths with fewer segments yield an empty string.
fn extract_api_name(path: &str) -> &str {
    path.split('/').nth(2).unwrap_or("")
}

pub async fn enforce_headers(
    State(rules): State<Arc<HeadersConfig>>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_ascii_lowercase();
    if !path.starts_with("/api/") {
        return next.run(req).await;
    }

    // Unknown API name => no configured rule set => pass unconditionally.
    let Some(rule) = rules.rule_for(extract_api_name(&path)) else {
        return next.run(req).await;
    };

    for token in &rule.required {
        let prohibited = token.starts_with('-');
        let clean = token.strip_prefix('-').unwrap_or(token);

        if prohibited {
            if req.headers().contains_key(clean) {
                return (
                    StatusCode::BAD_REQUEST,
                    format!("Prohibited header: {clean}"),
                )
                    .into_response();
            }
        } else {
            let blank = req
                .headers()
                .get(clean)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.trim().is_empty())
                .unwrap_or(true);
            if blank {
                return (
                    StatusCode::BAD_REQUEST,
                    format!("Missing required header: {clean}"),
                )
                    .into_response();
            }
        }
    }

    next.run(req).await
}
