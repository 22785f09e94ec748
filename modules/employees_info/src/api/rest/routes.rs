use std::sync::Arc;

use axum::{middleware, routing::get, Extension, Router};

use crate::api::rest::{handlers, headers};
use crate::domain::service::Service;

/// Build the employee API router.
///
/// The per-endpoint header requirement applies only to matched routes
/// (`route_layer`), so unknown paths still fall through to a plain 404.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route(
            "/employees",
            get(handlers::list_employees).post(handlers::create_employees),
        )
        .route("/employees/search", get(handlers::search_employees))
        .route(
            "/employees/{id}",
            get(handlers::get_employee)
                .put(handlers::update_employee)
                .delete(handlers::delete_employee),
        )
        .route_layer(middleware::from_fn(headers::require_employee_headers))
        .layer(Extension(service))
}
