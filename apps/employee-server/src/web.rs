use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, response::Json, routing::get, Router};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;

use employees_info::api::rest::routes as employee_routes;
use employees_info::domain::service::{Service, ServiceConfig};
use employees_info::infra::storage::sea_orm_repo::{
    SeaOrmEmployeesRepository, SeaOrmJobPositionRepository, SeaOrmSexRepository,
};
use runtime::AppConfig;

use crate::header_gate;
use crate::request_id::{self, MakeReqId};

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Assemble the application router: employee API under `/api`, health
/// endpoint outside the gate, and the ingress middleware stack.
pub fn build_router(config: &AppConfig, db: DatabaseConnection) -> Router {
    let service = Arc::new(Service::new(
        Arc::new(SeaOrmEmployeesRepository::new(db.clone())),
        Arc::new(SeaOrmSexRepository::new(db.clone())),
        Arc::new(SeaOrmJobPositionRepository::new(db)),
        ServiceConfig::default(),
    ));

    let header_rules = Arc::new(config.headers.clone());

    let mut router = Router::new()
        .route("/healthz", get(health_check))
        .nest("/api", employee_routes::router(service))
        .layer(middleware::from_fn_with_state(
            header_rules,
            header_gate::enforce_headers,
        ))
        .layer(request_id::create_trace_layer())
        .layer(PropagateRequestIdLayer::new(request_id::header()))
        .layer(SetRequestIdLayer::new(request_id::header(), MakeReqId));

    if config.server.timeout_sec > 0 {
        router = router.layer(TimeoutLayer::new(Duration::from_secs(
            config.server.timeout_sec,
        )));
    }

    router
}
