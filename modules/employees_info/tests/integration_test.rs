use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;
use tower::ServiceExt;

use employees_info::api::rest::dto::{EmployeeDto, EmployeeRequest, EmployeesRequest};
use employees_info::contract::model::EmployeeDraft;
use employees_info::domain::error::DomainError;
use employees_info::domain::service::{Service, ServiceConfig};
use employees_info::infra::storage::entity::{job_position, sex};
use employees_info::infra::storage::migrations::Migrator;
use employees_info::infra::storage::sea_orm_repo::{
    SeaOrmEmployeesRepository, SeaOrmJobPositionRepository, SeaOrmSexRepository,
};

const SEX_ID: &str = "aaaaaaaa-0000-4000-8000-aaaaaaaaaaaa";
const JOB_ID: &str = "bbbbbbbb-0000-4000-8000-bbbbbbbbbbbb";

/// Create a fresh test database for each test
async fn create_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    // Catalog rows owned by the tests, independent of the seed data
    sex::ActiveModel {
        id_sex: Set(SEX_ID.to_string()),
        code: Set("M".to_string()),
        description: Set("Male".to_string()),
    }
    .insert(&db)
    .await
    .expect("Failed to insert sex catalog row");

    job_position::ActiveModel {
        id_job_position: Set(JOB_ID.to_string()),
        code: Set("DEV".to_string()),
        description: Set("Software Developer".to_string()),
    }
    .insert(&db)
    .await
    .expect("Failed to insert job position catalog row");

    db
}

/// Create a test domain service backed by the SeaORM repositories
async fn create_test_service() -> Arc<Service> {
    let db = create_test_db().await;
    Arc::new(Service::new(
        Arc::new(SeaOrmEmployeesRepository::new(db.clone())),
        Arc::new(SeaOrmSexRepository::new(db.clone())),
        Arc::new(SeaOrmJobPositionRepository::new(db)),
        ServiceConfig::default(),
    ))
}

async fn create_test_router() -> Router {
    employees_info::api::rest::routes::router(create_test_service().await)
}

fn draft(first_name: &str) -> EmployeeDraft {
    EmployeeDraft {
        id: None,
        first_name: Some(first_name.to_string()),
        middle_name: None,
        paternal_surname: Some("Santos".to_string()),
        maternal_surname: None,
        id_sex: Some(SEX_ID.to_string()),
        id_job_position: Some(JOB_ID.to_string()),
        birth_day: Some("15/05/1990".to_string()),
        status: 1,
    }
}

#[tokio::test]
async fn test_domain_service_crud() -> Result<()> {
    let service = create_test_service().await;

    // Create
    let created = service.create_many(vec![draft("Jorge")]).await?;
    assert_eq!(created.len(), 1);
    let id = created[0].id.clone();
    assert_eq!(id.len(), 36);
    assert_eq!(created[0].sex.code, "M");
    assert_eq!(created[0].job_position.code, "DEV");

    // Get
    let fetched = service.get_by_id(&id).await?;
    assert_eq!(fetched.first_name.as_deref(), Some("Jorge"));
    assert_eq!(fetched.birth_day.to_string(), "1990-05-15");

    // List
    let all = service.list_all().await?;
    assert_eq!(all.len(), 1);

    // Update: null first name leaves it unchanged, surname overwritten
    let mut patch = draft("ignored");
    patch.id = Some(id.clone());
    patch.first_name = None;
    patch.paternal_surname = Some("Lopez".to_string());
    patch.status = 0;

    let updated = service.update(&id, patch).await?;
    assert_eq!(updated.first_name.as_deref(), Some("Jorge"));
    assert_eq!(updated.paternal_surname.as_deref(), Some("Lopez"));
    assert_eq!(updated.status, 0);
    // ts is set at create and retained on update; compare against the
    // DB-loaded value to stay independent of driver timestamp precision.
    assert_eq!(updated.ts, fetched.ts);

    // Delete
    service.delete(&id).await?;
    assert!(matches!(
        service.get_by_id(&id).await,
        Err(DomainError::EmployeeNotFound { .. })
    ));

    Ok(())
}

#[tokio::test]
async fn test_batch_create_is_all_or_nothing() -> Result<()> {
    let service = create_test_service().await;

    let mut bad = draft("Maria");
    bad.id_sex = Some("99999999-9999-4999-8999-999999999999".to_string());

    let err = service
        .create_many(vec![draft("Jorge"), bad])
        .await
        .unwrap_err();
    match err {
        DomainError::SexNotFound { id } => {
            assert_eq!(id, "99999999-9999-4999-8999-999999999999")
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(service.list_all().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_update_reports_job_position_before_sex() -> Result<()> {
    let service = create_test_service().await;

    let created = service.create_many(vec![draft("Jorge")]).await?;
    let id = created[0].id.clone();

    let mut patch = draft("Jorge");
    patch.id = Some(id.clone());
    patch.id_sex = Some("99999999-9999-4999-8999-999999999999".to_string());
    patch.id_job_position = Some("88888888-8888-4888-8888-888888888888".to_string());

    let err = service.update(&id, patch).await.unwrap_err();
    assert!(matches!(err, DomainError::JobPositionNotFound { .. }));
    Ok(())
}

#[tokio::test]
async fn test_search_matches_substring_case_insensitive() -> Result<()> {
    let service = create_test_service().await;

    let mut maria = draft("Maria");
    maria.paternal_surname = Some("Lopez".to_string());
    service
        .create_many(vec![draft("Jorge"), maria])
        .await?;

    let hits = service.search_by_name("ore").await?;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].first_name.as_deref(), Some("Jorge"));

    // Match across the space-joined name parts
    let hits = service.search_by_name("jorge san").await?;
    assert_eq!(hits.len(), 1);

    let hits = service.search_by_name("nobody").await?;
    assert!(hits.is_empty());
    Ok(())
}

// --- HTTP round trips through the real router ---

fn request(method: &str, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("uuid", "test-correlation-id")
        .header("accept", "application/json");
    match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn create_body(first_name: &str) -> serde_json::Value {
    serde_json::to_value(EmployeesRequest {
        employees: vec![EmployeeRequest {
            first_name: Some(first_name.to_string()),
            id_sex: Some(SEX_ID.to_string()),
            id_job_position: Some(JOB_ID.to_string()),
            birth_day: Some("15/05/1990".to_string()),
            status: 1,
            ..Default::default()
        }],
    })
    .unwrap()
}

#[tokio::test]
async fn test_http_create_then_get_and_delete() {
    let app = create_test_router().await;

    let resp = app
        .clone()
        .oneshot(request("POST", "/employees", Some(create_body("Jorge"))))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created = body_json(resp).await;
    let dto: Vec<EmployeeDto> = serde_json::from_value(created.clone()).unwrap();
    assert_eq!(dto.len(), 1);
    assert_eq!(created[0]["firstName"], "Jorge");
    assert_eq!(created[0]["birthDay"], "15/05/1990");
    assert_eq!(created[0]["status"], true);
    let id = created[0]["idEmployee"].as_str().unwrap().to_string();

    let resp = app
        .clone()
        .oneshot(request("GET", &format!("/employees/{id}"), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(request("DELETE", &format!("/employees/{id}"), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .oneshot(request("GET", &format!("/employees/{id}"), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_http_not_found_body_identifies_field() {
    let app = create_test_router().await;

    let resp = app
        .oneshot(request(
            "GET",
            "/employees/cccccccc-cccc-4ccc-8ccc-cccccccccccc",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await;
    assert_eq!(body["campo"], "idEmployee");
    assert_eq!(body["mensaje"], "Employee not found");
    assert!(body["detalle"]
        .as_str()
        .unwrap()
        .contains("cccccccc-cccc-4ccc-8ccc-cccccccccccc"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_http_create_with_unknown_sex_returns_404() {
    let app = create_test_router().await;

    let mut body = create_body("Jorge");
    body["employees"][0]["idSex"] = "99999999-9999-4999-8999-999999999999".into();

    let resp = app
        .oneshot(request("POST", "/employees", Some(body)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await;
    assert_eq!(body["campo"], "idSex");
    assert_eq!(body["mensaje"], "Sex not found");
}

#[tokio::test]
async fn test_http_validation_failure_returns_400() {
    let app = create_test_router().await;

    let mut body = create_body("Jorge");
    body["employees"][0]["birthDay"] = serde_json::Value::Null;

    let resp = app
        .oneshot(request("POST", "/employees", Some(body)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["campo"], "birthDay");
}

#[tokio::test]
async fn test_http_search_requires_name_parameter() {
    let app = create_test_router().await;

    let resp = app
        .clone()
        .oneshot(request("GET", "/employees/search", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .oneshot(request("GET", "/employees/search?name=ore", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_http_missing_required_header_is_rejected() {
    let app = create_test_router().await;

    let resp = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/employees")
                .header("accept", "application/json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(resp.into_body(), 1024).await.unwrap();
    assert_eq!(&bytes[..], b"Missing required header: uuid");
}
