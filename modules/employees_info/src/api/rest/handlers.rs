use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::Json,
    Extension,
};
use tracing::{error, info};

use crate::api::rest::dto::{EmployeeDto, EmployeeRequest, EmployeesRequest, SearchQuery};
use crate::api::rest::error::{map_domain_error, ApiError};
use crate::domain::service::Service;

pub async fn list_employees(
    Extension(svc): Extension<Arc<Service>>,
) -> Result<Json<Vec<EmployeeDto>>, ApiError> {
    info!("Listing employees");

    match svc.list_all().await {
        Ok(employees) => Ok(Json(employees.into_iter().map(EmployeeDto::from).collect())),
        Err(e) => {
            error!("Failed to list employees: {}", e);
            Err(map_domain_error(&e))
        }
    }
}

/// Get a specific employee by ID
pub async fn get_employee(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
) -> Result<Json<EmployeeDto>, ApiError> {
    info!("Getting employee with id: {}", id);

    match svc.get_by_id(&id).await {
        Ok(employee) => Ok(Json(EmployeeDto::from(employee))),
        Err(e) => {
            error!("Failed to get employee {}: {}", id, e);
            Err(map_domain_error(&e))
        }
    }
}

/// Create one or more employees in a single batch
pub async fn create_employees(
    Extension(svc): Extension<Arc<Service>>,
    Json(req_body): Json<EmployeesRequest>,
) -> Result<(StatusCode, Json<Vec<EmployeeDto>>), ApiError> {
    info!("Creating {} employee(s)", req_body.employees.len());

    let drafts = req_body.employees.into_iter().map(Into::into).collect();

    match svc.create_many(drafts).await {
        Ok(created) => Ok((
            StatusCode::CREATED,
            Json(created.into_iter().map(EmployeeDto::from).collect()),
        )),
        Err(e) => {
            error!("Failed to create employees: {}", e);
            Err(map_domain_error(&e))
        }
    }
}

/// Update an existing employee
pub async fn update_employee(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
    Json(req_body): Json<EmployeeRequest>,
) -> Result<Json<EmployeeDto>, ApiError> {
    info!("Updating employee {}", id);

    match svc.update(&id, req_body.into()).await {
        Ok(employee) => Ok(Json(EmployeeDto::from(employee))),
        Err(e) => {
            error!("Failed to update employee {}: {}", id, e);
            Err(map_domain_error(&e))
        }
    }
}

/// Delete an employee by ID
pub async fn delete_employee(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    info!("Deleting employee: {}", id);

    match svc.delete(&id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete employee {}: {}", id, e);
            Err(map_domain_error(&e))
        }
    }
}

/// Search employees by full or partial name
pub async fn search_employees(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<EmployeeDto>>, ApiError> {
    info!("Searching employees by name: {}", query.name);

    match svc.search_by_name(&query.name).await {
        Ok(employees) => Ok(Json(employees.into_iter().map(EmployeeDto::from).collect())),
        Err(e) => {
            error!("Failed to search employees: {}", e);
            Err(map_domain_error(&e))
        }
    }
}
