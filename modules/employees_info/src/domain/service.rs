use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{Employee, EmployeeDraft, JobPosition, Sex};
use crate::domain::error::{DomainError, FieldViolation};
use crate::domain::reconciler;
use crate::domain::repo::{EmployeesRepository, JobPositionRepository, SexRepository};

/// Length of the opaque employee/catalog identifiers.
const ID_LENGTH: usize = 36;

/// Domain service with business rules for employee management.
/// Depends only on the repository ports, not on infra types.
#[derive(Clone)]
pub struct Service {
    employees: Arc<dyn EmployeesRepository>,
    sexes: Arc<dyn SexRepository>,
    job_positions: Arc<dyn JobPositionRepository>,
    config: ServiceConfig,
}

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub max_name_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_name_length: 100,
        }
    }
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(
        employees: Arc<dyn EmployeesRepository>,
        sexes: Arc<dyn SexRepository>,
        job_positions: Arc<dyn JobPositionRepository>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            employees,
            sexes,
            job_positions,
            config,
        }
    }

    #[instrument(name = "employees_info.service.list_all", skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Employee>, DomainError> {
        debug!("Listing all employees");
        let employees = self
            .employees
            .find_all()
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        debug!("Listed {} employees", employees.len());
        Ok(employees)
    }

    #[instrument(name = "employees_info.service.get_by_id", skip(self), fields(employee_id = %id))]
    pub async fn get_by_id(&self, id: &str) -> Result<Employee, DomainError> {
        debug!("Getting employee by id");
        self.employees
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::employee_not_found(id))
    }

    /// Create a batch of employees.
    ///
    /// References are resolved and records built for every draft, in input
    /// order, before anything is written; the first unresolved reference
    /// aborts the whole batch. The single batch write only runs once every
    /// draft has built successfully.
    #[instrument(name = "employees_info.service.create_many", skip(self, drafts), fields(count = drafts.len()))]
    pub async fn create_many(
        &self,
        drafts: Vec<EmployeeDraft>,
    ) -> Result<Vec<Employee>, DomainError> {
        info!("Creating {} employee(s)", drafts.len());

        let mut built = Vec::with_capacity(drafts.len());
        for draft in &drafts {
            self.validate_draft(draft, false)?;

            // Create resolves sex before job position; update does the
            // reverse. Both orders are observable through the reported
            // error kind and are kept as-is.
            let sex = self.resolve_sex(draft.id_sex.as_deref()).await?;
            let job_position = self
                .resolve_job_position(draft.id_job_position.as_deref())
                .await?;

            let employee = reconciler::build_new(
                draft,
                sex,
                job_position,
                Uuid::new_v4().to_string(),
                Utc::now(),
            )?;
            built.push(employee);
        }

        if built.is_empty() {
            return Ok(built);
        }

        self.employees
            .insert_many(built.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully created {} employee(s)", built.len());
        Ok(built)
    }

    #[instrument(name = "employees_info.service.update", skip(self, draft), fields(employee_id = %id))]
    pub async fn update(&self, id: &str, draft: EmployeeDraft) -> Result<Employee, DomainError> {
        info!("Updating employee");

        self.validate_draft(&draft, true)?;

        let mut existing = self
            .employees
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::employee_not_found(id))?;

        // Job position is resolved before sex: when both references are
        // invalid the reported error is JobPositionNotFound.
        let job_position = self
            .resolve_job_position(draft.id_job_position.as_deref())
            .await?;
        let sex = self.resolve_sex(draft.id_sex.as_deref()).await?;

        reconciler::apply_update(&mut existing, &draft, sex, job_position)?;

        self.employees
            .update(existing.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully updated employee");
        Ok(existing)
    }

    #[instrument(name = "employees_info.service.delete", skip(self), fields(employee_id = %id))]
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        info!("Deleting employee");

        let deleted = self
            .employees
            .delete(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        if !deleted {
            return Err(DomainError::employee_not_found(id));
        }

        info!("Successfully deleted employee");
        Ok(())
    }

    /// Case-insensitive substring search over the space-joined full name.
    /// Results come back in storage-defined order.
    #[instrument(name = "employees_info.service.search_by_name", skip(self), fields(term = %term))]
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<Employee>, DomainError> {
        debug!("Searching employees by name");
        self.employees
            .search_by_full_name(term)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    // --- reference resolution ---

    async fn resolve_sex(&self, id: Option<&str>) -> Result<Sex, DomainError> {
        let id = id.unwrap_or_default();
        self.sexes
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::sex_not_found(id))
    }

    async fn resolve_job_position(&self, id: Option<&str>) -> Result<JobPosition, DomainError> {
        let id = id.unwrap_or_default();
        self.job_positions
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::job_position_not_found(id))
    }

    // --- validation helpers ---

    /// Validate a mutation request, aggregating every field-level failure.
    /// `is_update` additionally requires the 36-char `idEmployee` field.
    fn validate_draft(&self, draft: &EmployeeDraft, is_update: bool) -> Result<(), DomainError> {
        let mut violations = Vec::new();

        if is_update {
            match &draft.id {
                None => violations.push(FieldViolation::new(
                    "idEmployee",
                    "The employee ID cannot be null.",
                )),
                Some(id) if id.len() != ID_LENGTH => violations.push(FieldViolation::new(
                    "idEmployee",
                    "The employee ID must contain exactly 36 characters.",
                )),
                Some(_) => {}
            }
        }

        for (field, value) in [
            ("firstName", &draft.first_name),
            ("middleName", &draft.middle_name),
            ("paternalSurname", &draft.paternal_surname),
            ("maternalSurname", &draft.maternal_surname),
        ] {
            if let Some(v) = value {
                if v.chars().count() > self.config.max_name_length {
                    violations.push(FieldViolation::new(
                        field,
                        format!("Must not exceed {} characters.", self.config.max_name_length),
                    ));
                }
            }
        }

        if draft.id_sex.as_deref().unwrap_or("").is_empty() {
            violations.push(FieldViolation::new(
                "idSex",
                "The sex identifier must not be null.",
            ));
        }
        if draft.id_job_position.as_deref().unwrap_or("").is_empty() {
            violations.push(FieldViolation::new(
                "idJobPosition",
                "The job position identifier must not be null.",
            ));
        }
        if draft.birth_day.as_deref().unwrap_or("").is_empty() {
            violations.push(FieldViolation::new(
                "birthDay",
                "The birth date must not be null.",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(violations))
        }
    }
}
