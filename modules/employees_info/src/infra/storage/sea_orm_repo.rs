//! SeaORM-backed repository implementations for the domain ports.
//!
//! The structs are generic over `C: ConnectionTrait`, so they can be
//! constructed with a `DatabaseConnection` **or** a transactional connection.

use std::collections::HashMap;

use anyhow::Context;
use sea_orm::sea_query::Expr;
use sea_orm::{ConnectionTrait, EntityTrait, QueryFilter};

use crate::contract::model::{Employee, JobPosition, Sex};
use crate::domain::repo::{EmployeesRepository, JobPositionRepository, SexRepository};
use crate::infra::storage::entity::{employee, job_position, sex};
use crate::infra::storage::mapper;

/// SeaORM employees repository impl.
/// Holds a connection object; its lifetime/ownership is up to the caller.
pub struct SeaOrmEmployeesRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmEmployeesRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }

    /// Load both catalogs into id-keyed maps. The catalogs are small
    /// reference tables, so a full read beats a per-row lookup when mapping
    /// result sets.
    async fn load_catalogs(
        &self,
    ) -> anyhow::Result<(
        HashMap<String, sex::Model>,
        HashMap<String, job_position::Model>,
    )> {
        let sexes = sex::Entity::find()
            .all(&self.conn)
            .await
            .context("loading sex catalog failed")?
            .into_iter()
            .map(|m| (m.id_sex.clone(), m))
            .collect();
        let jobs = job_position::Entity::find()
            .all(&self.conn)
            .await
            .context("loading job position catalog failed")?
            .into_iter()
            .map(|m| (m.id_job_position.clone(), m))
            .collect();
        Ok((sexes, jobs))
    }

    async fn rows_to_contract(
        &self,
        rows: Vec<employee::Model>,
    ) -> anyhow::Result<Vec<Employee>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let (sexes, jobs) = self.load_catalogs().await?;
        rows.into_iter()
            .map(|row| {
                let sex_row = sexes
                    .get(&row.id_sex)
                    .cloned()
                    .with_context(|| format!("employee {} references missing sex", row.id_employee))?;
                let job_row = jobs
                    .get(&row.id_job_position)
                    .cloned()
                    .with_context(|| {
                        format!(
                            "employee {} references missing job position",
                            row.id_employee
                        )
                    })?;
                Ok(mapper::entity_to_contract(row, sex_row, job_row))
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl<C> EmployeesRepository for SeaOrmEmployeesRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_all(&self) -> anyhow::Result<Vec<Employee>> {
        let rows = employee::Entity::find()
            .all(&self.conn)
            .await
            .context("find_all failed")?;
        self.rows_to_contract(rows).await
    }

    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Employee>> {
        let Some(row) = employee::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?
        else {
            return Ok(None);
        };

        let sex_row = sex::Entity::find_by_id(row.id_sex.clone())
            .one(&self.conn)
            .await
            .context("sex lookup failed")?
            .with_context(|| format!("employee {} references missing sex", row.id_employee))?;
        let job_row = job_position::Entity::find_by_id(row.id_job_position.clone())
            .one(&self.conn)
            .await
            .context("job position lookup failed")?
            .with_context(|| {
                format!(
                    "employee {} references missing job position",
                    row.id_employee
                )
            })?;

        Ok(Some(mapper::entity_to_contract(row, sex_row, job_row)))
    }

    async fn insert_many(&self, employees: Vec<Employee>) -> anyhow::Result<()> {
        let models: Vec<employee::ActiveModel> =
            employees.iter().map(mapper::contract_to_active_model).collect();
        employee::Entity::insert_many(models)
            .exec(&self.conn)
            .await
            .context("insert_many failed")?;
        Ok(())
    }

    async fn update(&self, e: Employee) -> anyhow::Result<()> {
        let model = mapper::contract_to_active_model(&e);
        employee::Entity::update(model)
            .exec(&self.conn)
            .await
            .context("update failed")?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> anyhow::Result<bool> {
        let res = employee::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete failed")?;
        Ok(res.rows_affected > 0)
    }

    async fn search_by_full_name(&self, term: &str) -> anyhow::Result<Vec<Employee>> {
        // Space-joined concatenation with nulls as empty strings, matching
        // the wire-visible search semantics; `||` concatenation works on both
        // SQLite and Postgres.
        let pattern = format!("%{}%", term.to_lowercase());
        let rows = employee::Entity::find()
            .filter(Expr::cust_with_values(
                "LOWER(COALESCE(first_name, '') || ' ' || COALESCE(middle_name, '') || ' ' || \
                 COALESCE(paternal_surname, '') || ' ' || COALESCE(maternal_surname, '')) LIKE ?",
                [pattern],
            ))
            .all(&self.conn)
            .await
            .context("search_by_full_name failed")?;
        self.rows_to_contract(rows).await
    }
}

/// SeaORM sex catalog resolver.
pub struct SeaOrmSexRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmSexRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> SexRepository for SeaOrmSexRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Sex>> {
        let found = sex::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("sex find_by_id failed")?;
        Ok(found.map(mapper::sex_to_contract))
    }
}

/// SeaORM job position catalog resolver.
pub struct SeaOrmJobPositionRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmJobPositionRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> JobPositionRepository for SeaOrmJobPositionRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<JobPosition>> {
        let found = job_position::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("job position find_by_id failed")?;
        Ok(found.map(mapper::job_position_to_contract))
    }
}
