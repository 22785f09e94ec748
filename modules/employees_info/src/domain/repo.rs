use crate::contract::model::{Employee, JobPosition, Sex};

/// Persistence port for employee records. Implementations live in
/// `infra::storage`; the domain service depends only on this trait.
#[async_trait::async_trait]
pub trait EmployeesRepository: Send + Sync {
    async fn find_all(&self) -> anyhow::Result<Vec<Employee>>;
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Employee>>;
    /// Persist a batch of new employees in a single write.
    async fn insert_many(&self, employees: Vec<Employee>) -> anyhow::Result<()>;
    async fn update(&self, employee: Employee) -> anyhow::Result<()>;
    /// Returns true if a record was deleted.
    async fn delete(&self, id: &str) -> anyhow::Result<bool>;
    /// Case-insensitive substring match over the space-joined full name.
    async fn search_by_full_name(&self, term: &str) -> anyhow::Result<Vec<Employee>>;
}

/// Lookup port for the sex catalog.
#[async_trait::async_trait]
pub trait SexRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Sex>>;
}

/// Lookup port for the job position catalog.
#[async_trait::async_trait]
pub trait JobPositionRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<JobPosition>>;
}
