pub mod model;

pub use model::{Employee, EmployeeDraft, JobPosition, Sex};
