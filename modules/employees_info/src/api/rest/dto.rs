use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::contract::model::{Employee, EmployeeDraft, JobPosition, Sex};

/// Wire format for `birthDay` fields: `dd/MM/yyyy`.
pub mod birth_day_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%d/%m/%Y";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Wire format for the `ts` field: `dd/MM/yyyy HH:mm:ss`.
pub mod ts_format {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%d/%m/%Y %H:%M:%S";

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&ts.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

/// REST DTO for a sex catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SexDto {
    pub id_sex: String,
    pub code: String,
    pub description: String,
}

/// REST DTO for a job position catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPositionDto {
    pub id_job_position: String,
    pub code: String,
    pub description: String,
}

/// REST DTO for an employee representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id_employee: String,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub paternal_surname: Option<String>,
    pub maternal_surname: Option<String>,
    pub sex: SexDto,
    pub job_position: JobPositionDto,
    #[serde(with = "birth_day_format")]
    pub birth_day: NaiveDate,
    /// Derived from `birthDay` at read time, never persisted.
    pub age: i32,
    pub status: bool,
    #[serde(with = "ts_format")]
    pub ts: DateTime<Utc>,
}

/// REST DTO for creating or updating an employee.
///
/// All fields are optional at the serde level; the explicit validation pass
/// in the domain reports required-field failures as an aggregated list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    pub id_employee: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub paternal_surname: Option<String>,
    pub maternal_surname: Option<String>,
    pub id_sex: Option<String>,
    pub id_job_position: Option<String>,
    /// Birth date string in `dd/MM/yyyy` format.
    pub birth_day: Option<String>,
    #[serde(default)]
    pub status: i32,
}

/// REST DTO for bulk employee creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeesRequest {
    pub employees: Vec<EmployeeRequest>,
}

/// Query parameters for the name search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub name: String,
}

// Conversion implementations between REST DTOs and contract models

impl From<Sex> for SexDto {
    fn from(sex: Sex) -> Self {
        Self {
            id_sex: sex.id,
            code: sex.code,
            description: sex.description,
        }
    }
}

impl From<JobPosition> for JobPositionDto {
    fn from(job: JobPosition) -> Self {
        Self {
            id_job_position: job.id,
            code: job.code,
            description: job.description,
        }
    }
}

impl From<Employee> for EmployeeDto {
    fn from(e: Employee) -> Self {
        let age = e.age();
        Self {
            id_employee: e.id,
            first_name: e.first_name,
            middle_name: e.middle_name,
            paternal_surname: e.paternal_surname,
            maternal_surname: e.maternal_surname,
            sex: e.sex.into(),
            job_position: e.job_position.into(),
            birth_day: e.birth_day,
            age,
            status: e.status != 0,
            ts: e.ts,
        }
    }
}

impl From<EmployeeRequest> for EmployeeDraft {
    fn from(req: EmployeeRequest) -> Self {
        Self {
            id: req.id_employee,
            first_name: req.first_name,
            middle_name: req.middle_name,
            paternal_surname: req.paternal_surname,
            maternal_surname: req.maternal_surname,
            id_sex: req.id_sex,
            id_job_position: req.id_job_position,
            birth_day: req.birth_day,
            status: req.status,
        }
    }
}
