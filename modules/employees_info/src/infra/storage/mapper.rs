use sea_orm::Set;

use crate::contract::model::{Employee, JobPosition, Sex};
use crate::infra::storage::entity::{employee, job_position, sex};

/// Convert a database row triple to a contract model.
pub fn entity_to_contract(
    row: employee::Model,
    sex_row: sex::Model,
    job_row: job_position::Model,
) -> Employee {
    Employee {
        id: row.id_employee,
        first_name: row.first_name,
        middle_name: row.middle_name,
        paternal_surname: row.paternal_surname,
        maternal_surname: row.maternal_surname,
        sex: sex_to_contract(sex_row),
        job_position: job_position_to_contract(job_row),
        birth_day: row.birth_day,
        status: row.status,
        ts: row.ts,
    }
}

pub fn sex_to_contract(row: sex::Model) -> Sex {
    Sex {
        id: row.id_sex,
        code: row.code,
        description: row.description,
    }
}

pub fn job_position_to_contract(row: job_position::Model) -> JobPosition {
    JobPosition {
        id: row.id_job_position,
        code: row.code,
        description: row.description,
    }
}

/// Build a fully-set active model for insert or update.
pub fn contract_to_active_model(e: &Employee) -> employee::ActiveModel {
    employee::ActiveModel {
        id_employee: Set(e.id.clone()),
        first_name: Set(e.first_name.clone()),
        middle_name: Set(e.middle_name.clone()),
        paternal_surname: Set(e.paternal_surname.clone()),
        maternal_surname: Set(e.maternal_surname.clone()),
        id_sex: Set(e.sex.id.clone()),
        id_job_position: Set(e.job_position.id.clone()),
        birth_day: Set(e.birth_day),
        status: Set(e.status),
        ts: Set(e.ts),
    }
}
