//! Seeds the read-only catalogs so a freshly migrated database is usable.
//! The service never writes these tables; operators extend them directly.

use sea_orm_migration::prelude::*;

use super::initial_001::{CatJobPosition, CatSex};

#[derive(DeriveMigrationName)]
pub struct Migration;

const SEXES: &[(&str, &str, &str)] = &[
    ("0b2f3a1c-54d6-4e8f-9a3b-7c1d2e5f6a80", "M", "Male"),
    ("1c3e4b2d-65e7-4f90-8b4c-8d2e3f607b91", "F", "Female"),
    ("2d4f5c3e-76f8-4012-9c5d-9e3f40718ca2", "I", "Intersex"),
    ("3e506d4f-8709-4123-8d6e-0f4051829db3", "U", "Unknown"),
];

const JOB_POSITIONS: &[(&str, &str, &str)] = &[
    ("4f617e50-981a-4234-9e7f-105162930ec4", "DEV", "Software Developer"),
    ("50728f61-a92b-4345-8f80-216273041fd5", "QAE", "Quality Assurance Engineer"),
    ("61839072-ba3c-4456-9a91-327384152ee6", "MGR", "Engineering Manager"),
    ("72940183-cb4d-4567-8ba2-438495263ff7", "HRS", "Human Resources Specialist"),
    ("83a51294-dc5e-4678-9cb3-549506374008", "ANA", "Business Analyst"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert_sexes = Query::insert()
            .into_table(CatSex::Table)
            .columns([CatSex::IdSex, CatSex::Code, CatSex::Description])
            .to_owned();
        for (id, code, description) in SEXES {
            insert_sexes.values_panic([(*id).into(), (*code).into(), (*description).into()]);
        }
        manager.exec_stmt(insert_sexes).await?;

        let mut insert_jobs = Query::insert()
            .into_table(CatJobPosition::Table)
            .columns([
                CatJobPosition::IdJobPosition,
                CatJobPosition::Code,
                CatJobPosition::Description,
            ])
            .to_owned();
        for (id, code, description) in JOB_POSITIONS {
            insert_jobs.values_panic([(*id).into(), (*code).into(), (*description).into()]);
        }
        manager.exec_stmt(insert_jobs).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (id, _, _) in JOB_POSITIONS {
            manager
                .exec_stmt(
                    Query::delete()
                        .from_table(CatJobPosition::Table)
                        .and_where(Expr::col(CatJobPosition::IdJobPosition).eq(*id))
                        .to_owned(),
                )
                .await?;
        }
        for (id, _, _) in SEXES {
            manager
                .exec_stmt(
                    Query::delete()
                        .from_table(CatSex::Table)
                        .and_where(Expr::col(CatSex::IdSex).eq(*id))
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }
}
