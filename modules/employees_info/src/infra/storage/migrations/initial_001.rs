use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CatSex::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CatSex::IdSex)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CatSex::Code).string_len(1).not_null())
                    .col(ColumnDef::new(CatSex::Description).string_len(50).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CatJobPosition::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CatJobPosition::IdJobPosition)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CatJobPosition::Code).string_len(3).not_null())
                    .col(
                        ColumnDef::new(CatJobPosition::Description)
                            .string_len(100)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employee::IdEmployee)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employee::FirstName).string_len(100))
                    .col(ColumnDef::new(Employee::MiddleName).string_len(100))
                    .col(ColumnDef::new(Employee::PaternalSurname).string_len(100))
                    .col(ColumnDef::new(Employee::MaternalSurname).string_len(100))
                    .col(ColumnDef::new(Employee::IdSex).string_len(36).not_null())
                    .col(
                        ColumnDef::new(Employee::IdJobPosition)
                            .string_len(36)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Employee::BirthDay).date().not_null())
                    .col(ColumnDef::new(Employee::Status).integer().not_null())
                    .col(
                        ColumnDef::new(Employee::Ts)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_sex")
                            .from(Employee::Table, Employee::IdSex)
                            .to(CatSex::Table, CatSex::IdSex),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_job_position")
                            .from(Employee::Table, Employee::IdJobPosition)
                            .to(CatJobPosition::Table, CatJobPosition::IdJobPosition),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CatJobPosition::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CatSex::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(super) enum Employee {
    Table,
    IdEmployee,
    FirstName,
    MiddleName,
    PaternalSurname,
    MaternalSurname,
    IdSex,
    IdJobPosition,
    BirthDay,
    Status,
    Ts,
}

#[derive(DeriveIden)]
pub(super) enum CatSex {
    Table,
    IdSex,
    Code,
    Description,
}

#[derive(DeriveIden)]
pub(super) enum CatJobPosition {
    Table,
    IdJobPosition,
    Code,
    Description,
}
