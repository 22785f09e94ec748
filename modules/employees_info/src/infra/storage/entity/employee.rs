use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_employee: String,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub paternal_surname: Option<String>,
    pub maternal_surname: Option<String>,
    pub id_sex: String,
    pub id_job_position: String,
    pub birth_day: Date,
    pub status: i32,
    pub ts: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sex::Entity",
        from = "Column::IdSex",
        to = "super::sex::Column::IdSex"
    )]
    Sex,
    #[sea_orm(
        belongs_to = "super::job_position::Entity",
        from = "Column::IdJobPosition",
        to = "super::job_position::Column::IdJobPosition"
    )]
    JobPosition,
}

impl Related<super::sex::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sex.def()
    }
}

impl Related<super::job_position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobPosition.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
