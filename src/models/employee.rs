use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Employee roles. `Unset` (0) is the "nothing selected" sentinel coming from
/// forms and is rejected by validation.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum Position {
    #[default]
    Unset = 0,
    Manager = 1,
    Developer = 2,
    BusinessAnalyst = 3,
    Tester = 4,
}

impl Position {
    /// Roles an employee can actually hold (the sentinel excluded).
    pub const ROLES: [Position; 4] = [
        Position::Manager,
        Position::Developer,
        Position::BusinessAnalyst,
        Position::Tester,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Position::Unset => "Unset",
            Position::Manager => "Manager",
            Position::Developer => "Developer",
            Position::BusinessAnalyst => "BusinessAnalyst",
            Position::Tester => "Tester",
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub position: Position,
    pub hire_date: Date,
    pub company_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id"
    )]
    Company,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
