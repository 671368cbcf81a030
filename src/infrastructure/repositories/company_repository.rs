//! SeaORM implementation of CompanyRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{Company, CompanyDraft, CompanyRepository, DomainError};
use crate::models::company::{self, Entity as CompanyEntity};
use crate::models::employee::{self, Entity as EmployeeEntity};

/// SeaORM-based implementation of CompanyRepository
pub struct SeaOrmCompanyRepository {
    db: DatabaseConnection,
}

impl SeaOrmCompanyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: company::Model, employee_count: i64) -> Company {
    Company {
        id: model.id,
        name: model.name,
        legal_form: model.legal_form,
        employee_count,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn find_all(&self) -> Result<Vec<Company>, DomainError> {
        // Employee counts are derived at read time, never stored
        let companies = CompanyEntity::find()
            .order_by_asc(company::Column::Name)
            .find_with_related(EmployeeEntity)
            .all(&self.db)
            .await?;

        Ok(companies
            .into_iter()
            .map(|(c, employees)| to_domain(c, employees.len() as i64))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Company>, DomainError> {
        let Some(model) = CompanyEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let employee_count = EmployeeEntity::find()
            .filter(employee::Column::CompanyId.eq(id))
            .count(&self.db)
            .await?;

        Ok(Some(to_domain(model, employee_count as i64)))
    }

    async fn create(&self, draft: &CompanyDraft) -> Result<i32, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let model = company::ActiveModel {
            name: Set(draft.name.clone()),
            legal_form: Set(draft.legal_form.clone()),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;
        Ok(result.id)
    }

    async fn update(&self, id: i32, draft: &CompanyDraft) -> Result<(), DomainError> {
        let model = CompanyEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: company::ActiveModel = model.into();
        active.name = Set(draft.name.clone());
        active.legal_form = Set(draft.legal_form.clone());
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        active.update(&self.db).await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = CompanyEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }

    async fn has_employees(&self, company_id: i32) -> Result<bool, DomainError> {
        let count = EmployeeEntity::find()
            .filter(employee::Column::CompanyId.eq(company_id))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }
}
