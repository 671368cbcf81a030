//! SeaORM implementation of EmployeeRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{CompanyRef, DomainError, Employee, EmployeeDraft, EmployeeRepository};
use crate::models::company::{self, Entity as CompanyEntity};
use crate::models::employee::{self, Entity as EmployeeEntity};

/// SeaORM-based implementation of EmployeeRepository
pub struct SeaOrmEmployeeRepository {
    db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: employee::Model, company: Option<company::Model>) -> Employee {
    Employee {
        id: model.id,
        first_name: model.first_name,
        middle_name: model.middle_name,
        last_name: model.last_name,
        position: model.position,
        hire_date: model.hire_date,
        company_id: model.company_id,
        company: company.map(|c| CompanyRef {
            id: c.id,
            name: c.name,
            legal_form: c.legal_form,
        }),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        let employees = EmployeeEntity::find()
            .order_by_asc(employee::Column::LastName)
            .find_also_related(CompanyEntity)
            .all(&self.db)
            .await?;

        Ok(employees
            .into_iter()
            .map(|(e, c)| to_domain(e, c))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, DomainError> {
        let employee = EmployeeEntity::find_by_id(id)
            .find_also_related(CompanyEntity)
            .one(&self.db)
            .await?;

        Ok(employee.map(|(e, c)| to_domain(e, c)))
    }

    async fn find_by_company(&self, company_id: i32) -> Result<Vec<Employee>, DomainError> {
        let employees = EmployeeEntity::find()
            .filter(employee::Column::CompanyId.eq(company_id))
            .order_by_asc(employee::Column::LastName)
            .find_also_related(CompanyEntity)
            .all(&self.db)
            .await?;

        Ok(employees
            .into_iter()
            .map(|(e, c)| to_domain(e, c))
            .collect())
    }

    async fn create(&self, draft: &EmployeeDraft) -> Result<i32, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();
        let hire_date = draft
            .hire_date
            .ok_or_else(|| DomainError::Database("hire date missing on insert".to_string()))?;

        let model = employee::ActiveModel {
            first_name: Set(draft.first_name.clone()),
            middle_name: Set(draft.middle_name.clone()),
            last_name: Set(draft.last_name.clone()),
            position: Set(draft.position),
            hire_date: Set(hire_date),
            company_id: Set(draft.company_id),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;
        Ok(result.id)
    }

    async fn update(&self, id: i32, draft: &EmployeeDraft) -> Result<(), DomainError> {
        let model = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let hire_date = draft
            .hire_date
            .ok_or_else(|| DomainError::Database("hire date missing on update".to_string()))?;

        let mut active: employee::ActiveModel = model.into();
        active.first_name = Set(draft.first_name.clone());
        active.middle_name = Set(draft.middle_name.clone());
        active.last_name = Set(draft.last_name.clone());
        active.position = Set(draft.position);
        active.hire_date = Set(hire_date);
        active.company_id = Set(draft.company_id);
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        active.update(&self.db).await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = EmployeeEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}
