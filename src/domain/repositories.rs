//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::DomainError;
use crate::models::employee::Position;

/// Company data for API responses.
///
/// `employee_count` is derived at read time, not stored.
#[derive(Debug, Clone, serde::Serialize, utoipa::ToSchema)]
pub struct Company {
    pub id: i32,
    pub name: String,
    pub legal_form: String,
    pub employee_count: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Input for creating or updating a company.
///
/// `id` is `None` on create; on update it identifies the row and excludes the
/// company from its own duplicate-name check.
#[derive(Debug, Clone, serde::Deserialize, utoipa::ToSchema)]
pub struct CompanyDraft {
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    pub legal_form: String,
}

/// Denormalized company reference carried by fetched employees, display only.
#[derive(Debug, Clone, serde::Serialize, utoipa::ToSchema)]
pub struct CompanyRef {
    pub id: i32,
    pub name: String,
    pub legal_form: String,
}

/// Employee data for API responses.
#[derive(Debug, Clone, serde::Serialize, utoipa::ToSchema)]
pub struct Employee {
    pub id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub position: Position,
    pub hire_date: NaiveDate,
    pub company_id: i32,
    /// Populated when employees are fetched together with their company
    pub company: Option<CompanyRef>,
    pub created_at: String,
    pub updated_at: String,
}

/// Input for creating or updating an employee.
#[derive(Debug, Clone, serde::Deserialize, utoipa::ToSchema)]
pub struct EmployeeDraft {
    #[serde(default)]
    pub id: Option<i32>,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    #[serde(default)]
    pub company_id: i32,
}

/// Repository trait for the Company entity
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Find all companies ordered by name, each with its employee count
    async fn find_all(&self) -> Result<Vec<Company>, DomainError>;

    /// Find a company by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Company>, DomainError>;

    /// Insert a new company, returning the store-assigned id
    async fn create(&self, draft: &CompanyDraft) -> Result<i32, DomainError>;

    /// Update name/legal form of an existing company
    async fn update(&self, id: i32, draft: &CompanyDraft) -> Result<(), DomainError>;

    /// Delete a company by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;

    /// Whether any employee currently references the company
    async fn has_employees(&self, company_id: i32) -> Result<bool, DomainError>;
}

/// Repository trait for the Employee entity
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find all employees ordered by last name, with company references
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError>;

    /// Find an employee by ID, with its company reference
    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, DomainError>;

    /// Find all employees of one company
    async fn find_by_company(&self, company_id: i32) -> Result<Vec<Employee>, DomainError>;

    /// Insert a new employee, returning the store-assigned id
    async fn create(&self, draft: &EmployeeDraft) -> Result<i32, DomainError>;

    /// Update an existing employee
    async fn update(&self, id: i32, draft: &EmployeeDraft) -> Result<(), DomainError>;

    /// Delete an employee by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}
