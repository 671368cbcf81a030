//! Employee Service - validation and orchestration for the Employee entity

use std::sync::Arc;

use chrono::{Local, Months, NaiveDate};

use crate::domain::{CompanyRepository, DomainError, Employee, EmployeeDraft, EmployeeRepository};
use crate::models::Position;

/// How far back a hire date may lie. The boundary date itself is accepted.
const MAX_TENURE_YEARS: u32 = 50;

/// Service for managing employees.
///
/// Depends on the company repository to check that a referenced company
/// exists at validation time. The check is a separate round trip, so a
/// concurrent company deletion can still race it; the store-level foreign
/// key is the backstop.
#[derive(Clone)]
pub struct EmployeeService {
    companies: Arc<dyn CompanyRepository>,
    employees: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        employees: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self {
            companies,
            employees,
        }
    }

    /// All employees ordered by last name, with their company references.
    pub async fn list_all(&self) -> Result<Vec<Employee>, DomainError> {
        self.employees
            .find_all()
            .await
            .map_err(|e| e.in_context("listing employees"))
    }

    /// A single employee, or `None` for non-positive or unknown ids.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Employee>, DomainError> {
        if id <= 0 {
            return Ok(None);
        }

        self.employees
            .find_by_id(id)
            .await
            .map_err(|e| e.in_context(&format!("loading employee {}", id)))
    }

    /// Employees of one company; a non-positive id yields an empty list.
    pub async fn list_by_company(&self, company_id: i32) -> Result<Vec<Employee>, DomainError> {
        if company_id <= 0 {
            return Ok(Vec::new());
        }

        self.employees
            .find_by_company(company_id)
            .await
            .map_err(|e| e.in_context(&format!("listing employees of company {}", company_id)))
    }

    /// Validate and insert a new employee, returning the assigned id.
    pub async fn create(&self, draft: &EmployeeDraft) -> Result<i32, DomainError> {
        let errors = self.validate(draft).await?;
        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        self.employees
            .create(&trimmed(draft))
            .await
            .map_err(|e| e.in_context("creating employee"))
    }

    /// Revalidate and persist changes to an existing employee.
    pub async fn update(&self, draft: &EmployeeDraft) -> Result<(), DomainError> {
        let id = draft.id.unwrap_or(0);
        if id <= 0 {
            return Err(DomainError::Validation(vec![
                "Employee ID must be greater than zero.".to_string(),
            ]));
        }

        let existing = self
            .employees
            .find_by_id(id)
            .await
            .map_err(|e| e.in_context(&format!("loading employee {}", id)))?;
        if existing.is_none() {
            return Err(DomainError::NotFound);
        }

        let errors = self.validate(draft).await?;
        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        self.employees
            .update(id, &trimmed(draft))
            .await
            .map_err(|e| e.in_context(&format!("updating employee {}", id)))
    }

    /// Delete an employee. Non-positive and unknown ids both yield `false`;
    /// employees have no dependents, so there is no conflict case.
    pub async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        if id <= 0 {
            return Ok(false);
        }

        let existing = self
            .employees
            .find_by_id(id)
            .await
            .map_err(|e| e.in_context(&format!("deleting employee {}", id)))?;
        if existing.is_none() {
            return Ok(false);
        }

        self.employees
            .delete(id)
            .await
            .map_err(|e| e.in_context(&format!("deleting employee {}", id)))?;
        Ok(true)
    }

    /// Run every validation rule and collect all violations.
    pub async fn validate(&self, draft: &EmployeeDraft) -> Result<Vec<String>, DomainError> {
        let mut errors = Vec::new();

        let first_name = draft.first_name.trim();
        if first_name.is_empty() {
            errors.push("First name must not be empty.".to_string());
        } else if !(2..=50).contains(&first_name.chars().count()) {
            errors.push("First name must be between 2 and 50 characters.".to_string());
        }

        let last_name = draft.last_name.trim();
        if last_name.is_empty() {
            errors.push("Last name must not be empty.".to_string());
        } else if !(2..=50).contains(&last_name.chars().count()) {
            errors.push("Last name must be between 2 and 50 characters.".to_string());
        }

        if draft.position == Position::Unset {
            errors.push("A valid position must be selected.".to_string());
        }

        let today = Local::now().date_naive();
        match draft.hire_date {
            None => errors.push("Hire date must not be empty.".to_string()),
            Some(date) if date > today => {
                errors.push("Hire date must not be in the future.".to_string());
            }
            Some(date) if date < earliest_hire_date(today) => {
                errors.push(format!(
                    "Hire date must not be more than {} years in the past.",
                    MAX_TENURE_YEARS
                ));
            }
            Some(_) => {}
        }

        if draft.company_id <= 0 {
            errors.push("A company must be selected.".to_string());
        } else {
            let company = self
                .companies
                .find_by_id(draft.company_id)
                .await
                .map_err(|e| {
                    e.in_context(&format!("resolving company {}", draft.company_id))
                })?;
            if company.is_none() {
                errors.push(format!("Company with ID {} was not found.", draft.company_id));
            }
        }

        Ok(errors)
    }
}

fn earliest_hire_date(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(MAX_TENURE_YEARS * 12))
        .unwrap_or(NaiveDate::MIN)
}

fn trimmed(draft: &EmployeeDraft) -> EmployeeDraft {
    EmployeeDraft {
        id: draft.id,
        first_name: draft.first_name.trim().to_string(),
        middle_name: draft
            .middle_name
            .as_ref()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
        last_name: draft.last_name.trim().to_string(),
        position: draft.position,
        hire_date: draft.hire_date,
        company_id: draft.company_id,
    }
}
