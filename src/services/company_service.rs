//! Company Service - validation and orchestration for the Company entity

use std::sync::Arc;

use crate::domain::{Company, CompanyDraft, CompanyRepository, DomainError};
use crate::models::LEGAL_FORMS;

/// Service for managing companies.
///
/// Holds no mutable state; every operation is an independent set of store
/// round trips.
#[derive(Clone)]
pub struct CompanyService {
    companies: Arc<dyn CompanyRepository>,
}

impl CompanyService {
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        Self { companies }
    }

    /// All companies ordered by name, each with its derived employee count.
    pub async fn list_all(&self) -> Result<Vec<Company>, DomainError> {
        self.companies
            .find_all()
            .await
            .map_err(|e| e.in_context("listing companies"))
    }

    /// A single company, or `None` for non-positive or unknown ids.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Company>, DomainError> {
        if id <= 0 {
            return Ok(None);
        }

        self.companies
            .find_by_id(id)
            .await
            .map_err(|e| e.in_context(&format!("loading company {}", id)))
    }

    /// Validate and insert a new company, returning the assigned id.
    pub async fn create(&self, draft: &CompanyDraft) -> Result<i32, DomainError> {
        let errors = self.validate(draft).await?;
        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        self.companies
            .create(&trimmed(draft))
            .await
            .map_err(|e| e.in_context("creating company"))
    }

    /// Revalidate and persist changes to an existing company.
    pub async fn update(&self, draft: &CompanyDraft) -> Result<(), DomainError> {
        let id = draft.id.unwrap_or(0);
        if id <= 0 {
            return Err(DomainError::Validation(vec![
                "Company ID must be greater than zero.".to_string(),
            ]));
        }

        let existing = self
            .companies
            .find_by_id(id)
            .await
            .map_err(|e| e.in_context(&format!("loading company {}", id)))?;
        if existing.is_none() {
            return Err(DomainError::NotFound);
        }

        let errors = self.validate(draft).await?;
        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        self.companies
            .update(id, &trimmed(draft))
            .await
            .map_err(|e| e.in_context(&format!("updating company {}", id)))
    }

    /// Delete a company.
    ///
    /// Returns `false` for non-positive or unknown ids. A company that still
    /// has employees yields `Conflict`, which callers must distinguish from
    /// "nothing to delete".
    pub async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        if id <= 0 {
            return Ok(false);
        }

        let existing = self
            .companies
            .find_by_id(id)
            .await
            .map_err(|e| e.in_context(&format!("deleting company {}", id)))?;
        if existing.is_none() {
            return Ok(false);
        }

        let has_employees = self
            .companies
            .has_employees(id)
            .await
            .map_err(|e| e.in_context(&format!("deleting company {}", id)))?;
        if has_employees {
            return Err(DomainError::Conflict(
                "Cannot delete a company that still has employees.".to_string(),
            ));
        }

        self.companies
            .delete(id)
            .await
            .map_err(|e| e.in_context(&format!("deleting company {}", id)))?;
        Ok(true)
    }

    /// Run every validation rule and collect all violations.
    ///
    /// An empty name suppresses the length and duplicate checks for the name;
    /// an empty legal form suppresses the allowed-set check. All other rules
    /// run unconditionally, so the caller gets the full list in one pass.
    pub async fn validate(&self, draft: &CompanyDraft) -> Result<Vec<String>, DomainError> {
        let mut errors = Vec::new();

        let name = draft.name.trim();
        if name.is_empty() {
            errors.push("Company name must not be empty.".to_string());
        } else {
            let len = name.chars().count();
            if !(3..=100).contains(&len) {
                errors.push("Company name must be between 3 and 100 characters.".to_string());
            }

            let companies = self
                .companies
                .find_all()
                .await
                .map_err(|e| e.in_context("checking for duplicate company name"))?;
            let own_id = draft.id.unwrap_or(0);
            let duplicate = companies.iter().any(|c| {
                c.id != own_id && c.name.trim().to_lowercase() == name.to_lowercase()
            });
            if duplicate {
                errors.push("A company with this name already exists.".to_string());
            }
        }

        let legal_form = draft.legal_form.trim();
        if legal_form.is_empty() {
            errors.push("Company legal form must not be empty.".to_string());
        } else if !LEGAL_FORMS.contains(&legal_form.to_uppercase().as_str()) {
            errors.push(format!(
                "Invalid company legal form. Allowed forms: {}.",
                LEGAL_FORMS.join(", ")
            ));
        }

        Ok(errors)
    }
}

fn trimmed(draft: &CompanyDraft) -> CompanyDraft {
    CompanyDraft {
        id: draft.id,
        name: draft.name.trim().to_string(),
        legal_form: draft.legal_form.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{company_repo, employee_repo, InMemoryStore};
    use chrono::NaiveDate;

    fn service(store: &Arc<InMemoryStore>) -> CompanyService {
        CompanyService::new(company_repo(store))
    }

    fn draft(name: &str, legal_form: &str) -> CompanyDraft {
        CompanyDraft {
            id: None,
            name: name.to_string(),
            legal_form: legal_form.to_string(),
        }
    }

    #[tokio::test]
    async fn create_trims_and_assigns_id() {
        let store = InMemoryStore::shared();
        let svc = service(&store);

        let id = svc.create(&draft("  Acme  ", " ООО ")).await.unwrap();
        assert!(id > 0);

        let company = svc.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(company.name, "Acme");
        assert_eq!(company.legal_form, "ООО");
        assert_eq!(company.employee_count, 0);
    }

    #[tokio::test]
    async fn create_rejects_short_name_without_mutation() {
        let store = InMemoryStore::shared();
        let svc = service(&store);

        let err = svc.create(&draft("Ac", "ООО")).await.unwrap_err();
        match err {
            DomainError::Validation(errors) => {
                assert!(errors.iter().any(|e| e.contains("between 3 and 100")));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(svc.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn validate_collects_all_violations() {
        let store = InMemoryStore::shared();
        let svc = service(&store);

        let errors = svc.validate(&draft("", "")).await.unwrap();
        assert_eq!(errors.len(), 2);

        // Empty name suppresses the length/duplicate checks, empty legal form
        // suppresses the allowed-set check; nothing short-circuits otherwise.
        let errors = svc.validate(&draft("Ac", "GmbH")).await.unwrap();
        assert_eq!(errors.len(), 2);
        assert!(errors[1].contains("Allowed forms"));
    }

    #[tokio::test]
    async fn duplicate_name_is_case_insensitive_and_excludes_self() {
        let store = InMemoryStore::shared();
        let svc = service(&store);

        let id = svc.create(&draft("Acme", "ООО")).await.unwrap();

        let errors = svc.validate(&draft("  aCmE ", "ЗАО")).await.unwrap();
        assert!(errors.iter().any(|e| e.contains("already exists")));

        // The company itself is not its own duplicate
        let mut own = draft("ACME", "ООО");
        own.id = Some(id);
        assert!(svc.validate(&own).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_unknown_company_is_not_found() {
        let store = InMemoryStore::shared();
        let svc = service(&store);

        let mut d = draft("Acme", "ООО");
        d.id = Some(99);
        assert!(matches!(svc.update(&d).await, Err(DomainError::NotFound)));

        d.id = None;
        assert!(matches!(
            svc.update(&d).await,
            Err(DomainError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn delete_with_employees_is_a_conflict() {
        let store = InMemoryStore::shared();
        let svc = service(&store);
        let employees = employee_repo(&store);

        let id = svc.create(&draft("Acme", "ООО")).await.unwrap();
        let employee_id = crate::services::testing::insert_employee(
            &employees,
            "Ann",
            "Lee",
            NaiveDate::from_ymd_opt(2020, 5, 1).unwrap(),
            id,
        )
        .await;

        assert!(matches!(
            svc.delete(id).await,
            Err(DomainError::Conflict(_))
        ));
        // No partial deletion: company is still retrievable
        assert!(svc.get_by_id(id).await.unwrap().is_some());

        use crate::domain::EmployeeRepository;
        employees.delete(employee_id).await.unwrap();
        assert!(svc.delete(id).await.unwrap());
        assert!(svc.get_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_invalid_or_missing_id_returns_false() {
        let store = InMemoryStore::shared();
        let svc = service(&store);

        assert!(!svc.delete(0).await.unwrap());
        assert!(!svc.delete(-3).await.unwrap());
        assert!(!svc.delete(42).await.unwrap());
    }

    #[tokio::test]
    async fn get_by_id_skips_store_for_invalid_id() {
        let store = InMemoryStore::shared();
        let svc = service(&store);

        assert!(svc.get_by_id(0).await.unwrap().is_none());
        assert!(svc.get_by_id(-1).await.unwrap().is_none());
        assert_eq!(store.company_reads(), 0);
    }

    #[tokio::test]
    async fn list_all_is_ordered_by_name_with_counts() {
        let store = InMemoryStore::shared();
        let svc = service(&store);

        svc.create(&draft("Zenith", "АО")).await.unwrap();
        let acme = svc.create(&draft("Acme", "ООО")).await.unwrap();
        crate::services::testing::insert_employee(
            &employee_repo(&store),
            "Ann",
            "Lee",
            NaiveDate::from_ymd_opt(2021, 1, 10).unwrap(),
            acme,
        )
        .await;

        let companies = svc.list_all().await.unwrap();
        assert_eq!(companies.len(), 2);
        assert_eq!(companies[0].name, "Acme");
        assert_eq!(companies[0].employee_count, 1);
        assert_eq!(companies[1].name, "Zenith");
        assert_eq!(companies[1].employee_count, 0);
    }
}
