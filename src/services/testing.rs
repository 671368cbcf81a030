//! In-memory repositories for service unit tests.
//!
//! Both repository traits are implemented over one shared store so the
//! cross-entity checks (company lookups, dependent counts) behave like the
//! real database without one.

use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{
    Company, CompanyDraft, CompanyRef, CompanyRepository, DomainError, Employee, EmployeeDraft,
    EmployeeRepository,
};
use crate::models::Position;

#[derive(Clone)]
struct CompanyRow {
    id: i32,
    name: String,
    legal_form: String,
}

#[derive(Clone)]
struct EmployeeRow {
    id: i32,
    first_name: String,
    middle_name: Option<String>,
    last_name: String,
    position: Position,
    hire_date: NaiveDate,
    company_id: i32,
}

#[derive(Default)]
pub struct InMemoryStore {
    companies: Mutex<Vec<CompanyRow>>,
    employees: Mutex<Vec<EmployeeRow>>,
    next_id: AtomicI32,
    company_read_count: AtomicUsize,
}

impl InMemoryStore {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self {
            next_id: AtomicI32::new(1),
            ..Default::default()
        })
    }

    /// Number of by-id company reads issued; lets tests assert that invalid
    /// ids never reach the store.
    pub fn company_reads(&self) -> usize {
        self.company_read_count.load(Ordering::SeqCst)
    }

    fn fresh_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    fn employee_count(&self, company_id: i32) -> i64 {
        self.employees
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.company_id == company_id)
            .count() as i64
    }

    fn company_ref(&self, company_id: i32) -> Option<CompanyRef> {
        self.companies
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == company_id)
            .map(|c| CompanyRef {
                id: c.id,
                name: c.name.clone(),
                legal_form: c.legal_form.clone(),
            })
    }

    fn to_company(&self, row: &CompanyRow) -> Company {
        Company {
            id: row.id,
            name: row.name.clone(),
            legal_form: row.legal_form.clone(),
            employee_count: self.employee_count(row.id),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn to_employee(&self, row: &EmployeeRow) -> Employee {
        Employee {
            id: row.id,
            first_name: row.first_name.clone(),
            middle_name: row.middle_name.clone(),
            last_name: row.last_name.clone(),
            position: row.position,
            hire_date: row.hire_date,
            company_id: row.company_id,
            company: self.company_ref(row.company_id),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

pub struct InMemoryCompanyRepo(Arc<InMemoryStore>);
pub struct InMemoryEmployeeRepo(Arc<InMemoryStore>);

pub fn company_repo(store: &Arc<InMemoryStore>) -> Arc<dyn CompanyRepository> {
    Arc::new(InMemoryCompanyRepo(store.clone()))
}

pub fn employee_repo(store: &Arc<InMemoryStore>) -> Arc<dyn EmployeeRepository> {
    Arc::new(InMemoryEmployeeRepo(store.clone()))
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepo {
    async fn find_all(&self) -> Result<Vec<Company>, DomainError> {
        let rows = self.0.companies.lock().unwrap().clone();
        let mut companies: Vec<Company> = rows.iter().map(|r| self.0.to_company(r)).collect();
        companies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(companies)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Company>, DomainError> {
        self.0.company_read_count.fetch_add(1, Ordering::SeqCst);
        let rows = self.0.companies.lock().unwrap().clone();
        Ok(rows.iter().find(|c| c.id == id).map(|r| self.0.to_company(r)))
    }

    async fn create(&self, draft: &CompanyDraft) -> Result<i32, DomainError> {
        let id = self.0.fresh_id();
        self.0.companies.lock().unwrap().push(CompanyRow {
            id,
            name: draft.name.clone(),
            legal_form: draft.legal_form.clone(),
        });
        Ok(id)
    }

    async fn update(&self, id: i32, draft: &CompanyDraft) -> Result<(), DomainError> {
        let mut rows = self.0.companies.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(DomainError::NotFound)?;
        row.name = draft.name.clone();
        row.legal_form = draft.legal_form.clone();
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let mut rows = self.0.companies.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }

    async fn has_employees(&self, company_id: i32) -> Result<bool, DomainError> {
        Ok(self.0.employee_count(company_id) > 0)
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepo {
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        let rows = self.0.employees.lock().unwrap().clone();
        let mut employees: Vec<Employee> = rows.iter().map(|r| self.0.to_employee(r)).collect();
        employees.sort_by(|a, b| a.last_name.cmp(&b.last_name));
        Ok(employees)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, DomainError> {
        let rows = self.0.employees.lock().unwrap().clone();
        Ok(rows.iter().find(|e| e.id == id).map(|r| self.0.to_employee(r)))
    }

    async fn find_by_company(&self, company_id: i32) -> Result<Vec<Employee>, DomainError> {
        let rows = self.0.employees.lock().unwrap().clone();
        Ok(rows
            .iter()
            .filter(|e| e.company_id == company_id)
            .map(|r| self.0.to_employee(r))
            .collect())
    }

    async fn create(&self, draft: &EmployeeDraft) -> Result<i32, DomainError> {
        let hire_date = draft
            .hire_date
            .ok_or_else(|| DomainError::Database("hire date missing on insert".to_string()))?;
        let id = self.0.fresh_id();
        self.0.employees.lock().unwrap().push(EmployeeRow {
            id,
            first_name: draft.first_name.clone(),
            middle_name: draft.middle_name.clone(),
            last_name: draft.last_name.clone(),
            position: draft.position,
            hire_date,
            company_id: draft.company_id,
        });
        Ok(id)
    }

    async fn update(&self, id: i32, draft: &EmployeeDraft) -> Result<(), DomainError> {
        let hire_date = draft
            .hire_date
            .ok_or_else(|| DomainError::Database("hire date missing on update".to_string()))?;
        let mut rows = self.0.employees.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(DomainError::NotFound)?;
        row.first_name = draft.first_name.clone();
        row.middle_name = draft.middle_name.clone();
        row.last_name = draft.last_name.clone();
        row.position = draft.position;
        row.hire_date = hire_date;
        row.company_id = draft.company_id;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let mut rows = self.0.employees.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }
}

/// Insert a minimal valid employee, bypassing service validation.
pub async fn insert_employee(
    repo: &Arc<dyn EmployeeRepository>,
    first_name: &str,
    last_name: &str,
    hire_date: NaiveDate,
    company_id: i32,
) -> i32 {
    repo.create(&EmployeeDraft {
        id: None,
        first_name: first_name.to_string(),
        middle_name: None,
        last_name: last_name.to_string(),
        position: Position::Developer,
        hire_date: Some(hire_date),
        company_id,
    })
    .await
    .unwrap()
}
