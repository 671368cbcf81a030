//! Statistics Service - dashboard aggregates over companies and employees

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Datelike, Local};
use serde::Serialize;

use crate::domain::{CompanyRepository, DomainError, Employee, EmployeeRepository};

/// Headline numbers for the dashboard page.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct DashboardSummary {
    pub total_companies: usize,
    pub total_employees: usize,
    pub companies_with_employees: usize,
    /// The five most recently hired employees
    pub recent_employees: Vec<Employee>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CompanyStatistics {
    pub total_companies: usize,
    pub companies_with_employees: usize,
    pub companies_without_employees: usize,
    pub average_employees_per_company: f64,
    pub largest_company_size: i64,
    /// How often each legal form occurs
    pub legal_form_counts: BTreeMap<String, usize>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct EmployeeStatistics {
    pub total_employees: usize,
    pub employees_by_position: BTreeMap<String, usize>,
    pub average_tenure_years: f64,
    pub hires_this_year: usize,
    pub longest_serving_employee: Option<Employee>,
}

/// Read-only aggregates; everything is derived from the two list queries.
#[derive(Clone)]
pub struct StatsService {
    companies: Arc<dyn CompanyRepository>,
    employees: Arc<dyn EmployeeRepository>,
}

impl StatsService {
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        employees: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self {
            companies,
            employees,
        }
    }

    pub async fn dashboard(&self) -> Result<DashboardSummary, DomainError> {
        let companies = self
            .companies
            .find_all()
            .await
            .map_err(|e| e.in_context("loading dashboard"))?;
        let mut employees = self
            .employees
            .find_all()
            .await
            .map_err(|e| e.in_context("loading dashboard"))?;

        let companies_with_employees =
            companies.iter().filter(|c| c.employee_count > 0).count();

        employees.sort_by(|a, b| b.hire_date.cmp(&a.hire_date));
        let total_employees = employees.len();
        employees.truncate(5);

        Ok(DashboardSummary {
            total_companies: companies.len(),
            total_employees,
            companies_with_employees,
            recent_employees: employees,
        })
    }

    pub async fn company_statistics(&self) -> Result<CompanyStatistics, DomainError> {
        let companies = self
            .companies
            .find_all()
            .await
            .map_err(|e| e.in_context("computing company statistics"))?;

        let with_employees = companies.iter().filter(|c| c.employee_count > 0).count();
        let total_employees: i64 = companies.iter().map(|c| c.employee_count).sum();
        let average = if companies.is_empty() {
            0.0
        } else {
            total_employees as f64 / companies.len() as f64
        };

        let mut legal_form_counts = BTreeMap::new();
        for company in &companies {
            *legal_form_counts.entry(company.legal_form.clone()).or_insert(0) += 1;
        }

        Ok(CompanyStatistics {
            total_companies: companies.len(),
            companies_with_employees: with_employees,
            companies_without_employees: companies.len() - with_employees,
            average_employees_per_company: average,
            largest_company_size: companies
                .iter()
                .map(|c| c.employee_count)
                .max()
                .unwrap_or(0),
            legal_form_counts,
        })
    }

    pub async fn employee_statistics(&self) -> Result<EmployeeStatistics, DomainError> {
        let employees = self
            .employees
            .find_all()
            .await
            .map_err(|e| e.in_context("computing employee statistics"))?;

        let today = Local::now().date_naive();

        let mut employees_by_position = BTreeMap::new();
        for employee in &employees {
            *employees_by_position
                .entry(employee.position.label().to_string())
                .or_insert(0) += 1;
        }

        let average_tenure_years = if employees.is_empty() {
            0.0
        } else {
            let total_days: i64 = employees
                .iter()
                .map(|e| (today - e.hire_date).num_days().max(0))
                .sum();
            total_days as f64 / employees.len() as f64 / 365.25
        };

        let hires_this_year = employees
            .iter()
            .filter(|e| e.hire_date.year() == today.year())
            .count();

        let longest_serving_employee = employees
            .iter()
            .min_by_key(|e| e.hire_date)
            .cloned();

        Ok(EmployeeStatistics {
            total_employees: employees.len(),
            employees_by_position,
            average_tenure_years,
            hires_this_year,
            longest_serving_employee,
        })
    }
}
