//! Application state containing services and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{CompanyRepository, EmployeeRepository};
use crate::infrastructure::{SeaOrmCompanyRepository, SeaOrmEmployeeRepository};
use crate::services::{CompanyService, EmployeeService, StatsService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection (for direct queries where needed)
    db: DatabaseConnection,
    /// Company validation/orchestration service
    pub company_service: CompanyService,
    /// Employee validation/orchestration service
    pub employee_service: EmployeeService,
    /// Dashboard and statistics service
    pub stats_service: StatsService,
}

impl AppState {
    /// Create a new AppState with all repositories and services initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let company_repo: Arc<dyn CompanyRepository> =
            Arc::new(SeaOrmCompanyRepository::new(db.clone()));
        let employee_repo: Arc<dyn EmployeeRepository> =
            Arc::new(SeaOrmEmployeeRepository::new(db.clone()));

        // The employee service sees both repositories: its validation needs
        // the company lookup. The company side's dependent check lives on the
        // company repository itself.
        let company_service = CompanyService::new(company_repo.clone());
        let employee_service = EmployeeService::new(company_repo.clone(), employee_repo.clone());
        let stats_service = StatsService::new(company_repo, employee_repo);

        Self {
            db,
            company_service,
            employee_service,
            stats_service,
        }
    }

    /// Get the database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
