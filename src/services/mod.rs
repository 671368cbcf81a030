//! Services Layer
//!
//! This module contains the validation and orchestration logic sitting between
//! the HTTP handlers and the repositories. Cross-entity invariants (company
//! existence for employees, delete-blocked-by-employees for companies) are
//! enforced here as separate store round trips. The steps are not
//! transactional; concurrent writers can race them, and the unique index and
//! foreign key in the schema are the backstop.

pub mod company_service;
pub mod employee_service;
pub mod stats_service;

#[cfg(test)]
pub(crate) mod testing;

pub use company_service::CompanyService;
pub use employee_service::EmployeeService;
pub use stats_service::StatsService;
