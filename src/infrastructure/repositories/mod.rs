//! Repository implementations using SeaORM

pub mod company_repository;
pub mod employee_repository;

pub use company_repository::SeaOrmCompanyRepository;
pub use employee_repository::SeaOrmEmployeeRepository;
