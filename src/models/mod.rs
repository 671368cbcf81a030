pub mod company;
pub mod employee;

pub use company::LEGAL_FORMS;
pub use employee::Position;
