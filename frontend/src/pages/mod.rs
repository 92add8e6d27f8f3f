pub mod dashboard;
pub mod employee;
pub mod hr;
pub mod login;
pub mod register;
