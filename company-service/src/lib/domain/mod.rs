pub mod access;
pub mod department;
pub mod employee;
pub mod identity;
pub mod paging;
pub mod project;
pub mod uniqueness;
pub mod validation;
pub mod values;
