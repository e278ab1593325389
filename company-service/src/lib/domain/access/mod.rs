pub mod errors;
pub mod models;
pub mod policy;
pub mod token;
