pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::department;
pub use domain::employee;
pub use domain::identity;
pub use domain::project;
pub use outbound::repositories;
