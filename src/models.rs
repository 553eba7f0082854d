pub mod auth;
pub mod crm;
pub mod dashboard;
