pub mod auth;
pub mod crm_service;
pub mod dashboard_service;
pub mod sugestao_service;
