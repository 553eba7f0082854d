pub mod usuario_repo;
pub use usuario_repo::UsuarioRepository;
pub mod sessao_repo;
pub use sessao_repo::SessaoRepository;
pub mod cliente_repo;
pub use cliente_repo::ClienteRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
