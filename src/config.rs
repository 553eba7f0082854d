// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{ClienteRepository, DashboardRepository, SessaoRepository, UsuarioRepository},
    services::{
        auth::AuthService, crm_service::CrmService, dashboard_service::DashboardService,
        sugestao_service::SugestaoService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub crm_service: CrmService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let usuario_repo = UsuarioRepository::new(db_pool.clone());
        let sessao_repo = SessaoRepository::new(db_pool.clone());
        let cliente_repo = ClienteRepository::new(db_pool.clone());
        let dashboard_repo = DashboardRepository::new(db_pool.clone());

        let auth_service = AuthService::new(usuario_repo, sessao_repo, jwt_secret);
        let crm_service = CrmService::new(cliente_repo, SugestaoService);
        let dashboard_service = DashboardService::new(dashboard_repo);

        Ok(Self {
            db_pool,
            auth_service,
            crm_service,
            dashboard_service,
        })
    }
}
