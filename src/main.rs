// src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas de autenticação: /me e /logout exigem o guard (entram antes do
    // `layer`); /register e /login ficam públicas.
    let auth_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .route("/logout", post(handlers::auth::logout))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ))
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // Gestão de Leads
    let crm_routes = Router::new()
        .route(
            "/clientes",
            post(handlers::crm::cadastrar_cliente).get(handlers::crm::listar_clientes),
        )
        .route("/clientes/{id}/sugestao", get(handlers::crm::gerar_sugestao))
        .route("/clientes/{id}/tarefas", post(handlers::crm::agendar_tarefa))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Indicadores do painel
    let dashboard_routes = Router::new()
        .route("/resumo", get(handlers::dashboard::get_resumo))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Módulos do menu ainda em desenvolvimento
    let modulos_routes = Router::new()
        .route("/tarefas", get(handlers::modulos::tarefas))
        .route("/chat", get(handlers::modulos::chat))
        .route("/campanhas", get(handlers::modulos::campanhas))
        .route("/importar", get(handlers::modulos::importar))
        .route("/integracoes", get(handlers::modulos::integracoes))
        .route("/configuracoes", get(handlers::modulos::configuracoes))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api/crm", crm_routes)
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/modulos", modulos_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
