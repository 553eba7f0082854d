// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- CRM ---
        handlers::crm::listar_clientes,
        handlers::crm::cadastrar_cliente,
        handlers::crm::gerar_sugestao,
        handlers::crm::agendar_tarefa,

        // --- Dashboard ---
        handlers::dashboard::get_resumo,
    ),
    components(
        schemas(
            // --- CRM ---
            models::crm::StatusCliente,
            models::crm::Cliente,
            handlers::crm::CadastroClientePayload,
            handlers::crm::RespostaClientes,
            handlers::crm::RespostaSugestao,

            // --- Dashboard ---
            models::dashboard::ResumoDashboard,
        )
    ),
    tags(
        (name = "CRM", description = "Gestão de Leads"),
        (name = "Dashboard", description = "Indicadores do Painel")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme("api_jwt", SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)));
    }
}
