// src/handlers/crm.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::crm::{Cliente, StatusCliente},
};

// =============================================================================
//  LISTAGEM E FILTRO
// =============================================================================

#[derive(Debug, Deserialize, IntoParams)]
pub struct FiltroClientesQuery {
    /// Termo de busca por nome, e-mail ou telefone
    pub busca: Option<String>,

    /// Um dos quatro status, ou "all" para não filtrar
    pub status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RespostaClientes {
    pub total: usize,
    pub clientes: Vec<Cliente>,
}

// GET /api/crm/clientes
#[utoipa::path(
    get,
    path = "/api/crm/clientes",
    tag = "CRM",
    params(FiltroClientesQuery),
    responses(
        (status = 200, description = "Leads filtrados, mais recentes primeiro", body = RespostaClientes),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn listar_clientes(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroClientesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let busca = filtro.busca.unwrap_or_default();

    // "all" (ou ausência) desliga o filtro de status
    let status = filtro.status.as_deref().and_then(StatusCliente::parse);

    let clientes = app_state
        .crm_service
        .listar_clientes(&busca, status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(RespostaClientes {
            total: clientes.len(),
            clientes,
        }),
    ))
}

// =============================================================================
//  CADASTRO
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CadastroClientePayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Maria da Silva")]
    pub nome: String,

    // Os demais campos são texto livre: o formulário não valida formato,
    // quem decide é o banco.
    #[schema(example = "11999990000")]
    pub telefone: Option<String>,

    #[schema(example = "maria@email.com")]
    pub email: Option<String>,

    #[schema(example = "12345678900")]
    pub cpf: Option<String>,

    #[schema(example = "Ex: Site, Indicação, Facebook...")]
    pub origem: Option<String>,
}

// POST /api/crm/clientes
#[utoipa::path(
    post,
    path = "/api/crm/clientes",
    tag = "CRM",
    request_body = CadastroClientePayload,
    responses(
        (status = 201, description = "Lead cadastrado com a tag padrão", body = Cliente),
        (status = 400, description = "Dados inválidos"),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn cadastrar_cliente(
    State(app_state): State<AppState>,
    Json(payload): Json<CadastroClientePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let cliente = app_state
        .crm_service
        .cadastrar_cliente(
            &payload.nome,
            payload.telefone.as_deref(),
            payload.email.as_deref(),
            payload.cpf.as_deref(),
            payload.origem.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(cliente)))
}

// =============================================================================
//  COMPOSITOR DE MENSAGENS (SUGESTÃO DA IA)
// =============================================================================

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RespostaSugestao {
    pub cliente_id: Uuid,
    pub sugestao: String,
}

// GET /api/crm/clientes/{id}/sugestao
#[utoipa::path(
    get,
    path = "/api/crm/clientes/{id}/sugestao",
    tag = "CRM",
    params(
        ("id" = Uuid, Path, description = "ID do lead")
    ),
    responses(
        (status = 200, description = "Sugestão de abordagem para o compositor", body = RespostaSugestao),
        (status = 404, description = "Cliente não encontrado"),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn gerar_sugestao(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let (cliente, sugestao) = app_state.crm_service.sugestao_para_cliente(id).await?;

    Ok((
        StatusCode::OK,
        Json(RespostaSugestao {
            cliente_id: cliente.id,
            sugestao,
        }),
    ))
}

// =============================================================================
//  AGENDAMENTO DE TAREFA (AINDA NÃO IMPLEMENTADO)
// =============================================================================

// POST /api/crm/clientes/{id}/tarefas
#[utoipa::path(
    post,
    path = "/api/crm/clientes/{id}/tarefas",
    tag = "CRM",
    params(
        ("id" = Uuid, Path, description = "ID do lead")
    ),
    responses(
        (status = 501, description = "Funcionalidade em desenvolvimento")
    ),
    security(("api_jwt" = []))
)]
pub async fn agendar_tarefa(Path(_id): Path<Uuid>) -> impl IntoResponse {
    // Nenhum estado muda aqui até o módulo de tarefas existir
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({
            "titulo": "Funcionalidade em desenvolvimento",
            "mensagem": "Agendamento de tarefas será implementado",
        })),
    )
}
