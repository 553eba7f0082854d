// src/handlers/auth.rs

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::{SessaoAtual, UsuarioAutenticado},
    models::auth::{LoginPayload, RegistroUsuarioPayload, RespostaAuth, Usuario},
};

// Handler de registro
pub async fn register(
    State(app_state): State<AppState>,
    Json(payload): Json<RegistroUsuarioPayload>,
) -> Result<Json<RespostaAuth>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let token = app_state
        .auth_service
        .registrar(&payload.login, &payload.nome, &payload.email, &payload.senha)
        .await?;

    Ok(Json(RespostaAuth { token }))
}

// Handler de login
pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<RespostaAuth>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let token = app_state
        .auth_service
        .entrar(&payload.email, &payload.senha)
        .await?;

    Ok(Json(RespostaAuth { token }))
}

// Handler da rota protegida /me, a "sessão atual" do front
pub async fn get_me(UsuarioAutenticado(usuario): UsuarioAutenticado) -> Json<Usuario> {
    Json(usuario)
}

// Sign-out: encerra a sessão no banco; o token morre junto
pub async fn logout(
    State(app_state): State<AppState>,
    SessaoAtual(sessao_id): SessaoAtual,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    app_state.auth_service.encerrar_sessao(sessao_id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "mensagem": "Sessão encerrada." })),
    ))
}
