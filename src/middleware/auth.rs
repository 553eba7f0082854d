// src/middleware/auth.rs

use axum::{
    extract::{FromRequestParts, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{common::error::AppError, config::AppState, models::auth::Usuario};

// O guard de sessão: tudo que fica atrás dele exige um token apontando para
// uma sessão viva. Qualquer falha na resolução nega o acesso com 401,
// inclusive erro de banco: fechado por padrão.
pub async fn auth_guard(
    State(app_state): State<AppState>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, AppError> {
    let headers = request.headers();
    let auth_header = headers
        .get("Authorization")
        .and_then(|value| value.to_str().ok());

    if let Some(auth_header) = auth_header {
        if let Some(token) = auth_header.strip_prefix("Bearer ") {
            let (usuario, sessao_id) = app_state
                .auth_service
                .validar_token(token)
                .await
                .map_err(|_| AppError::TokenInvalido)?;

            // Insere o usuário e a sessão nos "extensions" da requisição
            request.extensions_mut().insert(usuario);
            request.extensions_mut().insert(SessaoAtual(sessao_id));
            return Ok(next.run(request).await);
        }
    }

    Err(AppError::TokenInvalido)
}

// Extrator para obter o usuário autenticado diretamente nos handlers
pub struct UsuarioAutenticado(pub Usuario);

impl<S> FromRequestParts<S> for UsuarioAutenticado
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Usuario>()
            .cloned()
            .map(UsuarioAutenticado)
            .ok_or(AppError::TokenInvalido)
    }
}

// A sessão que validou a requisição atual; o logout precisa dela
#[derive(Clone)]
pub struct SessaoAtual(pub Uuid);

impl<S> FromRequestParts<S> for SessaoAtual
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessaoAtual>()
            .cloned()
            .ok_or(AppError::TokenInvalido)
    }
}
