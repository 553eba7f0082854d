// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{common::error::AppError, config::AppState, models::dashboard::ResumoDashboard};

// GET /api/dashboard/resumo
#[utoipa::path(
    get,
    path = "/api/dashboard/resumo",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Os cinco indicadores do painel, de um ciclo só", body = ResumoDashboard),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_resumo(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let resumo = app_state.dashboard_service.resumo().await?;

    Ok((StatusCode::OK, Json(resumo)))
}
