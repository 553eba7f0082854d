// src/handlers/modulos.rs

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

// Os módulos do menu que ainda não saíram do papel. Cada rota devolve o
// mesmo aviso estático que as telas placeholder do front exibem.
fn em_desenvolvimento(modulo: &str) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "modulo": modulo,
            "status": "em desenvolvimento",
        })),
    )
}

pub async fn tarefas() -> impl IntoResponse {
    em_desenvolvimento("Tarefas")
}

pub async fn chat() -> impl IntoResponse {
    em_desenvolvimento("Chat IA")
}

pub async fn campanhas() -> impl IntoResponse {
    em_desenvolvimento("Campanhas")
}

pub async fn importar() -> impl IntoResponse {
    em_desenvolvimento("Importar")
}

pub async fn integracoes() -> impl IntoResponse {
    em_desenvolvimento("Integrações")
}

pub async fn configuracoes() -> impl IntoResponse {
    em_desenvolvimento("Configurações")
}
