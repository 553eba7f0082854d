// src/models/dashboard.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Os cinco indicadores do painel. O resumo é montado de uma vez só, depois
/// que todas as contagens terminam; nunca chega ao cliente um misto de
/// ciclos de atualização diferentes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumoDashboard {
    pub leads_novos_hoje: i64,
    pub total_leads: i64,
    pub tarefas_pendentes: i64,
    pub mensagens_pendentes: i64,

    // Percentual inteiro, 0..=100
    pub taxa_conversao: i64,
}
