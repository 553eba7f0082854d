// src/db/dashboard_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::crm::{StatusCliente, StatusTarefa},
};

// Contagens do painel. Cada método é uma consulta independente contra a
// pool, de propósito: o serviço dispara todas de uma vez.
#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Leads cadastrados desde a virada do dia (data local do servidor)
    pub async fn contar_leads_hoje(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM clientes WHERE data_cadastro >= CURRENT_DATE",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    pub async fn contar_leads(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clientes")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    pub async fn contar_tarefas_pendentes(&self) -> Result<i64, AppError> {
        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tarefas WHERE status = $1")
                .bind(StatusTarefa::Pendente)
                .fetch_one(&self.pool)
                .await?;

        Ok(total)
    }

    // Interações sem resposta = mensagens aguardando atendimento.
    // A ausência de `resposta` é o único sinal de pendência.
    pub async fn contar_mensagens_pendentes(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM interacoes WHERE resposta IS NULL",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    // Leads fechados nos últimos 7 dias (pela data de atualização)
    pub async fn contar_fechados_na_semana(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM clientes
            WHERE status = $1 AND updated_at >= NOW() - INTERVAL '7 days'
            "#,
        )
        .bind(StatusCliente::Fechado)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    // Leads que entraram nos últimos 7 dias
    pub async fn contar_cadastrados_na_semana(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM clientes WHERE data_cadastro >= NOW() - INTERVAL '7 days'",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}
