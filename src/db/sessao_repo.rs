// src/db/sessao_repo.rs

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::auth::Sessao};

// Sessões abertas. O guard consulta aqui a cada requisição protegida;
// o logout apaga a linha e o token morre junto.
#[derive(Clone)]
pub struct SessaoRepository {
    pool: PgPool,
}

impl SessaoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn criar(
        &self,
        usuario_id: Uuid,
        expira_em: DateTime<Utc>,
    ) -> Result<Sessao, AppError> {
        let sessao = sqlx::query_as::<_, Sessao>(
            r#"
            INSERT INTO sessoes (usuario_id, expira_em)
            VALUES ($1, $2)
            RETURNING id, usuario_id, criada_em, expira_em
            "#,
        )
        .bind(usuario_id)
        .bind(expira_em)
        .fetch_one(&self.pool)
        .await?;

        Ok(sessao)
    }

    // Só devolve a sessão se ela ainda não expirou
    pub async fn buscar_ativa(&self, id: Uuid) -> Result<Option<Sessao>, AppError> {
        let sessao = sqlx::query_as::<_, Sessao>(
            r#"
            SELECT id, usuario_id, criada_em, expira_em
            FROM sessoes
            WHERE id = $1 AND expira_em > NOW()
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sessao)
    }

    pub async fn encerrar(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM sessoes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
