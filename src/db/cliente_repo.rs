// src/db/cliente_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::crm::{Cliente, NovoCliente},
};

#[derive(Clone)]
pub struct ClienteRepository {
    pool: PgPool,
}

impl ClienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Busca todos os leads, do mais recente para o mais antigo.
    /// O filtro de busca/status NÃO entra aqui: ele roda em memória sobre a
    /// lista completa, no serviço.
    pub async fn listar(&self) -> Result<Vec<Cliente>, AppError> {
        let clientes = sqlx::query_as::<_, Cliente>(
            r#"
            SELECT
                id, nome, telefone, email, cpf, status, tags, origem,
                data_cadastro, created_at, updated_at
            FROM clientes
            ORDER BY data_cadastro DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(clientes)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            SELECT
                id, nome, telefone, email, cpf, status, tags, origem,
                data_cadastro, created_at, updated_at
            FROM clientes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cliente)
    }

    // Insere um lead. Status, id e timestamps ficam por conta dos defaults
    // do banco; a linha devolvida já vem com tudo preenchido.
    pub async fn inserir(&self, novo: &NovoCliente) -> Result<Cliente, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO clientes (nome, telefone, email, cpf, origem, tags)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING
                id, nome, telefone, email, cpf, status, tags, origem,
                data_cadastro, created_at, updated_at
            "#,
        )
        .bind(&novo.nome)
        .bind(&novo.telefone)
        .bind(&novo.email)
        .bind(&novo.cpf)
        .bind(&novo.origem)
        .bind(&novo.tags)
        .fetch_one(&self.pool)
        .await?;

        Ok(cliente)
    }
}
