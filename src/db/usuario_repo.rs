// src/db/usuario_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::auth::Usuario};

// O repositório de usuários, responsável por todas as interações com a
// tabela 'usuarios'
#[derive(Clone)]
pub struct UsuarioRepository {
    pool: PgPool,
}

impl UsuarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Busca um usuário pelo seu e-mail
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Usuario>, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>(
            r#"
            SELECT id, login, nome, email, senha_hash, cargo, created_at, updated_at
            FROM usuarios
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(usuario)
    }

    // Busca um usuário pelo seu ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Usuario>, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>(
            r#"
            SELECT id, login, nome, email, senha_hash, cargo, created_at, updated_at
            FROM usuarios
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(usuario)
    }

    // Cria um novo usuário no banco de dados.
    // Com tratamento de erro específico para e-mail/login duplicados.
    pub async fn create_usuario(
        &self,
        login: &str,
        nome: &str,
        email: &str,
        senha_hash: &str,
    ) -> Result<Usuario, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>(
            r#"
            INSERT INTO usuarios (login, nome, email, senha_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, login, nome, email, senha_hash, cargo, created_at, updated_at
            "#,
        )
        .bind(login)
        .bind(nome)
        .bind(email)
        .bind(senha_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    match db_err.constraint() {
                        // Nomes padrão que o Postgres cria para os UNIQUE
                        Some("usuarios_email_key") => return AppError::EmailJaExiste,
                        Some("usuarios_login_key") => return AppError::LoginJaExiste,
                        _ => {}
                    }
                }
            }
            e.into()
        })?;

        Ok(usuario)
    }
}
