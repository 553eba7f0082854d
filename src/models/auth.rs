// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Mapeia o CREATE TYPE cargo_usuario do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "cargo_usuario", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CargoUsuario {
    Admin,
    Vendedor,
    Supervisor,
    Atendente,
}

// Representa um usuário vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: Uuid,
    pub login: String,
    pub nome: String,
    pub email: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    pub senha_hash: String,

    pub cargo: CargoUsuario,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Uma sessão aberta. Apagar a linha é o sign-out: o token correspondente
// deixa de validar na hora.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Sessao {
    pub id: Uuid,
    pub usuario_id: Uuid,
    pub criada_em: DateTime<Utc>,
    pub expira_em: DateTime<Utc>,
}

// Dados para registro de um novo usuário
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegistroUsuarioPayload {
    #[validate(length(min = 3, message = "O login deve ter no mínimo 3 caracteres."))]
    pub login: String,
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub nome: String,
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub senha: String,
}

// Dados para login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub senha: String,
}

// Resposta de autenticação com o token
#[derive(Debug, Serialize, ToSchema)]
pub struct RespostaAuth {
    pub token: String,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,  // Subject (ID do usuário)
    pub sid: Uuid,  // ID da sessão aberta no login
    pub exp: usize, // Expiration time (quando o token expira)
    pub iat: usize, // Issued At (quando o token foi criado)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cargo_usa_os_rotulos_do_banco() {
        assert_eq!(
            serde_json::to_string(&CargoUsuario::Vendedor).unwrap(),
            r#""vendedor""#
        );
        let cargo: CargoUsuario = serde_json::from_str(r#""atendente""#).unwrap();
        assert_eq!(cargo, CargoUsuario::Atendente);
    }

    #[test]
    fn usuario_nunca_serializa_o_hash_da_senha() {
        let usuario = Usuario {
            id: Uuid::new_v4(),
            login: "maria".to_string(),
            nome: "Maria da Silva".to_string(),
            email: "maria@email.com".to_string(),
            senha_hash: "$2b$12$segredo".to_string(),
            cargo: CargoUsuario::Admin,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&usuario).unwrap();
        assert!(json.get("senhaHash").is_none());
        assert_eq!(json["login"], "maria");
    }
}
