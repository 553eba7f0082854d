// src/models/crm.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- ENUMS ---

// Mapeia o CREATE TYPE cliente_status do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "cliente_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StatusCliente {
    Novo,
    EmAndamento,
    Fechado,
    Perdido,
}

impl StatusCliente {
    /// Converte o valor vindo da query string do filtro. Qualquer coisa fora
    /// dos quatro rótulos (inclusive "all") vira `None` = sem filtro.
    pub fn parse(valor: &str) -> Option<StatusCliente> {
        match valor {
            "novo" => Some(StatusCliente::Novo),
            "em_andamento" => Some(StatusCliente::EmAndamento),
            "fechado" => Some(StatusCliente::Fechado),
            "perdido" => Some(StatusCliente::Perdido),
            _ => None,
        }
    }
}

// Mapeia o CREATE TYPE tarefa_status do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tarefa_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StatusTarefa {
    Pendente,
    EmAndamento,
    Concluida,
    Cancelada,
}

// --- CLIENTE (Lead) ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub id: Uuid,

    pub nome: String,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub cpf: Option<String>,

    pub status: StatusCliente,

    // Tags simples (Array de Strings).
    // No Postgres é TEXT[], no Rust é Vec<String>.
    pub tags: Option<Vec<String>>,

    pub origem: Option<String>,
    pub data_cadastro: DateTime<Utc>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Dados que o cadastro de leads manda para o banco. As tags não vêm do
/// formulário: todo lead novo entra com a tag padrão "quente".
#[derive(Debug, Clone, PartialEq)]
pub struct NovoCliente {
    pub nome: String,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub cpf: Option<String>,
    pub origem: Option<String>,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_cliente_serializa_em_snake_case() {
        let json = serde_json::to_string(&StatusCliente::EmAndamento).unwrap();
        assert_eq!(json, r#""em_andamento""#);

        let status: StatusCliente = serde_json::from_str(r#""perdido""#).unwrap();
        assert_eq!(status, StatusCliente::Perdido);
    }

    #[test]
    fn parse_de_status_aceita_os_quatro_rotulos() {
        assert_eq!(StatusCliente::parse("novo"), Some(StatusCliente::Novo));
        assert_eq!(
            StatusCliente::parse("em_andamento"),
            Some(StatusCliente::EmAndamento)
        );
        assert_eq!(StatusCliente::parse("fechado"), Some(StatusCliente::Fechado));
        assert_eq!(StatusCliente::parse("perdido"), Some(StatusCliente::Perdido));

        assert_eq!(StatusCliente::parse("all"), None);
        assert_eq!(StatusCliente::parse("FECHADO"), None);
    }

    #[test]
    fn status_de_tarefa_usa_os_rotulos_do_banco() {
        assert_eq!(
            serde_json::to_string(&StatusTarefa::Pendente).unwrap(),
            r#""pendente""#
        );
        assert_eq!(
            serde_json::to_string(&StatusTarefa::Concluida).unwrap(),
            r#""concluida""#
        );
    }

    #[test]
    fn cliente_serializa_campos_em_camel_case() {
        let cliente = Cliente {
            id: Uuid::new_v4(),
            nome: "Ana".to_string(),
            telefone: Some("111".to_string()),
            email: Some("a@x.com".to_string()),
            cpf: None,
            status: StatusCliente::Novo,
            tags: Some(vec!["quente".to_string()]),
            origem: Some("Site".to_string()),
            data_cadastro: Utc::now(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&cliente).unwrap();
        assert_eq!(json["status"], "novo");
        assert!(json.get("dataCadastro").is_some());
        assert_eq!(json["tags"][0], "quente");
    }
}
