// src/services/crm_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::ClienteRepository,
    models::crm::{Cliente, NovoCliente, StatusCliente},
    services::sugestao_service::SugestaoService,
};

// Tag atribuída a todo lead recém-cadastrado, sem olhar nenhum sinal.
// Placeholder do futuro modelo de pontuação; comportamento intencional.
const TAG_PADRAO: &str = "quente";

#[derive(Clone)]
pub struct CrmService {
    repo: ClienteRepository,
    sugestao: SugestaoService,
}

impl CrmService {
    pub fn new(repo: ClienteRepository, sugestao: SugestaoService) -> Self {
        Self { repo, sugestao }
    }

    /// Lista de leads com filtro em memória: o banco devolve a lista
    /// completa (mais recentes primeiro) e os predicados de busca/status
    /// rodam sobre ela aqui, nunca no SQL.
    pub async fn listar_clientes(
        &self,
        busca: &str,
        status: Option<StatusCliente>,
    ) -> Result<Vec<Cliente>, AppError> {
        let todos = self.repo.listar().await?;
        Ok(filtrar_clientes(&todos, busca, status))
    }

    pub async fn cadastrar_cliente(
        &self,
        nome: &str,
        telefone: Option<&str>,
        email: Option<&str>,
        cpf: Option<&str>,
        origem: Option<&str>,
    ) -> Result<Cliente, AppError> {
        let novo = montar_cadastro(nome, telefone, email, cpf, origem);
        self.repo.inserir(&novo).await
    }

    /// Carrega o lead e pede uma sugestão de abordagem ao stub de IA.
    /// Cada chamada sorteia uma sugestão nova.
    pub async fn sugestao_para_cliente(&self, id: Uuid) -> Result<(Cliente, String), AppError> {
        let cliente = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ClienteNaoEncontrado)?;

        let sugestao = self.sugestao.gerar(&cliente);
        Ok((cliente, sugestao))
    }
}

/// Monta os dados do INSERT a partir do formulário de cadastro. O formulário
/// não manda tags; todo lead novo entra com `{"quente"}`.
fn montar_cadastro(
    nome: &str,
    telefone: Option<&str>,
    email: Option<&str>,
    cpf: Option<&str>,
    origem: Option<&str>,
) -> NovoCliente {
    NovoCliente {
        nome: nome.to_string(),
        telefone: telefone.map(str::to_string),
        email: email.map(str::to_string),
        cpf: cpf.map(str::to_string),
        origem: origem.map(str::to_string),
        tags: vec![TAG_PADRAO.to_string()],
    }
}

/// Filtro do registro de leads, puro e sobre a lista já carregada.
///
/// Busca: substring sem caixa em nome OU e-mail, ou substring crua (com
/// caixa) no telefone; termo vazio casa com tudo. Status: igualdade exata
/// quando há seletor. Os dois predicados são E.
fn filtrar_clientes(
    clientes: &[Cliente],
    busca: &str,
    status: Option<StatusCliente>,
) -> Vec<Cliente> {
    let busca_minuscula = busca.to_lowercase();

    clientes
        .iter()
        .filter(|cliente| {
            busca.is_empty()
                || cliente.nome.to_lowercase().contains(&busca_minuscula)
                || cliente
                    .email
                    .as_deref()
                    .is_some_and(|email| email.to_lowercase().contains(&busca_minuscula))
                || cliente
                    .telefone
                    .as_deref()
                    .is_some_and(|telefone| telefone.contains(busca))
        })
        .filter(|cliente| status.is_none_or(|s| cliente.status == s))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn cliente(nome: &str, email: &str, telefone: &str, status: StatusCliente) -> Cliente {
        Cliente {
            id: Uuid::new_v4(),
            nome: nome.to_string(),
            telefone: Some(telefone.to_string()),
            email: Some(email.to_string()),
            cpf: None,
            status,
            tags: Some(vec![TAG_PADRAO.to_string()]),
            origem: Some("Site".to_string()),
            data_cadastro: Utc::now(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn ana_e_bob() -> Vec<Cliente> {
        vec![
            cliente("Ana", "a@x.com", "111", StatusCliente::Novo),
            cliente("Bob", "b@x.com", "222", StatusCliente::Fechado),
        ]
    }

    #[test]
    fn busca_sem_caixa_por_nome() {
        let resultado = filtrar_clientes(&ana_e_bob(), "an", None);
        assert_eq!(resultado.len(), 1);
        assert_eq!(resultado[0].nome, "Ana");
    }

    #[test]
    fn filtro_de_status_exato() {
        let resultado = filtrar_clientes(&ana_e_bob(), "", Some(StatusCliente::Fechado));
        assert_eq!(resultado.len(), 1);
        assert_eq!(resultado[0].nome, "Bob");
    }

    #[test]
    fn termo_vazio_e_sem_status_devolve_tudo_na_mesma_ordem() {
        let lista = ana_e_bob();
        let resultado = filtrar_clientes(&lista, "", None);
        assert_eq!(resultado.len(), 2);
        assert_eq!(resultado[0].nome, "Ana");
        assert_eq!(resultado[1].nome, "Bob");
    }

    #[test]
    fn busca_por_email_ignora_caixa() {
        let resultado = filtrar_clientes(&ana_e_bob(), "B@X", None);
        assert_eq!(resultado.len(), 1);
        assert_eq!(resultado[0].nome, "Bob");
    }

    #[test]
    fn busca_por_telefone_e_crua() {
        let resultado = filtrar_clientes(&ana_e_bob(), "22", None);
        assert_eq!(resultado.len(), 1);
        assert_eq!(resultado[0].nome, "Bob");
    }

    #[test]
    fn predicados_de_busca_e_status_sao_combinados_com_e() {
        // "b@x" acha o Bob, mas o status "novo" exclui ele
        let resultado = filtrar_clientes(&ana_e_bob(), "b@x", Some(StatusCliente::Novo));
        assert!(resultado.is_empty());
    }

    #[test]
    fn cliente_sem_email_nem_telefone_nao_casa_com_busca() {
        let mut solitario = cliente("Carla", "", "", StatusCliente::Novo);
        solitario.email = None;
        solitario.telefone = None;

        let resultado = filtrar_clientes(&[solitario], "carla", None);
        assert_eq!(resultado.len(), 1, "nome ainda casa");

        let mut sem_nada = cliente("Dante", "", "", StatusCliente::Novo);
        sem_nada.email = None;
        sem_nada.telefone = None;
        let resultado = filtrar_clientes(&[sem_nada], "x.com", None);
        assert!(resultado.is_empty());
    }

    #[test]
    fn resultado_e_sempre_subconjunto_da_origem() {
        let lista = ana_e_bob();
        for busca in ["", "a", "x.com", "999", "ZZZ"] {
            for status in [None, Some(StatusCliente::Novo), Some(StatusCliente::Perdido)] {
                let resultado = filtrar_clientes(&lista, busca, status);
                assert!(resultado.len() <= lista.len());
                for c in &resultado {
                    assert!(lista.iter().any(|orig| orig.id == c.id));
                    if let Some(s) = status {
                        assert_eq!(c.status, s);
                    }
                }
            }
        }
    }

    #[test]
    fn cadastro_sempre_entra_com_a_tag_quente() {
        let novo = montar_cadastro(
            "Maria da Silva",
            Some("11999990000"),
            Some("maria@email.com"),
            Some("12345678900"),
            Some("Indicação"),
        );
        assert_eq!(novo.tags, vec!["quente".to_string()]);

        // Mesmo com o formulário inteiro vazio além do nome
        let minimo = montar_cadastro("Zé", None, None, None, None);
        assert_eq!(minimo.tags, vec!["quente".to_string()]);
        assert_eq!(minimo.telefone, None);
    }
}
