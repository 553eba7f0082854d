// src/services/dashboard_service.rs

use crate::{common::error::AppError, db::DashboardRepository, models::dashboard::ResumoDashboard};

#[derive(Clone)]
pub struct DashboardService {
    repo: DashboardRepository,
}

impl DashboardService {
    pub fn new(repo: DashboardRepository) -> Self {
        Self { repo }
    }

    /// Monta os indicadores do painel. As contagens são independentes e
    /// disparam todas de uma vez; o resumo só é montado quando a última
    /// termina. Se qualquer uma falhar, o painel inteiro falha: o cliente
    /// nunca recebe um misto de ciclos de atualização.
    pub async fn resumo(&self) -> Result<ResumoDashboard, AppError> {
        let (
            leads_novos_hoje,
            total_leads,
            tarefas_pendentes,
            mensagens_pendentes,
            fechados_semana,
            cadastrados_semana,
        ) = tokio::try_join!(
            self.repo.contar_leads_hoje(),
            self.repo.contar_leads(),
            self.repo.contar_tarefas_pendentes(),
            self.repo.contar_mensagens_pendentes(),
            self.repo.contar_fechados_na_semana(),
            self.repo.contar_cadastrados_na_semana(),
        )?;

        Ok(montar_resumo(
            leads_novos_hoje,
            total_leads,
            tarefas_pendentes,
            mensagens_pendentes,
            fechados_semana,
            cadastrados_semana,
        ))
    }
}

fn montar_resumo(
    leads_novos_hoje: i64,
    total_leads: i64,
    tarefas_pendentes: i64,
    mensagens_pendentes: i64,
    fechados_semana: i64,
    cadastrados_semana: i64,
) -> ResumoDashboard {
    ResumoDashboard {
        leads_novos_hoje,
        total_leads,
        tarefas_pendentes,
        mensagens_pendentes,
        taxa_conversao: taxa_conversao(fechados_semana, cadastrados_semana),
    }
}

/// Percentual inteiro de conversão da semana: fechados / cadastrados * 100,
/// arredondado. Sem cadastros novos a taxa é 0, nunca divisão por zero.
/// Teto em 100: fechamento de leads antigos não estoura o percentual.
fn taxa_conversao(fechados: i64, cadastrados: i64) -> i64 {
    if cadastrados == 0 {
        return 0;
    }

    let percentual = (fechados as f64 / cadastrados as f64 * 100.0).round() as i64;
    percentual.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxa_com_metade_dos_leads_fechados_e_50() {
        assert_eq!(taxa_conversao(1, 2), 50);
    }

    #[test]
    fn semana_sem_cadastros_tem_taxa_zero() {
        assert_eq!(taxa_conversao(0, 0), 0);
        assert_eq!(taxa_conversao(5, 0), 0);
    }

    #[test]
    fn taxa_arredonda_para_o_inteiro_mais_proximo() {
        assert_eq!(taxa_conversao(1, 3), 33);
        assert_eq!(taxa_conversao(2, 3), 67);
    }

    #[test]
    fn taxa_fica_sempre_entre_0_e_100() {
        for fechados in 0..=10 {
            for cadastrados in 0..=10 {
                let taxa = taxa_conversao(fechados, cadastrados);
                assert!((0..=100).contains(&taxa), "taxa fora da faixa: {taxa}");
            }
        }

        // Mais fechamentos que cadastros na semana satura em 100
        assert_eq!(taxa_conversao(3, 2), 100);
    }

    #[test]
    fn resumo_reflete_as_contagens_do_cenario() {
        // leadsHoje=1, total=3, tarefas=0, mensagens=1, fechados(7d)=1, cadastrados(7d)=2
        let resumo = montar_resumo(1, 3, 0, 1, 1, 2);

        assert_eq!(
            resumo,
            ResumoDashboard {
                leads_novos_hoje: 1,
                total_leads: 3,
                tarefas_pendentes: 0,
                mensagens_pendentes: 1,
                taxa_conversao: 50,
            }
        );
    }
}
