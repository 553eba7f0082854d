// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{SessaoRepository, UsuarioRepository},
    models::auth::{Claims, Usuario},
};

#[derive(Clone)]
pub struct AuthService {
    usuario_repo: UsuarioRepository,
    sessao_repo: SessaoRepository,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(
        usuario_repo: UsuarioRepository,
        sessao_repo: SessaoRepository,
        jwt_secret: String,
    ) -> Self {
        Self {
            usuario_repo,
            sessao_repo,
            jwt_secret,
        }
    }

    pub async fn registrar(
        &self,
        login: &str,
        nome: &str,
        email: &str,
        senha: &str,
    ) -> Result<String, AppError> {
        // Hashing fora do runtime async (bcrypt é pesado de propósito)
        let senha_clone = senha.to_owned();
        let senha_hash =
            tokio::task::spawn_blocking(move || hash(&senha_clone, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        let usuario = self
            .usuario_repo
            .create_usuario(login, nome, email, &senha_hash)
            .await?;

        self.abrir_sessao(usuario.id).await
    }

    pub async fn entrar(&self, email: &str, senha: &str) -> Result<String, AppError> {
        let usuario = self
            .usuario_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::CredenciaisInvalidas)?;

        let senha_clone = senha.to_owned();
        let hash_clone = usuario.senha_hash.clone();

        // Executa a verificação em uma thread separada
        let senha_confere = tokio::task::spawn_blocking(move || verify(&senha_clone, &hash_clone))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !senha_confere {
            return Err(AppError::CredenciaisInvalidas);
        }

        self.abrir_sessao(usuario.id).await
    }

    /// Resolve a sessão atual a partir do token. Qualquer falha no caminho
    /// (token malformado, sessão expirada ou encerrada no logout) vira
    /// `TokenInvalido`: acesso negado, sem meio-termo.
    pub async fn validar_token(&self, token: &str) -> Result<(Usuario, Uuid), AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::TokenInvalido)?;

        let sessao = self
            .sessao_repo
            .buscar_ativa(token_data.claims.sid)
            .await?
            .ok_or(AppError::TokenInvalido)?;

        let usuario = self
            .usuario_repo
            .find_by_id(sessao.usuario_id)
            .await?
            .ok_or(AppError::TokenInvalido)?;

        Ok((usuario, sessao.id))
    }

    // Sign-out: apaga a sessão; o token que apontava para ela para de valer.
    pub async fn encerrar_sessao(&self, sessao_id: Uuid) -> Result<(), AppError> {
        self.sessao_repo.encerrar(sessao_id).await?;
        Ok(())
    }

    // Abre a sessão no banco e emite o token que aponta para ela
    async fn abrir_sessao(&self, usuario_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let expira_em = now + chrono::Duration::days(7);

        let sessao = self.sessao_repo.criar(usuario_id, expira_em).await?;

        let claims = Claims {
            sub: usuario_id,
            sid: sessao.id,
            exp: expira_em.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_de_teste() -> Claims {
        let now = Utc::now();
        Claims {
            sub: Uuid::new_v4(),
            sid: Uuid::new_v4(),
            exp: (now + chrono::Duration::days(7)).timestamp() as usize,
            iat: now.timestamp() as usize,
        }
    }

    #[test]
    fn claims_fazem_ida_e_volta_no_token() {
        let segredo = "segredo-de-teste";
        let claims = claims_de_teste();

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(segredo.as_ref()),
        )
        .unwrap();

        let decodificado = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(segredo.as_ref()),
            &Validation::default(),
        )
        .unwrap();

        assert_eq!(decodificado.claims.sub, claims.sub);
        assert_eq!(decodificado.claims.sid, claims.sid);
    }

    #[test]
    fn token_assinado_com_outro_segredo_nao_valida() {
        let claims = claims_de_teste();

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("segredo-a".as_ref()),
        )
        .unwrap();

        let resultado = decode::<Claims>(
            &token,
            &DecodingKey::from_secret("segredo-b".as_ref()),
            &Validation::default(),
        );

        assert!(resultado.is_err());
    }
}
