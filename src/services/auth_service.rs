// ============================================================================
// AUTH SERVICE - Login e cadastro no backend
// ============================================================================

use async_trait::async_trait;
use crate::error::RequestFailure;
use crate::models::{ApiErrorBody, LoginRequest, LoginResponse, RegisterRequest, User};
use crate::services::api_client::{ApiClient, HttpReply};

pub const LOGIN_PATH: &str = "/api/login";
pub const REGISTER_PATH: &str = "/api/register";

/// Mensagem usada quando o backend não explica a falha do cadastro
pub const REGISTER_FALLBACK_MESSAGE: &str = "Erro ao criar conta. Tente novamente.";

/// Backend de autenticação. Implementado via HTTP em produção e por fakes nos testes.
#[async_trait(?Send)]
pub trait AuthBackend {
    async fn login(&self, email: &str, password: &str) -> Result<User, RequestFailure>;
    async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), RequestFailure>;
}

/// Interpreta a resposta de POST /api/login.
/// Qualquer não-2xx ou corpo inválido vira InvalidCredentials.
pub fn interpret_login_reply(reply: &HttpReply) -> Result<User, RequestFailure> {
    if !reply.ok() {
        return Err(RequestFailure::InvalidCredentials);
    }
    serde_json::from_str::<LoginResponse>(&reply.body)
        .map(|data| data.user)
        .map_err(|e| {
            log::warn!("⚠️ [AUTH] Corpo de login inválido: {}", e);
            RequestFailure::InvalidCredentials
        })
}

/// Interpreta a resposta de POST /api/register.
/// Em falha usa o campo `message` do corpo, se houver.
pub fn interpret_register_reply(reply: &HttpReply) -> Result<(), RequestFailure> {
    if reply.ok() {
        return Ok(());
    }
    let message = serde_json::from_str::<ApiErrorBody>(&reply.body)
        .ok()
        .and_then(|body| body.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| REGISTER_FALLBACK_MESSAGE.to_string());
    Err(RequestFailure::Rejected(message))
}

/// Backend real via fetch
#[derive(Clone, Default)]
pub struct HttpAuthBackend {
    api: ApiClient,
}

impl HttpAuthBackend {
    pub fn new() -> Self {
        Self { api: ApiClient::new() }
    }
}

#[async_trait(?Send)]
impl AuthBackend for HttpAuthBackend {
    async fn login(&self, email: &str, password: &str) -> Result<User, RequestFailure> {
        log::info!("🔐 [AUTH] Login para {}", email);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.api.post_json(LOGIN_PATH, &request).await {
            Ok(reply) => interpret_login_reply(&reply),
            Err(e) => {
                // rede fora do ar não é diferenciada de credencial inválida
                log::error!("❌ [AUTH] Falha de rede no login: {}", e);
                Err(RequestFailure::InvalidCredentials)
            }
        }
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), RequestFailure> {
        log::info!("📝 [AUTH] Cadastro para {}", email);
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.api.post_json(REGISTER_PATH, &request).await {
            Ok(reply) => interpret_register_reply(&reply),
            Err(e) => {
                log::error!("❌ [AUTH] Falha de rede no cadastro: {}", e);
                Err(RequestFailure::Rejected(REGISTER_FALLBACK_MESSAGE.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_success_reads_nested_user() {
        let reply = HttpReply::new(
            200,
            r#"{"user":{"name":"Carla","email":"carla@ex.com","isAdmin":true},"token":"abc"}"#,
        );
        let user = interpret_login_reply(&reply).unwrap();
        assert_eq!(user, User::new("carla@ex.com", "Carla", true));
    }

    #[test]
    fn login_non_2xx_is_invalid_credentials() {
        for status in [400, 401, 403, 404, 500, 503] {
            let reply = HttpReply::new(status, r#"{"message":"qualquer coisa"}"#);
            assert_eq!(interpret_login_reply(&reply), Err(RequestFailure::InvalidCredentials));
        }
    }

    #[test]
    fn login_malformed_body_is_invalid_credentials() {
        let reply = HttpReply::new(200, "<html>oops</html>");
        assert_eq!(interpret_login_reply(&reply), Err(RequestFailure::InvalidCredentials));
    }

    #[test]
    fn register_success_ignores_body() {
        assert_eq!(interpret_register_reply(&HttpReply::new(201, "")), Ok(()));
    }

    #[test]
    fn register_failure_uses_server_message() {
        let reply = HttpReply::new(409, r#"{"message":"E-mail já cadastrado"}"#);
        assert_eq!(
            interpret_register_reply(&reply),
            Err(RequestFailure::Rejected("E-mail já cadastrado".to_string()))
        );
    }

    #[test]
    fn register_failure_without_message_uses_fallback() {
        for body in ["", "not json", "{}", r#"{"message":""}"#] {
            let reply = HttpReply::new(500, body);
            assert_eq!(
                interpret_register_reply(&reply),
                Err(RequestFailure::Rejected(REGISTER_FALLBACK_MESSAGE.to_string()))
            );
        }
    }
}
