// ============================================================================
// API CLIENT - SOMENTE comunicação HTTP (stateless)
// ============================================================================
// Uma única tentativa por chamada: sem retry, sem timeout, sem cache.
// ============================================================================

use gloo_net::http::Request;
use serde::Serialize;
use crate::config::CONFIG;

/// Resposta crua do backend: status + corpo em texto
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Equivalente a `response.ok` do fetch
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url.clone(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// POST com corpo JSON. Err apenas quando a requisição nem chega a ter resposta.
    pub async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<HttpReply, String> {
        let url = self.url(path);
        log::debug!("🌐 [API] POST {}", url);

        let response = Request::post(&url)
            .json(body)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let status = response.status();
        // Corpo ilegível vira string vazia; quem interpreta decide o que fazer
        let body = response.text().await.unwrap_or_default();

        log::debug!("🌐 [API] {} -> HTTP {}", url, status);
        Ok(HttpReply { status, body })
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_matches_fetch_semantics() {
        assert!(HttpReply::new(200, "").ok());
        assert!(HttpReply::new(204, "").ok());
        assert!(!HttpReply::new(199, "").ok());
        assert!(!HttpReply::new(301, "").ok());
        assert!(!HttpReply::new(401, "").ok());
    }

    #[test]
    fn url_joins_without_double_slash() {
        let api = ApiClient::with_base_url("http://localhost:3000/");
        assert_eq!(api.url("/api/login"), "http://localhost:3000/api/login");
        assert_eq!(api.url("api/register"), "http://localhost:3000/api/register");
    }
}
