// ============================================================================
// ERROS - Taxonomia de falhas exibidas ao usuário
// ============================================================================
// O texto de Display de cada variante é a mensagem mostrada no toast.
// ============================================================================

use thiserror::Error;

/// Falha de validação local: bloqueia o envio, nunca chega à rede
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Informe seu nome.")]
    EmptyName,
    #[error("As senhas não conferem.")]
    PasswordMismatch,
    #[error("Preencha o campo {0}.")]
    EmptyField(&'static str),
}

/// Falha de uma chamada ao backend (status não-2xx, rede ou corpo inválido)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestFailure {
    #[error("Email ou senha inválidos")]
    InvalidCredentials,
    #[error("{0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Request(#[from] RequestFailure),
    /// Integração opcional ausente (ex.: script do Google); tratada como não-erro pelas views
    #[error("Integração indisponível: {0}")]
    IntegrationUnavailable(String),
    /// Token do provedor de identidade ilegível
    #[error("Erro ao processar login com Google.")]
    Identity(String),
    #[error("Aguarde, uma requisição já está em andamento.")]
    SubmissionInProgress,
    #[error("Erro de interface: {0}")]
    Dom(String),
}

impl From<wasm_bindgen::JsValue> for AppError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        AppError::Dom(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_toast_text() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Informe seu nome.");
        assert_eq!(
            AppError::from(ValidationError::PasswordMismatch).to_string(),
            "As senhas não conferem."
        );
        assert_eq!(
            AppError::from(RequestFailure::InvalidCredentials).to_string(),
            "Email ou senha inválidos"
        );
        assert_eq!(
            RequestFailure::Rejected("E-mail já cadastrado".into()).to_string(),
            "E-mail já cadastrado"
        );
    }
}
