use serde::{Deserialize, Serialize};

// ============================================================================
// SESSÃO - Usuário logado (existe apenas em memória)
// ============================================================================

/// Usuário autenticado. Criado no login, descartado no logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    pub fn new(email: impl Into<String>, name: impl Into<String>, is_admin: bool) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            is_admin,
        }
    }

    /// Primeiro nome para saudações no header
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
