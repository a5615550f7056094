use serde::{Deserialize, Serialize};
use crate::models::session::User;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Corpo de sucesso de POST /api/login
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub user: User,
    #[serde(default)]
    pub token: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Corpo opcional de erro do backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Campos lidos do payload do token do provedor de identidade
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct IdentityClaims {
    pub email: String,
    pub name: String,
}

impl IdentityClaims {
    /// Usuários vindos do Google nunca são admin
    pub fn into_user(self) -> User {
        User::new(self.email, self.name, false)
    }
}
