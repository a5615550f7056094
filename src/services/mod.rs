pub mod api_client;
pub mod auth_service;
pub mod payment_service;
pub mod identity_service;
pub mod clipboard_service;

pub use api_client::{ApiClient, HttpReply};
pub use auth_service::{AuthBackend, HttpAuthBackend};
pub use payment_service::quote;
pub use identity_service::{decode_credential, GoogleIdentity};
