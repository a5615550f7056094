pub mod session;
pub mod page;
pub mod auth;
pub mod donation;
pub mod animal;
pub mod notification;

pub use session::User;
pub use page::Page;
pub use auth::{ApiErrorBody, IdentityClaims, LoginRequest, LoginResponse, RegisterRequest};
pub use donation::{DonationPlan, HelpAction, HelpWay, PaymentPayload, PlanId, HELP_WAYS, PIX_KEY, PLANS};
pub use animal::{Animal, Species, ANIMALS};
pub use notification::{Toast, ToastKind, ToastMessage};
