pub mod login_viewmodel;
pub mod register_viewmodel;
pub mod donation_viewmodel;
pub mod report_viewmodel;

pub use login_viewmodel::{LoginForm, LoginViewModel};
pub use register_viewmodel::{RegisterForm, RegisterViewModel};
pub use donation_viewmodel::DonationViewModel;
pub use report_viewmodel::AnimalReport;
