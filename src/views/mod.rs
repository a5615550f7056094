pub mod app;
pub mod context;
pub mod widgets;
pub mod header;
pub mod footer;
pub mod toaster;
pub mod home;
pub mod adoption;
pub mod how_to_help;
pub mod login;
pub mod register;
pub mod admin_dashboard;
pub mod report_dialog;

pub use app::render_app;
pub use context::ViewContext;
pub use header::render_header;
pub use footer::render_footer;
pub use toaster::render_toaster;
pub use home::render_home;
pub use adoption::render_adoption;
pub use how_to_help::render_how_to_help;
pub use login::render_login;
pub use register::render_register;
pub use admin_dashboard::render_admin_dashboard;
pub use report_dialog::render_report_dialog;
