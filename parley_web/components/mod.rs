pub mod auth;
pub mod home;
pub mod layout;

pub use auth::{LoginPage, RegisterPage};
pub use home::{ConfigSummary, DashboardPage};
pub use layout::{LayoutData, PageLayout, wrap_in_html};
