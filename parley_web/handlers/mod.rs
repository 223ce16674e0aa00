pub mod api;

mod auth;
mod helpers;
mod home;

pub use auth::{LoginForm, RegisterForm, login, login_page, logout, register, register_page};
pub(crate) use helpers::*;
pub use helpers::{CSRF_COOKIE, SESSION_COOKIE};
pub use home::home;
