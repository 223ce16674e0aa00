pub mod components;
pub mod handlers;
pub mod routes;
mod http;

pub use http::*;

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

/// Sets the locale used to render pages and API messages.
pub fn set_locale(locale: &str) {
    if available_locales!().iter().any(|l| *l == locale) {
        rust_i18n::set_locale(locale);
    } else {
        tracing::warn!("Unknown locale '{locale}', falling back to 'en'");
        rust_i18n::set_locale("en");
    }
}
