use dotenvy::dotenv;
use std::env;

use parley_types::{Result, errors::AppError};

/// Minimum length of the secret used to sign cookies.
pub const MIN_COOKIE_SECRET_LEN: usize = 64;

#[derive(Debug, Clone)]
pub struct Config {
    pub auth_cookie_secret: String,
    pub http_port: u16,
    pub locale: String,
    pub page_size: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let auth_cookie_secret = match env::var("PARLEY_COOKIE_SECRET") {
            Ok(val) => val,
            Err(_) => return Err(AppError::MissingEnv("PARLEY_COOKIE_SECRET").into()),
        };

        let http_port = match env::var("PARLEY_HTTP_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(8080),
            Err(_) => 8080,
        };

        let locale = match env::var("PARLEY_LOCALE") {
            Ok(val) if !val.trim().is_empty() => val,
            _ => "en".to_string(),
        };

        let page_size = match env::var("PARLEY_PAGE_SIZE") {
            Ok(val) => val.parse::<u32>().unwrap_or(10).clamp(1, 100),
            Err(_) => 10,
        };

        Self::new(auth_cookie_secret, http_port, locale, page_size)
    }

    pub fn new(
        auth_cookie_secret: String,
        http_port: u16,
        locale: String,
        page_size: u32,
    ) -> Result<Self> {
        if auth_cookie_secret.len() < MIN_COOKIE_SECRET_LEN {
            return Err(AppError::InvalidCookieSecret.into());
        }

        Ok(Self {
            auth_cookie_secret,
            http_port,
            locale,
            page_size,
        })
    }
}
