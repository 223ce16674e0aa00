use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::SignedCookieJar;
use dioxus::prelude::*;

use parley_app::{
    command_handlers::RegisterUserCommandHandler,
    cqrs::{commands::RegisterUser, queries::AuthenticateUser},
    queries_handlers::AuthenticateUserHandler,
};
use parley_types::errors::{AppError, ApplicationError, DbError};

use crate::{
    components::{LayoutData, LoginPage, PageLayout, RegisterPage},
    handlers::{
        CsrfForm, HasCsrfToken, end_session, ensure_not_authenticated, generate_csrf,
        render_html, start_session,
    },
    http::AppState,
    routes::Route,
};

/// Form for login.
#[derive(serde::Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub csrf_token: String,
}

impl HasCsrfToken for LoginForm {
    fn csrf_token(&self) -> &str {
        &self.csrf_token
    }
}

/// Form for registration.
#[derive(serde::Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub csrf_token: String,
}

impl HasCsrfToken for RegisterForm {
    fn csrf_token(&self) -> &str {
        &self.csrf_token
    }
}

fn render_login(
    jar: SignedCookieJar,
    username_value: String,
    error: Option<String>,
    status: Option<StatusCode>,
) -> Response {
    let (jar, csrf_token) = generate_csrf(jar);

    let body_content = dioxus_ssr::render_element(rsx! {
        PageLayout {
            data: LayoutData::anonymous(),
            LoginPage {
                csrf_token: csrf_token,
                username_value: username_value,
                error: error,
            }
        }
    });

    (jar, render_html(body_content, status)).into_response()
}

fn render_register(
    jar: SignedCookieJar,
    username_value: String,
    error: Option<String>,
    status: Option<StatusCode>,
) -> Response {
    let (jar, csrf_token) = generate_csrf(jar);

    let body_content = dioxus_ssr::render_element(rsx! {
        PageLayout {
            data: LayoutData::anonymous(),
            RegisterPage {
                csrf_token: csrf_token,
                username_value: username_value,
                error: error,
            }
        }
    });

    (jar, render_html(body_content, status)).into_response()
}

/// GET /login – Show the login form.
pub async fn login_page(jar: SignedCookieJar) -> Response {
    if let Err(redirect) = ensure_not_authenticated(&jar) {
        return redirect.into_response();
    }

    render_login(jar, String::new(), None, None)
}

/// POST /login – Handle login form submission.
pub async fn login(
    State(state): State<AppState>,
    CsrfForm { jar, form }: CsrfForm<LoginForm>,
) -> Response {
    if let Err(redirect) = ensure_not_authenticated(&jar) {
        return redirect.into_response();
    }

    let query = AuthenticateUser {
        username: form.username.trim().to_string(),
        password: form.password,
    };

    let (status, err_msg) = match state
        .app_bus
        .query(query, AuthenticateUserHandler::new())
        .await
    {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "User logged in");
            let jar = start_session(jar, user.id);
            return (jar, Redirect::to(Route::Home.path())).into_response();
        }
        Err(ApplicationError::App(AppError::WrongAuthCredentials))
        | Err(ApplicationError::Db(DbError::UserByUsernameNotFound(_))) => (
            StatusCode::UNAUTHORIZED,
            t!("login.errors.invalid_credentials"),
        ),
        Err(e) => {
            tracing::error!("Login error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, t!("errors.internal"))
        }
    };

    render_login(
        jar,
        form.username,
        Some(err_msg.to_string()),
        Some(status),
    )
}

/// GET /register – Show the signup form.
pub async fn register_page(jar: SignedCookieJar) -> Response {
    if let Err(redirect) = ensure_not_authenticated(&jar) {
        return redirect.into_response();
    }

    render_register(jar, String::new(), None, None)
}

/// POST /register – Handle signup form submission.
pub async fn register(
    State(state): State<AppState>,
    CsrfForm { jar, form }: CsrfForm<RegisterForm>,
) -> Response {
    if let Err(redirect) = ensure_not_authenticated(&jar) {
        return redirect.into_response();
    }

    let command = RegisterUser::new(
        form.username.clone(),
        form.password,
        form.confirm_password,
    );
    let user_id = command.id;

    let err_msg = match state
        .app_bus
        .execute(command, RegisterUserCommandHandler::new())
        .await
    {
        Ok(()) => {
            let jar = start_session(jar, user_id);
            return (jar, Redirect::to(Route::Home.path())).into_response();
        }
        Err(e) => registration_error_message(&e),
    };

    let (status, message) = match err_msg {
        Some(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            t!("register.errors.failed").to_string(),
        ),
    };

    render_register(jar, form.username, Some(message), Some(status))
}

/// User facing message for validation failures, `None` for unexpected errors.
fn registration_error_message(err: &ApplicationError) -> Option<String> {
    let message = match err {
        ApplicationError::App(AppError::MissingCredentials) => {
            t!("register.errors.missing_credentials")
        }
        ApplicationError::App(AppError::PasswordTooShort { min }) => {
            t!("register.errors.password_too_short", min = min)
        }
        ApplicationError::App(AppError::PasswordMismatch) => {
            t!("register.errors.password_mismatch")
        }
        ApplicationError::Db(DbError::UsernameTaken(_)) => t!("register.errors.username_taken"),
        e => {
            tracing::error!("Registration error: {}", e);
            return None;
        }
    };

    Some(message.to_string())
}

/// GET /logout – Log the user out by clearing the session cookie.
pub async fn logout(jar: SignedCookieJar) -> Response {
    (end_session(jar), Redirect::to(Route::Login.path())).into_response()
}
