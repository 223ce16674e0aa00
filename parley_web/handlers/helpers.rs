use axum::{
    extract::{Form, FromRef, FromRequest, FromRequestParts, Request},
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::{
    SignedCookieJar,
    cookie::{Cookie, Key, SameSite},
};
use rand::{Rng, distributions::Alphanumeric};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use parley_app::{cqrs::queries::GetUserById, queries_handlers::GetUserByIdHandler};
use parley_types::{
    common::User,
    errors::{ApplicationError, DbError},
};

use crate::{components::wrap_in_html, http::AppState, routes::Route};

pub const SESSION_COOKIE: &str = "user_id";
pub const CSRF_COOKIE: &str = "csrf_token";

const CSRF_TOKEN_LEN: usize = 32;

/// Generates a fresh CSRF token and stores it in a signed cookie.
pub fn generate_csrf(jar: SignedCookieJar) -> (SignedCookieJar, String) {
    let token: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(CSRF_TOKEN_LEN)
        .map(char::from)
        .collect();

    let cookie = Cookie::build((CSRF_COOKIE, token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict);

    (jar.add(cookie), token)
}

/// Forms protected by a CSRF token.
pub trait HasCsrfToken {
    fn csrf_token(&self) -> &str;
}

/// A url-encoded form whose `csrf_token` field matched the signed CSRF cookie.
pub struct CsrfForm<T> {
    pub jar: SignedCookieJar,
    pub form: T,
}

impl<S, T> FromRequest<S> for CsrfForm<T>
where
    S: Send + Sync,
    Key: FromRef<S>,
    T: DeserializeOwned + HasCsrfToken + Send,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::<Key>::from_headers(req.headers(), Key::from_ref(state));

        let Form(form) = Form::<T>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let valid = jar
            .get(CSRF_COOKIE)
            .is_some_and(|cookie| cookie.value() == form.csrf_token());

        if !valid {
            tracing::warn!("Rejected form submission with an invalid CSRF token");
            return Err((StatusCode::FORBIDDEN, t!("errors.csrf").to_string()).into_response());
        }

        Ok(CsrfForm { jar, form })
    }
}

/// Adds the session cookie for `user_id`.
pub fn start_session(jar: SignedCookieJar, user_id: Uuid) -> SignedCookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, user_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    jar.add(cookie)
}

pub fn end_session(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}

pub fn session_user_id(jar: &SignedCookieJar) -> Option<Uuid> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse().ok())
}

/// Login and registration pages are for anonymous visitors only.
pub fn ensure_not_authenticated(jar: &SignedCookieJar) -> Result<(), Redirect> {
    match session_user_id(jar) {
        Some(_) => Err(Redirect::to(Route::Home.path())),
        None => Ok(()),
    }
}

pub(crate) enum SessionError {
    /// No session, or a session pointing at a user that no longer exists.
    Anonymous(SignedCookieJar),
    Failed(ApplicationError),
}

/// Resolves the session cookie into the logged in user.
pub(crate) async fn session_user(parts: &Parts, state: &AppState) -> Result<User, SessionError> {
    let jar = SignedCookieJar::<Key>::from_headers(&parts.headers, state.cookie_key.clone());

    let Some(user_id) = session_user_id(&jar) else {
        return Err(SessionError::Anonymous(jar));
    };

    match state
        .app_bus
        .query(GetUserById { id: user_id }, GetUserByIdHandler::new())
        .await
    {
        Ok(user) => Ok(user),
        Err(ApplicationError::Db(DbError::UserByIdNotFound(_))) => {
            tracing::debug!("Dropping session of unknown user {user_id}");
            Err(SessionError::Anonymous(end_session(jar)))
        }
        Err(e) => Err(SessionError::Failed(e)),
    }
}

/// The logged in user of a page request. Anonymous visitors are redirected
/// to the login page.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match session_user(parts, state).await {
            Ok(user) => Ok(CurrentUser(user)),
            Err(SessionError::Anonymous(jar)) => {
                Err((jar, Redirect::to(Route::Login.path())).into_response())
            }
            Err(SessionError::Failed(e)) => {
                tracing::error!("Session lookup failed: {}", e);
                Err(internal_error())
            }
        }
    }
}

/// Wraps a rendered body in the HTML shell.
pub fn render_html(body_content: String, status: Option<StatusCode>) -> Response {
    let html = Html(wrap_in_html(&body_content));
    match status {
        Some(status) => (status, html).into_response(),
        None => html.into_response(),
    }
}

pub fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        t!("errors.internal").to_string(),
    )
        .into_response()
}
