use dioxus::prelude::*;
use rust_i18n::t;

use parley_types::common::MIN_PASSWORD_LENGTH;

use crate::routes::Route;

#[component]
fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "error-banner", "{message}" }
    }
}

/// Login page component
#[component]
pub fn LoginPage(csrf_token: String, username_value: String, error: Option<String>) -> Element {
    rsx! {
        div { class: "auth-container",
            div { class: "auth-box",
                h2 { class: "auth-title", "{t!(\"login.form.title\")}" }
                if let Some(err) = error {
                    ErrorBanner { message: err }
                }
                form {
                    action: Route::Login.path(),
                    method: "post",
                    input { r#type: "hidden", name: "csrf_token", value: "{csrf_token}" }

                    label { r#for: "username", "{t!(\"user.username\")}" }
                    input {
                        r#type: "text",
                        class: "input-field",
                        id: "username",
                        name: "username",
                        value: "{username_value}",
                        required: true
                    }

                    label { r#for: "password", "{t!(\"user.password\")}" }
                    input {
                        r#type: "password",
                        class: "input-field",
                        id: "password",
                        name: "password",
                        required: true
                    }

                    button { r#type: "submit", class: "btn-primary", "{t!(\"login.form.submit\")}" }
                }
                div { class: "auth-switch",
                    p { "{t!(\"login.register_question\")}" }
                    a { href: Route::Register.path(), "{t!(\"login.register_button\")}" }
                }
            }
        }
    }
}

/// Register page component
#[component]
pub fn RegisterPage(csrf_token: String, username_value: String, error: Option<String>) -> Element {
    let min_length = MIN_PASSWORD_LENGTH.to_string();
    let password_hint = t!("register.password_hint", min = MIN_PASSWORD_LENGTH).to_string();

    rsx! {
        div { class: "auth-container",
            div { class: "auth-box",
                h2 { class: "auth-title", "{t!(\"register.form.title\")}" }
                if let Some(err) = error {
                    ErrorBanner { message: err }
                }
                form {
                    action: Route::Register.path(),
                    method: "post",
                    input { r#type: "hidden", name: "csrf_token", value: "{csrf_token}" }

                    label { r#for: "username", "{t!(\"user.username\")}" }
                    input {
                        r#type: "text",
                        class: "input-field",
                        id: "username",
                        name: "username",
                        value: "{username_value}",
                        required: true
                    }

                    label { r#for: "password", "{t!(\"user.password\")}" }
                    input {
                        r#type: "password",
                        class: "input-field",
                        id: "password",
                        name: "password",
                        minlength: "{min_length}",
                        required: true
                    }
                    small { class: "input-hint", "{password_hint}" }

                    label { r#for: "confirm_password", "{t!(\"user.confirm_password\")}" }
                    input {
                        r#type: "password",
                        class: "input-field",
                        id: "confirm_password",
                        name: "confirm_password",
                        minlength: "{min_length}",
                        required: true
                    }

                    button { r#type: "submit", class: "btn-primary", "{t!(\"register.form.submit\")}" }
                }
                div { class: "auth-switch",
                    p { "{t!(\"register.login_question\")}" }
                    a { href: Route::Login.path(), "{t!(\"register.login_button\")}" }
                }
            }
        }
    }
}
