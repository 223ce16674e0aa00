use dioxus::prelude::*;
use rust_i18n::t;

use crate::routes::Route;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutData {
    /// Username of the logged in user, if any.
    pub username: Option<String>,
}

impl LayoutData {
    pub fn anonymous() -> Self {
        LayoutData { username: None }
    }

    pub fn for_user(username: &str) -> Self {
        LayoutData {
            username: Some(username.to_string()),
        }
    }
}

/// Main body layout component (to be wrapped in HTML shell)
#[component]
pub fn PageLayout(data: LayoutData, children: Element) -> Element {
    rsx! {
        Header { data: data.clone() }
        main { class: "page",
            {children}
        }
        Footer {}
    }
}

#[component]
fn Header(data: LayoutData) -> Element {
    rsx! {
        header { class: "topbar",
            a { class: "brand", href: Route::Home.path(), "{t!(\"app.name\")}" }
            nav { class: "topbar-links",
                if let Some(username) = &data.username {
                    span { class: "topbar-user", "{username}" }
                    a { href: Route::Logout.path(), "{t!(\"nav.logout\")}" }
                } else {
                    a { href: Route::Login.path(), "{t!(\"nav.login\")}" }
                    a { href: Route::Register.path(), "{t!(\"nav.register\")}" }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "footer", "{t!(\"app.footer\")}" }
    }
}

/// Generate the complete HTML document around a rendered body.
pub fn wrap_in_html(body_content: &str) -> String {
    let lang = rust_i18n::locale();
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="{assets}/app.css">
</head>
<body>
{body}
</body>
</html>"#,
        lang = &*lang,
        title = t!("app.name"),
        assets = Route::Assets.path(),
        body = body_content
    )
}
