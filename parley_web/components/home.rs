use dioxus::prelude::*;
use rust_i18n::t;

use parley_types::interview::InterviewConfig;

use crate::routes::Route;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSummary {
    pub name: String,
    pub company: String,
    pub job_title: String,
    pub updated_at: String,
}

impl From<&InterviewConfig> for ConfigSummary {
    fn from(config: &InterviewConfig) -> Self {
        ConfigSummary {
            name: config.name.clone(),
            company: config.company.clone(),
            job_title: config.job_title.clone(),
            updated_at: config.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Landing page of a logged in user.
#[component]
pub fn DashboardPage(username: String, unread_count: u64, configs: Vec<ConfigSummary>) -> Element {
    let welcome = t!("home.welcome", username = username).to_string();
    let unread = t!("home.unread_answers", count = unread_count).to_string();

    rsx! {
        div { class: "dashboard",
            h1 { "{welcome}" }
            p { class: "unread-count", "{unread}" }

            h2 { "{t!(\"home.configs_title\")}" }
            if configs.is_empty() {
                p { class: "empty", "{t!(\"home.no_configs\")}" }
            } else {
                ul { class: "config-list",
                    for config in configs {
                        li { class: "config-item",
                            strong { "{config.name}" }
                            span { " · {config.company} · {config.job_title}" }
                            span { class: "muted", " ({config.updated_at})" }
                        }
                    }
                }
            }

            a { class: "btn-secondary", href: Route::Logout.path(), "{t!(\"nav.logout\")}" }
        }
    }
}
