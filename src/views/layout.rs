use maud::{html, Markup, DOCTYPE};

use crate::{names, utils};

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src="https://unpkg.com/htmx.org@2.0.4" {}
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/img/icon.svg" type="image/svg+xml" {}
    }
}

fn header(user: Option<&str>) -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        a href="/" {
                            strong { "HealthWise" }
                        }
                    }
                }
                ul {
                    @if let Some(display_name) = user {
                        li { a href=(names::QUIZ_URL) { "Assessment" } }
                        li { a href=(names::DASHBOARD_URL) { "Dashboard" } }
                        li { a href=(names::HISTORY_URL) { "History" } }
                        li { a href=(names::RECOMMENDATION_URL) { "Recommendations" } }
                        li."secondary" { (display_name) }
                        li {
                            button.outline.logout-button hx-post=(names::LOGOUT_URL) {
                                "Log out"
                            }
                        }
                    } @else {
                        li { a href=(names::LOGIN_URL) { "Log in" } }
                        li { a role="button" href=(names::REGISTER_URL) { "Sign up" } }
                    }
                    li."secondary" { (utils::VERSION) }
                }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup, user: Option<&str>) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())
            (js())
            (icon())

            title { (format!("{title} - HealthWise")) }
        }

        body."container" hx-boost="true" {
            (header(user))
            (main(body))
        }
    }
}

/// Fragment response for htmx navigation: swaps the page title and the main
/// content without re-sending the layout.
pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - HealthWise" }
        (body)
    }
}

pub fn render(is_htmx: bool, title: &str, body: Markup, user: Option<&str>) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body, user)
    }
}
