//! Shared page chrome

use axum::http::StatusCode;
use maud::{html, Markup, DOCTYPE};

/// Wrap page content in the site chrome.
pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body {
                header .header {
                    a href="/" {
                        span .logo { "spacetraveling" span .dot { "." } }
                    }
                }
                main { (content) }
            }
        }
    }
}

/// Standalone error page with the given status.
pub fn error_page(status: StatusCode, message: &str) -> String {
    layout(
        "spacetraveling",
        html! {
            section .error {
                h1 { (status.as_u16()) }
                p { (message) }
                a href="/" { "Voltar para a home" }
            }
        },
    )
    .into_string()
}
