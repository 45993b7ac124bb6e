//! Home page markup

use maud::{html, Markup};

use crate::domain::entities::{FeedState, PostSummary};
use crate::render::dates::format_date;
use crate::render::layout::layout;

/// Render the accumulated feed. `pages` is how many feed pages the state
/// holds; the load-more link asks for one more.
pub fn render_home(state: &FeedState, pages: usize) -> String {
    layout(
        "Home | spacetraveling",
        html! {
            div .posts {
                @for post in state.items() {
                    (post_entry(post))
                }
                @if state.has_more() {
                    a .more-posts href={ "/?pages=" (pages + 1) } {
                        "Carregar mais posts"
                    }
                }
            }
        },
    )
    .into_string()
}

fn post_entry(post: &PostSummary) -> Markup {
    html! {
        a .post href={ "/post/" (urlencoding::encode(&post.id)) } {
            p .title { (post.title) }
            p .subtitle { (post.subtitle) }
            div .info {
                @if let Some(published_at) = &post.published_at {
                    time { (format_date(published_at)) }
                }
                p .author { (post.author) }
            }
        }
    }
}
