//! Post page markup

use maud::{html, Markup};

use crate::app::PostView;
use crate::render::dates::{format_date, format_time};
use crate::render::layout::layout;

pub fn render_post(view: &PostView) -> String {
    let post = &view.detail;
    layout(
        &format!("{} | spacetraveling", post.title),
        html! {
            @if !post.banner_url.is_empty() {
                img .banner src=(post.banner_url) alt="Banner";
            }
            article .post-page {
                h1 { (post.title) }
                div .info {
                    @if let Some(published_at) = &post.published_at {
                        time { (format_date(published_at)) }
                    }
                    p .author { (post.author) }
                    time .reading-time { (view.reading_minutes) " min" }
                }
                @if let Some(edited_at) = &post.last_edited_at {
                    p .last-edit {
                        "* editado em " (format_date(edited_at)) ", às " (format_time(edited_at))
                    }
                }
                @for section in &post.sections {
                    section {
                        h2 { (section.heading) }
                        @for paragraph in &section.paragraphs {
                            p { (paragraph) }
                        }
                    }
                }
                (navigation(view))
            }
        },
    )
    .into_string()
}

fn navigation(view: &PostView) -> Markup {
    html! {
        nav .post-navigation {
            @if let Some(previous) = &view.previous {
                a .previous href={ "/post/" (urlencoding::encode(&previous.id)) } {
                    span { (previous.title) }
                    "Post anterior"
                }
            }
            @if let Some(next) = &view.next {
                a .next href={ "/post/" (urlencoding::encode(&next.id)) } {
                    span { (next.title) }
                    "Próximo post"
                }
            }
        }
    }
}
