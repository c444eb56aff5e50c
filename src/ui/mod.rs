use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::{msg::RenderedPost, posts::Post};

fn render_head(title: &str, description: &str) -> Markup {
    html! {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1";
        title { (title) }
        meta name="description" content=(description);
        link rel="alternate" type="application/rss+xml" title=(title) href="rss.xml";
        style {
            (PreEscaped(include_str!("./style.css")))
        }
    }
}

fn post_href(slug: &str) -> String {
    format!("post.html?slug={}", urlencoding::encode(slug))
}

fn render_card(post: &Post) -> Markup {
    html! {
        article class="post-card" {
            h3 {
                a href=(post_href(&post.slug)) { (post.title) }
            }
            p class="post-date" { (post.display_date()) }
            p class="post-excerpt" { (post.description) }
            a href=(post_href(&post.slug)) class="read-more" { "Read more →" }
        }
    }
}

/// Preview cards for the home page. Titles and descriptions are plain text.
pub fn render_listing(posts: &[Post]) -> Markup {
    html! {
        @if posts.is_empty() {
            p class="loading" { "No posts yet. Add your first post!" }
        } @else {
            div class="posts-list" {
                @for post in posts {
                    (render_card(post))
                }
            }
        }
    }
}

/// A full post, the rendered HTML is inserted as is
pub fn render_post(rendered: &RenderedPost) -> Markup {
    html! {
        article {
            h1 id="post-title" { (rendered.post.title) }
            p id="post-date" class="post-date" { (rendered.post.display_date()) }
            div id="post-content" {
                (PreEscaped(&rendered.html))
            }
            p { a href="index.html" { "← Back to homepage" } }
        }
    }
}

pub fn render_error(heading: &str, message: &str) -> Markup {
    html! {
        div class="error" {
            p { strong { (heading) } }
            p { (message) }
            p { a href="index.html" { "← Back to homepage" } }
        }
    }
}

/// Renders to whole HTML Page
pub fn render_page(site_title: &str, title: &str, description: &str, contents: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                (render_head(title, description))
            }
            body {
                header {
                    a href="index.html" class="site-title" { (site_title) }
                    nav {
                        a href="rss.xml" { "RSS" }
                    }
                }
                main {
                    (contents)
                }
            }
        }
    }
}
