use crate::{
    markdown::{MarkdownParser, PostParser},
    video::{transform, Medium},
};

const WATCH: &str = "<p>https://www.youtube.com/watch?v=dQw4w9WgXcQ</p>";

#[test]
fn test_interactive_embeds_player() {
    let html = transform(WATCH, Medium::Interactive);

    assert!(html.contains("<iframe"));
    assert!(html.contains("https://www.youtube.com/embed/dQw4w9WgXcQ"));
    assert!(html.contains("allowfullscreen"));
    assert!(html.contains("class=\"video-container\""));
    assert!(!html.contains("<p>"));
}

#[test]
fn test_syndication_links_thumbnail() {
    let html = transform(WATCH, Medium::Syndication);

    assert!(html.contains("<a href=\"https://www.youtube.com/watch?v=dQw4w9WgXcQ\""));
    assert!(html.contains("<img src=\"https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg\""));
    assert!(html.contains("Watch on YouTube"));
    assert!(!html.contains("<iframe"));
}

#[test]
fn test_all_url_shapes() {
    for url in [
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        "http://youtube.com/watch?v=dQw4w9WgXcQ",
        "https://youtu.be/dQw4w9WgXcQ",
        "youtu.be/dQw4w9WgXcQ",
        "https://www.youtube.com/embed/dQw4w9WgXcQ",
        "HTTPS://WWW.YOUTUBE.COM/watch?v=dQw4w9WgXcQ",
    ] {
        let html = transform(&format!("<p> {} </p>", url), Medium::Interactive);
        assert!(html.contains("embed/dQw4w9WgXcQ"), "{} was not embedded", url);
    }
}

#[test]
fn test_trailing_query_is_dropped() {
    let html = transform("<p>https://youtu.be/dQw4w9WgXcQ?t=42</p>", Medium::Interactive);

    assert!(html.contains("https://www.youtube.com/embed/dQw4w9WgXcQ\""));
    assert!(!html.contains("t=42"));
}

#[test]
fn test_prose_around_link_is_untouched() {
    let html = "<p>Watch https://youtu.be/dQw4w9WgXcQ now</p>";

    assert_eq!(html, transform(html, Medium::Interactive));
    assert_eq!(html, transform(html, Medium::Syndication));
}

#[test]
fn test_wrong_id_length_is_untouched() {
    let html = "<p>https://youtu.be/short</p>";

    assert_eq!(html, transform(html, Medium::Interactive));
}

#[test]
fn test_transform_is_idempotent() {
    let once = transform(WATCH, Medium::Interactive);
    assert_eq!(once, transform(&once, Medium::Interactive));

    let once = transform(WATCH, Medium::Syndication);
    assert_eq!(once, transform(&once, Medium::Syndication));
}

#[test]
fn test_every_match_is_replaced() {
    let html = format!("{}\n<p>between</p>\n<p>https://youtu.be/aaaaaaaaaaa</p>", WATCH);
    let html = transform(&html, Medium::Interactive);

    assert_eq!(2, html.matches("<iframe").count());
    assert!(html.contains("\n<p>between</p>\n"));
    assert!(html.contains("embed/aaaaaaaaaaa"));
}

#[test]
fn test_other_blocks_are_untouched() {
    let html = format!("<h1>T</h1>\n{}\n<p>after</p>", WATCH);
    let html = transform(&html, Medium::Syndication);

    assert!(html.starts_with("<h1>T</h1>\n"));
    assert!(html.ends_with("\n<p>after</p>"));
}

#[test]
fn test_rendered_markdown_link() {
    let html = PostParser::default()
        .parse_to_html("Intro\n\nhttps://youtu.be/dQw4w9WgXcQ\n\nOutro");
    let html = transform(&html, Medium::Interactive);

    assert!(html.starts_with("<p>Intro</p>\n<div"));
    assert!(html.ends_with("</div>\n<p>Outro</p>"));
    assert_eq!(1, html.matches("<iframe").count());
}
