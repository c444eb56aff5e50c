/*
 *  md-blog-builder render markdown blog posts as pages and feeds
 *  Copyright (C) 2022 Fionn Langhans
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 */
use maud::html;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A paragraph holding nothing but a YouTube link. Group 1 is the video id.
static VIDEO_PARAGRAPH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)<p>\s*(?:https?://)?(?:www\.)?",
        r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)",
        r"([a-zA-Z0-9_-]{11})[^\s<]*\s*</p>",
    ))
    .unwrap()
});

const EMBED_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Where the rendered HTML ends up
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Medium {
    /// A browser page, can show an embedded player
    Interactive,
    /// A feed reader, no frames allowed
    Syndication,
}

/// Rewrites every paragraph that is only a video link into a player
/// (interactive) or a thumbnail linking to the video (syndication).
/// Everything else is left untouched.
pub fn transform(html: &str, medium: Medium) -> String {
    VIDEO_PARAGRAPH
        .replace_all(html, |caps: &Captures| match medium {
            Medium::Interactive => embed_player(&caps[1]),
            Medium::Syndication => thumbnail_link(&caps[1]),
        })
        .into_owned()
}

fn embed_player(video_id: &str) -> String {
    html! {
        div class="video-container" {
            iframe
                src=(format!("https://www.youtube.com/embed/{}", video_id))
                title="YouTube video"
                allow=(EMBED_ALLOW)
                allowfullscreen {}
        }
    }
    .into_string()
}

fn thumbnail_link(video_id: &str) -> String {
    html! {
        div style="margin: 20px 0; text-align: center;" {
            a href=(format!("https://www.youtube.com/watch?v={}", video_id))
                style="display: inline-block; text-decoration: none;" {
                img src=(format!("https://img.youtube.com/vi/{}/hqdefault.jpg", video_id))
                    alt="YouTube Video"
                    style="max-width: 100%; height: auto; border-radius: 8px;";
                p style="margin-top: 8px; color: #818cf8;" { "▶ Watch on YouTube" }
            }
        }
    }
    .into_string()
}
