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

//! The individual rewrite rules of [`super::PostParser`].
//!
//! Every rule is a global text rewrite. They are only correct when applied
//! in the order `PostParser` uses. Only [`extract_fences`] escapes what it
//! captures, everything else passes author text through as is.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::Placeholders;
use crate::escape::escape_html;

static FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```([A-Za-z0-9_]*)\n(.*?)```").unwrap());
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Most specific level first, so `##` never captures the start of `###`
static HEADINGS: Lazy<Vec<(Regex, usize)>> = Lazy::new(|| {
    (1..=6)
        .rev()
        .map(|level| {
            let pattern = format!(r"(?m)^{} (.+)$", "#".repeat(level));
            (Regex::new(&pattern).unwrap(), level)
        })
        .collect()
});

static BOLD_ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());

static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

static BLOCKQUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^>\s*(.+)$").unwrap());

static RULE_DASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^---+$").unwrap());
/// Never matches inside [`super::PostParser`]: [`emphasis`] runs first and
/// turns a `***` line into `<em>*</em>`.
static RULE_STARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\*\*\*+$").unwrap());

static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[-*]\s+(.+)$").unwrap());
static ITEM_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:<li>.*</li>\n?)+").unwrap());
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[0-9]+\.\s+(.+)$").unwrap());

static BLOCK_OPEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^<(h[1-6]|ul|ol|li|pre|blockquote|hr|img|div|p)[\s>]").unwrap()
});
static BLOCK_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^</(h[1-6]|ul|ol|li|pre|blockquote|div|p)>").unwrap());

pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Swaps every fenced block for a placeholder. The language tag is accepted
/// but unused.
pub fn extract_fences(text: &str, placeholders: &mut Placeholders) -> String {
    FENCE
        .replace_all(text, |caps: &Captures| {
            let code = escape_html(&caps[2]);
            placeholders.stash_code_block(format!("<pre><code>{}</code></pre>", code.trim()))
        })
        .into_owned()
}

/// Inline code spans. The content is not escaped, only shielded from the
/// following rules.
pub fn inline_code(text: &str, placeholders: &mut Placeholders) -> String {
    INLINE_CODE
        .replace_all(text, |caps: &Captures| {
            placeholders.stash_inline_code(format!("<code>{}</code>", &caps[1]))
        })
        .into_owned()
}

pub fn headings(text: &str) -> String {
    HEADINGS
        .iter()
        .fold(text.to_string(), |text, (pattern, level)| {
            pattern
                .replace_all(&text, format!("<h{level}>${{1}}</h{level}>").as_str())
                .into_owned()
        })
}

pub fn emphasis(text: &str) -> String {
    let text = BOLD_ITALIC.replace_all(text, "<strong><em>${1}</em></strong>");
    let text = BOLD.replace_all(&text, "<strong>${1}</strong>");
    ITALIC.replace_all(&text, "<em>${1}</em>").into_owned()
}

/// Images, with relative sources made absolute against `site_url`
pub fn images(text: &str, site_url: &str) -> String {
    IMAGE
        .replace_all(text, |caps: &Captures| {
            let alt = &caps[1];
            let src = &caps[2];
            let src = if src.starts_with("http://") || src.starts_with("https://") {
                src.to_string()
            } else {
                format!(
                    "{}/{}",
                    site_url.trim_end_matches('/'),
                    src.trim_start_matches('/')
                )
            };

            format!(r#"<img src="{src}" alt="{alt}" style="max-width: 100%; height: auto;" />"#)
        })
        .into_owned()
}

/// Must run after [`images`], which consumes the `![..](..)` form
pub fn links(text: &str) -> String {
    LINK.replace_all(text, r#"<a href="${2}">${1}</a>"#).into_owned()
}

/// Quoted lines, with back to back quotes merged into one element
pub fn blockquotes(text: &str) -> String {
    let text = BLOCKQUOTE.replace_all(text, "<blockquote>${1}</blockquote>");
    text.replace("</blockquote>\n<blockquote>", " ")
}

pub fn horizontal_rules(text: &str) -> String {
    let text = RULE_DASHES.replace_all(text, "<hr />");
    RULE_STARS.replace_all(&text, "<hr />").into_owned()
}

/// List items. Runs of items become one `<ul>`.
///
/// Numbered items are converted after the wrapping step and so stay bare
/// `<li>` elements.
pub fn lists(text: &str) -> String {
    let text = UNORDERED_ITEM.replace_all(text, "<li>${1}</li>");
    let text = ITEM_RUN.replace_all(&text, |caps: &Captures| {
        let run = &caps[0];
        let items = run.trim_end_matches('\n');
        let newline = if items.len() < run.len() { "\n" } else { "" };
        format!("<ul>{items}</ul>{newline}")
    });

    ORDERED_ITEM.replace_all(&text, "<li>${1}</li>").into_owned()
}

fn is_block_line(line: &str) -> bool {
    BLOCK_OPEN.is_match(line) || BLOCK_CLOSE.is_match(line) || Placeholders::is_code_block_line(line)
}

/// Wraps runs of plain lines in `<p>`. Block lines pass through, blank
/// lines end a paragraph.
pub fn paragraphs(text: &str) -> String {
    let mut result: Vec<String> = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    fn flush(result: &mut Vec<String>, paragraph: &mut Vec<&str>) {
        if !paragraph.is_empty() {
            result.push(format!("<p>{}</p>", paragraph.join(" ")));
            paragraph.clear();
        }
    }

    for line in text.split('\n') {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            flush(&mut result, &mut paragraph);
        } else if is_block_line(trimmed) {
            flush(&mut result, &mut paragraph);
            result.push(trimmed.to_string());
        } else {
            paragraph.push(trimmed);
        }
    }

    flush(&mut result, &mut paragraph);

    result.join("\n")
}
