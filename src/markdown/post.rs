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
use super::{rules, MarkdownParser, Placeholders};

/// Renderer for the markdown subset blog posts are written in.
///
/// Doesn't depend on any markdown library, the same parser is used for the
/// served pages and the RSS feed.
pub struct PostParser {
    site_url: String,
}

impl PostParser {
    /// `site_url` is the prefix for image sources without a scheme
    pub fn new(site_url: impl Into<String>) -> Self {
        PostParser {
            site_url: site_url.into(),
        }
    }
}

impl Default for PostParser {
    fn default() -> Self {
        PostParser::new("")
    }
}

impl MarkdownParser for PostParser {
    fn parse_to_html(&self, markdown: &str) -> String {
        let mut placeholders = Placeholders::new();

        let html = rules::normalize_line_endings(markdown);
        let html = rules::extract_fences(&html, &mut placeholders);
        let html = rules::inline_code(&html, &mut placeholders);
        let html = rules::headings(&html);
        let html = rules::emphasis(&html);
        let html = rules::images(&html, &self.site_url);
        let html = rules::links(&html);
        let html = rules::blockquotes(&html);
        let html = rules::horizontal_rules(&html);
        let html = rules::lists(&html);
        let html = rules::paragraphs(&html);

        placeholders.restore(&html)
    }
}
