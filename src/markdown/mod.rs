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
mod placeholder;
mod post;
pub mod rules;

pub use placeholder::Placeholders;
pub use post::PostParser;

/// Generic for parsing markdown to html
pub trait MarkdownParser {
    /// Returns HTML parsed from the input `markdown`
    ///
    /// Never fails: markup that doesn't match any rule ends up in plain
    /// paragraphs.
    ///
    /// # Arguments
    ///
    /// * `markdown`: Input markdown (the blog's subset, not CommonMark)
    fn parse_to_html(&self, markdown: &str) -> String;
}
