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
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Delimits placeholder tokens. Private use code point, so author text
/// doesn't contain it in practice.
const SENTINEL: char = '\u{E000}';

const CODE_BLOCK: &str = "CODE_BLOCK";
const INLINE_CODE: &str = "INLINE_CODE";

static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new("\u{E000}(CODE_BLOCK|INLINE_CODE)_([0-9]+)\u{E000}").unwrap());

static CODE_BLOCK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^\u{E000}CODE_BLOCK_[0-9]+\u{E000}$").unwrap());

/// Protected fragments of a single render call.
///
/// Content is swapped out for a token while the text rules run and swapped
/// back in by [`Placeholders::restore`]. Created fresh for every render.
#[derive(Debug, Default)]
pub struct Placeholders {
    code_blocks: Vec<String>,
    inline_code: Vec<String>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores finished `<pre><code>` markup, returns its token
    pub fn stash_code_block(&mut self, html: String) -> String {
        self.code_blocks.push(html);
        format!("{SENTINEL}{CODE_BLOCK}_{}{SENTINEL}", self.code_blocks.len() - 1)
    }

    /// Stores finished `<code>` markup, returns its token
    pub fn stash_inline_code(&mut self, html: String) -> String {
        self.inline_code.push(html);
        format!("{SENTINEL}{INLINE_CODE}_{}{SENTINEL}", self.inline_code.len() - 1)
    }

    /// Whether the (trimmed) line is nothing but a code block token
    pub fn is_code_block_line(line: &str) -> bool {
        CODE_BLOCK_LINE.is_match(line)
    }

    /// Puts the stashed markup back. One pass: restored content isn't
    /// scanned for further tokens.
    pub fn restore(self, text: &str) -> String {
        TOKEN
            .replace_all(text, |caps: &Captures| {
                let stash = if &caps[1] == CODE_BLOCK {
                    &self.code_blocks
                } else {
                    &self.inline_code
                };

                caps[2]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| stash.get(index))
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}
