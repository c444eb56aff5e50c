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
use std::path::PathBuf;

/// Settings shared by the server and the feed generator
#[derive(clap::Args, Clone, Debug)]
pub struct SiteConfig {
    /// Blog directory, containing posts/posts.json and posts/<slug>.md
    #[clap(short, long, value_parser, default_value = ".")]
    pub directory: PathBuf,

    /// Public URL of the blog, used for permalinks and image sources.
    /// Defaults to the local address the server listens on.
    #[clap(long, value_parser)]
    pub site_url: Option<String>,

    #[clap(long, value_parser, default_value = "My Blog")]
    pub site_title: String,

    #[clap(long, value_parser, default_value = "Thoughts, stories, and ideas worth sharing")]
    pub site_description: String,

    /// Language of the feed channel
    #[clap(long, value_parser, default_value = "en-us")]
    pub language: String,
}

impl SiteConfig {
    pub fn posts_dir(&self) -> PathBuf {
        self.directory.join("posts")
    }

    pub fn index_path(&self) -> PathBuf {
        self.posts_dir().join("posts.json")
    }

    pub fn source_path(&self, slug: &str) -> PathBuf {
        self.posts_dir().join(format!("{}.md", slug))
    }

    /// Absolute link to a post page
    pub fn permalink(&self, slug: &str) -> String {
        format!(
            "{}/post.html?slug={}",
            self.base_url(),
            urlencoding::encode(slug)
        )
    }

    pub fn feed_url(&self) -> String {
        format!("{}/rss.xml", self.base_url())
    }

    pub fn base_url(&self) -> &str {
        self.site_url.as_deref().unwrap_or_default().trim_end_matches('/')
    }

    /// Fills in `http://127.0.0.1:<port>` when no site URL was given
    pub fn with_local_url(mut self, port: u16) -> Self {
        if self.site_url.is_none() {
            self.site_url = Some(local_url(port));
        }

        self
    }
}

pub const DEFAULT_PORT: u16 = 8080;

pub fn local_url(port: u16) -> String {
    format!("http://127.0.0.1:{}", port)
}

#[cfg(test)]
impl SiteConfig {
    pub fn for_tests() -> Self {
        SiteConfig {
            directory: PathBuf::from("."),
            site_url: Some("https://blog.example.org".to_string()),
            site_title: "My Blog".to_string(),
            site_description: "Test blog".to_string(),
            language: "en-us".to_string(),
        }
    }
}
