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
use std::{cmp::Ordering, fs, path::Path};

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

use crate::{error::BlogError, site::SiteConfig};

/// Entry of posts/posts.json
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct PostIndex {
    #[serde(default)]
    posts: Vec<Post>,
}

impl Post {
    /// Publication day, if `date` is `YYYY-MM-DD` or RFC 3339
    pub fn published(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// e.g. "January 15, 2024", or the raw date if it can't be parsed
    pub fn display_date(&self) -> String {
        match self.published() {
            Some(date) => date.format("%B %-d, %Y").to_string(),
            None => self.date.clone(),
        }
    }

    /// RFC 822 date as RSS wants it, e.g. "Mon, 15 Jan 2024 00:00:00 GMT"
    pub fn rss_date(&self) -> String {
        match self.published() {
            Some(date) => date.format("%a, %d %b %Y 00:00:00 GMT").to_string(),
            None => self.date.clone(),
        }
    }
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(date).ok().map(|dt| dt.date_naive()))
}

pub fn std_read_file(path: &Path) -> anyhow::Result<String> {
    match fs::read_to_string(path) {
        Ok(result) => Ok(result),
        Err(err) => Err(anyhow::anyhow!("{}", err)),
    }
}

/// Reads a static file like an image, which doesn't have to be UTF-8
pub fn std_read_asset(path: &Path) -> anyhow::Result<Vec<u8>> {
    match fs::read(path) {
        Ok(result) => Ok(result),
        Err(err) => Err(anyhow::anyhow!("{}", err)),
    }
}

/// Reads and parses the post index. Order is as stored.
pub fn load_index<ReadFile>(site: &SiteConfig, fs_read_file: &ReadFile) -> Result<Vec<Post>, BlogError>
where
    ReadFile: Fn(&Path) -> anyhow::Result<String>,
{
    let path = site.index_path();
    let json = fs_read_file(&path).map_err(|err| BlogError::acquisition(path.display().to_string(), err))?;
    let index: PostIndex = serde_json::from_str(&json)
        .map_err(|err| BlogError::acquisition(path.display().to_string(), err))?;

    log::debug!("Loaded {} post(s) from {}", index.posts.len(), path.display());

    Ok(index.posts)
}

pub fn find_post<'a>(posts: &'a [Post], slug: &str) -> Result<&'a Post, BlogError> {
    posts
        .iter()
        .find(|post| post.slug == slug)
        .ok_or_else(|| BlogError::NotFound(slug.to_string()))
}

/// Slugs end up in file paths and URLs, so only `[A-Za-z0-9_-]` is allowed
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Reads the markdown of the post `slug`
pub fn load_source<ReadFile>(site: &SiteConfig, slug: &str, fs_read_file: &ReadFile) -> Result<String, BlogError>
where
    ReadFile: Fn(&Path) -> anyhow::Result<String>,
{
    if !is_valid_slug(slug) {
        return Err(BlogError::NotFound(slug.to_string()));
    }

    let path = site.source_path(slug);
    fs_read_file(&path).map_err(|err| BlogError::acquisition(path.display().to_string(), err))
}

/// Newest first. Posts with an unparseable date go last, in index order.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| -> Ordering {
        match (a.published(), b.published()) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}
