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
use std::{fs, path::Path};

use chrono::{DateTime, Utc};

use crate::{
    error::BlogError,
    escape::{escape_cdata, escape_xml},
    markdown::{MarkdownParser, PostParser},
    posts::{self, Post},
    site::SiteConfig,
    video::{self, Medium},
};

/// Result of a feed build
#[derive(Debug)]
pub struct FeedReport {
    pub xml: String,
    /// Slugs of the posts in the feed, in feed order
    pub included: Vec<String>,
    /// Slugs of the posts whose markdown couldn't be read
    pub skipped: Vec<String>,
}

/// Builds the RSS document for every post in the index.
///
/// Failing to read the index is an error, a post that can't be read is
/// logged and left out.
pub fn build_feed<ReadFile>(
    site: &SiteConfig,
    fs_read_file: &ReadFile,
    build_date: DateTime<Utc>,
) -> Result<FeedReport, BlogError>
where
    ReadFile: Fn(&Path) -> anyhow::Result<String>,
{
    let mut posts = posts::load_index(site, fs_read_file)?;
    posts::sort_newest_first(&mut posts);

    let parser = PostParser::new(site.base_url());
    let mut items = Vec::with_capacity(posts.len());
    let mut included = Vec::with_capacity(posts.len());
    let mut skipped = Vec::new();

    for post in posts.iter() {
        let markdown = match posts::load_source(site, &post.slug, fs_read_file) {
            Ok(markdown) => markdown,
            Err(err) => {
                log::warn!("{}, skipping post {}", err, post.slug);
                skipped.push(post.slug.clone());
                continue;
            }
        };

        let html = parser.parse_to_html(&markdown);
        let html = video::transform(&html, Medium::Syndication);

        items.push(render_item(site, post, &html));
        included.push(post.slug.clone());
    }

    let xml = render_channel(site, &items, build_date);

    Ok(FeedReport {
        xml,
        included,
        skipped,
    })
}

fn render_item(site: &SiteConfig, post: &Post, html: &str) -> String {
    let permalink = escape_xml(&site.permalink(&post.slug));
    let content = escape_cdata(&format!(
        r#"{html}

<p style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #333;">
    <a href="{permalink}" style="color: #818cf8;">Read this post on the blog →</a>
</p>"#
    ));

    format!(
        r#"        <item>
            <title>{title}</title>
            <link>{permalink}</link>
            <guid isPermaLink="true">{permalink}</guid>
            <pubDate>{date}</pubDate>
            <description>{description}</description>
            <content:encoded><![CDATA[
{content}
            ]]></content:encoded>
        </item>"#,
        title = escape_xml(&post.title),
        date = escape_xml(&post.rss_date()),
        description = escape_xml(&post.description),
    )
}

fn render_channel(site: &SiteConfig, items: &[String], build_date: DateTime<Utc>) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"
     xmlns:atom="http://www.w3.org/2005/Atom"
     xmlns:content="http://purl.org/rss/1.0/modules/content/">
    <channel>
        <title>{title}</title>
        <description>{description}</description>
        <link>{link}</link>
        <language>{language}</language>
        <lastBuildDate>{build_date}</lastBuildDate>
        <atom:link href="{feed_url}" rel="self" type="application/rss+xml"/>

{items}

    </channel>
</rss>
"#,
        title = escape_xml(&site.site_title),
        description = escape_xml(&site.site_description),
        link = escape_xml(site.base_url()),
        language = escape_xml(&site.language),
        build_date = build_date.format("%a, %d %b %Y %H:%M:%S GMT"),
        feed_url = escape_xml(&site.feed_url()),
        items = items.join("\n\n"),
    )
}

pub fn write_feed(path: &Path, xml: &str) -> Result<(), BlogError> {
    fs::write(path, xml).map_err(|source| BlogError::OutputWrite {
        path: path.display().to_string(),
        source,
    })
}
