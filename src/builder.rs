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
use std::path::Path;

use chrono::Utc;
use tokio::sync;

use crate::{
    assets,
    error::BlogError,
    feed,
    markdown::{MarkdownParser, PostParser},
    msg::{MsgBuilder, MsgSrv, RenderedPost},
    posts::{self, Post},
    site::SiteConfig,
    video::{self, Medium},
};

/// Loads the index, newest post first
fn listing<ReadFile>(site: &SiteConfig, fs_read_file: &ReadFile) -> Result<Vec<Post>, BlogError>
where
    ReadFile: Fn(&Path) -> anyhow::Result<String>,
{
    let mut posts = posts::load_index(site, fs_read_file)?;
    posts::sort_newest_first(&mut posts);

    Ok(posts)
}

/// Reads a post and renders it for a browser page
fn render_post<ReadFile>(
    site: &SiteConfig,
    parser: &dyn MarkdownParser,
    slug: &str,
    fs_read_file: &ReadFile,
) -> Result<RenderedPost, BlogError>
where
    ReadFile: Fn(&Path) -> anyhow::Result<String>,
{
    let posts = posts::load_index(site, fs_read_file)?;
    let post = posts::find_post(&posts, slug)?.clone();
    let markdown = posts::load_source(site, &post.slug, fs_read_file)?;

    let html = parser.parse_to_html(&markdown);
    let html = video::transform(&html, Medium::Interactive);

    Ok(RenderedPost { post, html })
}

fn log_failure<T>(what: &str, result: &Result<T, BlogError>) {
    match result {
        Err(BlogError::NotFound(slug)) => log::warn!("Requested unknown post {}", slug),
        Err(BlogError::MissingFile(path)) => log::warn!("Requested unknown file {}", path),
        Err(err) => log::error!("Error loading {}: {}", what, err),
        Ok(_) => {}
    }
}

/// Creates the post builder reading from the filesystem
///
/// Answers the router's requests until it receives [`MsgBuilder::Exit`] or
/// every sender is dropped.
pub async fn builder(
    tx_srv: sync::mpsc::Sender<MsgSrv>,
    site: SiteConfig,
    rx_file: sync::mpsc::Receiver<MsgBuilder>,
) {
    builder_with_read_file(tx_srv, site, rx_file, posts::std_read_file, posts::std_read_asset).await;
}

/// Creates the post builder with a custom way of reading files
///
/// `fs_read_file` reads the index and markdown, `fs_read_asset` reads the
/// static files next to them. Every request reads again, nothing is cached.
/// Requests are handled one after another.
pub async fn builder_with_read_file<ReadFile, ReadAsset>(
    tx_srv: sync::mpsc::Sender<MsgSrv>,
    site: SiteConfig,
    mut rx_file: sync::mpsc::Receiver<MsgBuilder>,
    fs_read_file: ReadFile,
    fs_read_asset: ReadAsset,
) where
    ReadFile: Fn(&Path) -> anyhow::Result<String> + Send + Sync + 'static,
    ReadAsset: Fn(&Path) -> anyhow::Result<Vec<u8>> + Send + Sync + 'static,
{
    let path = site.directory.as_path();

    if !path.exists() {
        log::error!("Directory {} does not exist", path.display());
        tx_srv.send(MsgSrv::Exit(1)).await.ok();
        return;
    }

    if !path.is_dir() {
        log::error!("Path {} is not a directory", path.display());
        tx_srv.send(MsgSrv::Exit(1)).await.ok();
        return;
    }

    let parser = PostParser::new(site.base_url());

    log::debug!("Started post builder in {}", path.display());

    while let Some(msg) = rx_file.recv().await {
        log::debug!("Post builder event: {:?}", msg);

        match msg {
            MsgBuilder::Index(result) => {
                let posts = listing(&site, &fs_read_file);
                log_failure("posts", &posts);
                result
                    .send(posts)
                    .unwrap_or_else(|err| log::error!("{:?}", err));
            }
            MsgBuilder::Post(slug, result) => {
                let post = render_post(&site, &parser, &slug, &fs_read_file);
                log_failure("post", &post);
                result
                    .send(post)
                    .unwrap_or_else(|err| log::error!("{:?}", err));
            }
            MsgBuilder::Feed(result) => {
                let report = feed::build_feed(&site, &fs_read_file, Utc::now());
                log_failure("feed", &report);
                result
                    .send(report)
                    .unwrap_or_else(|err| log::error!("{:?}", err));
            }
            MsgBuilder::Asset(uri_path, result) => {
                let asset = assets::load(&site, &uri_path, &fs_read_asset);
                log_failure("file", &asset);
                result
                    .send(asset)
                    .unwrap_or_else(|err| log::error!("{:?}", err));
            }
            MsgBuilder::Exit() => {
                break;
            }
        }
    }

    log::debug!("Exited post builder");
}
