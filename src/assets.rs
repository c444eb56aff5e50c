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
//! Files served from the blog directory as they are, like images that posts
//! link with a relative source.

use std::path::{Path, PathBuf};

use crate::{error::BlogError, site::SiteConfig};

/// Maps a request path to a file below the blog directory.
///
/// The path is percent-decoded first. Empty, `.` and `..` segments are
/// refused, as are backslashes and NUL, so the result never leaves
/// `site.directory`.
pub fn resolve(site: &SiteConfig, uri_path: &str) -> Result<PathBuf, BlogError> {
    let missing = || BlogError::MissingFile(uri_path.to_string());

    let decoded = urlencoding::decode(uri_path).map_err(|_| missing())?;
    let relative = decoded.strip_prefix('/').unwrap_or(&decoded);

    let mut path = site.directory.clone();
    for segment in relative.split('/') {
        if segment.is_empty()
            || segment == "."
            || segment == ".."
            || segment.contains('\\')
            || segment.contains('\0')
        {
            return Err(missing());
        }

        path.push(segment);
    }

    Ok(path)
}

/// Reads an asset through `fs_read_asset`. Any read failure counts as a
/// missing file.
pub fn load<ReadAsset>(
    site: &SiteConfig,
    uri_path: &str,
    fs_read_asset: &ReadAsset,
) -> Result<Vec<u8>, BlogError>
where
    ReadAsset: Fn(&Path) -> anyhow::Result<Vec<u8>>,
{
    let path = resolve(site, uri_path)?;

    fs_read_asset(&path).map_err(|err| {
        log::debug!("Could not read {}: {}", path.display(), err);
        BlogError::MissingFile(uri_path.to_string())
    })
}

pub fn content_type(uri_path: &str) -> String {
    mime_guess::from_path(uri_path)
        .first_or_octet_stream()
        .to_string()
}
