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
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlogError {
    /// The post index or a post's markdown couldn't be read
    #[error("Could not load {path}: {reason}")]
    Acquisition { path: String, reason: String },

    #[error("Post \"{0}\" not found. Check that it exists in posts.json.")]
    NotFound(String),

    /// Nothing that may be served exists at a request path
    #[error("There is no file at {0}")]
    MissingFile(String),

    #[error("Could not write {path}: {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The builder task went away while a request was pending
    #[error("The post library is not available")]
    Unavailable,
}

impl BlogError {
    pub fn acquisition(path: impl Into<String>, reason: impl ToString) -> Self {
        BlogError::Acquisition {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
