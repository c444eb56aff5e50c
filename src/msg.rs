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
use tokio::sync;

use crate::{error::BlogError, feed::FeedReport, posts::Post};

pub type Reply<T> = sync::oneshot::Sender<Result<T, BlogError>>;

/// A post ready to be put into a page
#[derive(Debug)]
pub struct RenderedPost {
    pub post: Post,
    pub html: String,
}

#[derive(PartialEq, Eq, Debug)]
pub enum MsgSrv {
    Exit(/* code: */ i32),
}

#[derive(Debug)]
pub enum MsgBuilder {
    /// All posts, newest first
    Index(Reply<Vec<Post>>),
    Post(/* slug: */ String, Reply<RenderedPost>),
    Feed(Reply<FeedReport>),
    /// Raw bytes of a file below the blog directory
    Asset(/* uri path: */ String, Reply<Vec<u8>>),
    Exit(),
}
