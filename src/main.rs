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
mod assets;
mod builder;
mod error;
mod escape;
mod feed;
mod markdown;
mod msg;
mod posts;
mod router;
mod site;
mod ui;
mod video;

#[cfg(test)]
mod tests;

use log::LevelFilter;
use msg::{MsgBuilder, MsgSrv};
use simplelog::{CombinedLogger, TermLogger, TerminalMode};
use site::{local_url, SiteConfig, DEFAULT_PORT};

use std::{
    net::{Ipv4Addr, SocketAddrV4},
    path::{Path, PathBuf},
    process::exit,
    sync::Arc,
};

use clap::{Parser, Subcommand};
use tokio::{sync, task};

pub const CHANNEL_COUNT: usize = 256;

/// Program to render a markdown blog as web pages and an RSS feed
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Command,

    #[clap(short, long, value_parser, default_value_t = false, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the blog, rendering every page on request
    Serve {
        #[clap(flatten)]
        site: SiteConfig,

        /// Port to host service at
        #[clap(short, long, value_parser, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Open the blog in the default browser once the server is up
        #[clap(long, value_parser, default_value_t = false)]
        open: bool,
    },
    /// Generate the RSS feed with the full content of every post
    Feed {
        #[clap(flatten)]
        site: SiteConfig,

        /// Where to write the feed, defaults to <directory>/rss.xml
        #[clap(short, long, value_parser)]
        output: Option<PathBuf>,
    },
}

fn init_logger(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Err(err) = CombinedLogger::init(vec![TermLogger::new(
        level_filter,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )]) {
        eprintln!("Failed initializing logger: {}", err);
    }
}

/// Writes the feed once and returns the exit code. Only an unreadable index
/// or an unwritable output make this fail, posts that can't be read are
/// skipped.
fn generate_feed<ReadFile>(site: SiteConfig, output: Option<PathBuf>, fs_read_file: &ReadFile) -> i32
where
    ReadFile: Fn(&Path) -> anyhow::Result<String>,
{
    if site.site_url.is_none() {
        log::warn!("No --site-url given, feed links point to {}", local_url(DEFAULT_PORT));
    }

    let site = site.with_local_url(DEFAULT_PORT);
    let output = output.unwrap_or_else(|| site.directory.join("rss.xml"));

    let report = match feed::build_feed(&site, fs_read_file, chrono::Utc::now()) {
        Ok(report) => report,
        Err(err) => {
            log::error!("Error reading posts: {}", err);
            return 1;
        }
    };

    if let Err(err) = feed::write_feed(&output, &report.xml) {
        log::error!("Error writing RSS feed: {}", err);
        return 1;
    }

    log::info!("RSS feed generated: {}", output.display());
    log::info!("  - {} post(s) included", report.included.len());
    if !report.skipped.is_empty() {
        log::info!("  - {} post(s) skipped: {}", report.skipped.len(), report.skipped.join(", "));
    }

    0
}

async fn serve(site: SiteConfig, port: u16, open: bool) {
    let site = site.with_local_url(port);
    let (tx, mut rx) = sync::mpsc::channel(CHANNEL_COUNT);
    let (tx_file, rx_file) = sync::mpsc::channel::<MsgBuilder>(CHANNEL_COUNT);

    let app = router::create_router(tx_file.clone(), Arc::new(site.clone()));

    let addr = SocketAddrV4::new(Ipv4Addr::new(127, 0, 0, 1), port).into();
    let server = match axum::Server::try_bind(&addr) {
        Ok(server) => server.serve(app.into_make_service()),
        Err(err) => {
            log::error!("Port {} is already in use: {}", port, err);
            exit(1);
        }
    };

    {
        let tx = tx.clone();
        task::spawn(async move {
            if let Err(err) = server.await {
                log::error!("Server stopped: {}", err);
                tx.send(MsgSrv::Exit(1)).await.ok();
            }
        });
    }

    let url = local_url(port);
    log::info!("Started server on {}", url);

    task::spawn(async move {
        builder::builder(tx, site, rx_file).await;
    });

    if open {
        if let Err(err) = webbrowser::open(&url) {
            log::warn!("Could not open browser: {}", err);
        }
    }

    log::debug!("Server is now ready");

    while let Some(msg) = rx.recv().await {
        log::debug!("General server event: {:?}", msg);

        match msg {
            MsgSrv::Exit(code) => {
                tx_file.send(MsgBuilder::Exit()).await.ok();
                exit(code)
            }
        }
    }

    log::debug!("Exited silently");
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    init_logger(args.verbose);

    match args.command {
        Command::Serve { site, port, open } => serve(site, port, open).await,
        Command::Feed { site, output } => exit(generate_feed(site, output, &posts::std_read_file)),
    }
}
