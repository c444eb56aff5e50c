use std::sync::Arc;

use tokio::sync;

use axum::{
    extract::Query,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};

use serde::{Deserialize, Serialize};

use crate::{
    assets,
    error::BlogError,
    msg::{MsgBuilder, Reply},
    site::SiteConfig,
    ui,
};

type BuilderSender = sync::mpsc::Sender<MsgBuilder>;

#[derive(Serialize, Deserialize)]
struct PingResponse {
    pub success: bool,
    pub msg: String,
}

#[derive(Deserialize)]
struct PostQuery {
    slug: Option<String>,
}

async fn ping() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(PingResponse {
            success: true,
            msg: "Pong".to_string(),
        }),
    )
}

/// Sends a request to the builder and waits for its answer
async fn request<T>(
    tx_file: &BuilderSender,
    msg: impl FnOnce(Reply<T>) -> MsgBuilder,
) -> Result<T, BlogError> {
    let (tx_result, rx_result) = sync::oneshot::channel();
    tx_file
        .send(msg(tx_result))
        .await
        .map_err(|_| BlogError::Unavailable)?;

    rx_result.await.map_err(|_| BlogError::Unavailable)?
}

fn error_status(err: &BlogError) -> StatusCode {
    match err {
        BlogError::NotFound(_) | BlogError::MissingFile(_) => StatusCode::NOT_FOUND,
        BlogError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_page(site: &SiteConfig, status: StatusCode, heading: &str, message: &str) -> (StatusCode, Html<String>) {
    let page = ui::render_page(
        &site.site_title,
        &format!("Error | {}", site.site_title),
        &site.site_description,
        ui::render_error(heading, message),
    );

    (status, Html(page.into_string()))
}

async fn index(
    Extension(tx_file): Extension<BuilderSender>,
    Extension(site): Extension<Arc<SiteConfig>>,
) -> (StatusCode, Html<String>) {
    match request(&tx_file, MsgBuilder::Index).await {
        Ok(posts) => {
            let page = ui::render_page(
                &site.site_title,
                &site.site_title,
                &site.site_description,
                ui::render_listing(&posts),
            );

            (StatusCode::OK, Html(page.into_string()))
        }
        Err(err) => error_page(&site, error_status(&err), "Error loading posts", &err.to_string()),
    }
}

async fn post(
    Query(query): Query<PostQuery>,
    Extension(tx_file): Extension<BuilderSender>,
    Extension(site): Extension<Arc<SiteConfig>>,
) -> (StatusCode, Html<String>) {
    let slug = match query.slug {
        Some(slug) if !slug.is_empty() => slug,
        _ => {
            return error_page(
                &site,
                StatusCode::NOT_FOUND,
                "Error loading post",
                "No post specified. Go back to the homepage and click on a post.",
            )
        }
    };

    match request(&tx_file, |result| MsgBuilder::Post(slug, result)).await {
        Ok(rendered) => {
            let page = ui::render_page(
                &site.site_title,
                &format!("{} | {}", rendered.post.title, site.site_title),
                &rendered.post.description,
                ui::render_post(&rendered),
            );

            (StatusCode::OK, Html(page.into_string()))
        }
        Err(err) => error_page(&site, error_status(&err), "Error loading post", &err.to_string()),
    }
}

async fn rss(
    Extension(tx_file): Extension<BuilderSender>,
    Extension(site): Extension<Arc<SiteConfig>>,
) -> Response {
    match request(&tx_file, MsgBuilder::Feed).await {
        Ok(report) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/rss+xml; charset=utf-8")],
            report.xml,
        )
            .into_response(),
        Err(err) => error_page(&site, error_status(&err), "Error generating feed", &err.to_string()).into_response(),
    }
}

/// Anything without a route is looked up as a file in the blog directory
async fn asset(
    uri: Uri,
    Extension(tx_file): Extension<BuilderSender>,
    Extension(site): Extension<Arc<SiteConfig>>,
) -> Response {
    let path = uri.path().to_string();

    match request(&tx_file, |result| MsgBuilder::Asset(path, result)).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, assets::content_type(uri.path()))],
            bytes,
        )
            .into_response(),
        Err(err @ BlogError::MissingFile(_)) => error_page(
            &site,
            error_status(&err),
            "404 - Not found",
            "There is no page at this address.",
        )
        .into_response(),
        Err(err) => error_page(&site, error_status(&err), "Error loading file", &err.to_string()).into_response(),
    }
}

pub fn create_router(tx_file: BuilderSender, site: Arc<SiteConfig>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
        .route("/post.html", get(post))
        .route("/rss.xml", get(rss))
        .route("/.ping", get(ping))
        .fallback(get(asset))
        .layer(Extension(tx_file))
        .layer(Extension(site))
}
