//! Rendered page handlers
//!
//! Bridges the content repository and the page renderer, mapping loader
//! errors to per-request HTTP statuses. A missing or malformed recipe
//! affects only the request that asked for it.

use crate::config::AppState;
use crate::content::{self, ContentError};
use crate::handler::router::RequestContext;
use crate::http;
use crate::logger;
use crate::render;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Serve the home page listing all recipes known since startup
pub fn serve_home(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let page = render::home_page(&state.recipes);
    http::build_html_response(page.into_string(), ctx.is_head)
}

/// Serve a single recipe page
pub async fn serve_recipe(
    ctx: &RequestContext<'_>,
    state: &AppState,
    id: &str,
) -> Response<Full<Bytes>> {
    match content::load_recipe(&state.config.content, id).await {
        Ok(record) => {
            let page = render::recipe_page(&record);
            http::build_html_response(page.into_string(), ctx.is_head)
        }
        Err(ContentError::InvalidId) => {
            logger::log_warning(&format!("Rejected recipe identifier: {id:?}"));
            http::build_400_response()
        }
        Err(ContentError::NotFound) => http::build_404_response(),
        Err(e) => {
            logger::log_error(&format!("Failed to load recipe '{id}': {e}"));
            http::build_500_response()
        }
    }
}
