//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method
//! validation, route classification, dispatching, and the access log
//! entry written after the downstream handler completes.

use crate::config::AppState;
use crate::handler::{pages, static_files};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Route classes, in priority order
///
/// Classification is a pure function of the request path; everything that
/// matches no explicit rule goes through the SPA fallback.
#[derive(Debug, PartialEq, Eq)]
pub enum Route<'a> {
    /// Exact root path: rendered recipe listing
    Home,
    /// `/recipe/{id}` with a single identifier segment
    RecipePage { id: &'a str },
    /// `/recipe-content/*` passthrough from the content root
    RecipeContent { rest: &'a str },
    /// `/static/*` asset lookup under the static root
    StaticAsset { rest: &'a str },
    /// Everything else: SPA fallback against the static root
    SpaFallback { rest: &'a str },
}

impl<'a> Route<'a> {
    pub fn classify(path: &'a str) -> Self {
        if path == "/" {
            return Self::Home;
        }
        if let Some(id) = path.strip_prefix("/recipe/") {
            // The recipe pattern binds exactly one path segment
            if !id.is_empty() && !id.contains('/') {
                return Self::RecipePage { id };
            }
        }
        if let Some(rest) = path.strip_prefix("/recipe-content/") {
            return Self::RecipeContent { rest };
        }
        if let Some(rest) = path.strip_prefix("/static/") {
            return Self::StaticAsset { rest };
        }
        Self::SpaFallback {
            rest: path.trim_start_matches('/'),
        }
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method();
    let uri = req.uri();
    let is_head = *method == Method::HEAD;

    let response = if let Some(resp) = check_http_method(method) {
        resp
    } else {
        let ctx = RequestContext {
            path: uri.path(),
            is_head,
            if_none_match: header_value(&req, "if-none-match"),
        };
        dispatch(&ctx, &state).await
    };

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            remote_addr.ip().to_string(),
            method.to_string(),
            uri.path().to_string(),
        );
        entry.query = uri.query().map(ToString::to_string);
        entry.host = header_value(&req, "host");
        entry.referer = header_value(&req, "referer");
        entry.user_agent = header_value(&req, "user-agent");
        entry.status = response.status().as_u16();
        entry.body_bytes = content_length(&response);
        entry.request_time_us =
            u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route request based on path classification
pub(crate) async fn dispatch(
    ctx: &RequestContext<'_>,
    state: &AppState,
) -> Response<Full<Bytes>> {
    match Route::classify(ctx.path) {
        Route::Home => pages::serve_home(ctx, state),
        Route::RecipePage { id } => pages::serve_recipe(ctx, state, id).await,
        Route::RecipeContent { rest } => {
            static_files::serve_content_asset(ctx, state, rest).await
        }
        Route::StaticAsset { rest } | Route::SpaFallback { rest } => {
            static_files::serve_spa(ctx, state, rest).await
        }
    }
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Extract a header as an owned string, if present and valid UTF-8
fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// Read the Content-Length a response builder set, for access logging
fn content_length(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}
