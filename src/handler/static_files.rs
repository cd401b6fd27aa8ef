//! Static file serving module
//!
//! Handles static asset delivery, the per-recipe content passthrough,
//! and the SPA index fallback. Every request path is canonicalized and
//! checked for containment in its root before any file is read.

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Result of resolving a request path inside a root directory
#[derive(Debug)]
enum Resolved {
    File(PathBuf),
    Directory(PathBuf),
    Missing,
    Outside,
}

/// Canonicalize `rest` under `root` and classify the outcome
///
/// `Outside` means the resolved path escaped the root (traversal via
/// `..` segments or symlinks) and must never be served.
fn resolve_within(root: &Path, rest: &str) -> io::Result<Resolved> {
    let root = root.canonicalize()?;
    let candidate = root.join(rest.trim_start_matches('/'));

    match candidate.canonicalize() {
        Ok(resolved) => {
            if !resolved.starts_with(&root) {
                Ok(Resolved::Outside)
            } else if resolved.is_dir() {
                Ok(Resolved::Directory(resolved))
            } else {
                Ok(Resolved::File(resolved))
            }
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Resolved::Missing),
        Err(e) => Err(e),
    }
}

/// Serve a path under the static root with SPA fallback semantics
///
/// An existing file is served as-is; a directory is probed for the index
/// file; anything that does not exist gets the configured index document
/// with status 200, so client-side routes never surface a 404.
pub async fn serve_spa(
    ctx: &RequestContext<'_>,
    state: &AppState,
    rest: &str,
) -> Response<Full<Bytes>> {
    let root = Path::new(&state.config.content.static_root);

    match resolve_within(root, rest) {
        Ok(Resolved::File(path)) => serve_resolved_file(ctx, &path).await,
        Ok(Resolved::Directory(dir)) => {
            let index = dir.join(&state.config.content.index_file);
            if index.is_file() {
                serve_resolved_file(ctx, &index).await
            } else {
                serve_index(ctx, state).await
            }
        }
        Ok(Resolved::Missing) => serve_index(ctx, state).await,
        Ok(Resolved::Outside) => {
            logger::log_warning(&format!("Path traversal attempt blocked: {}", ctx.path));
            http::build_403_response()
        }
        Err(e) => {
            logger::log_error(&format!(
                "Failed to resolve '{}' under static root: {e}",
                ctx.path
            ));
            http::build_500_response()
        }
    }
}

/// Serve a file from the content root (per-recipe images and assets)
///
/// Plain passthrough: no index fallback, missing files are 404.
pub async fn serve_content_asset(
    ctx: &RequestContext<'_>,
    state: &AppState,
    rest: &str,
) -> Response<Full<Bytes>> {
    let root = Path::new(&state.config.content.content_root);

    match resolve_within(root, rest) {
        Ok(Resolved::File(path)) => serve_resolved_file(ctx, &path).await,
        Ok(Resolved::Directory(_) | Resolved::Missing) => http::build_404_response(),
        Ok(Resolved::Outside) => {
            logger::log_warning(&format!("Path traversal attempt blocked: {}", ctx.path));
            http::build_403_response()
        }
        Err(e) => {
            logger::log_error(&format!(
                "Failed to resolve '{}' under content root: {e}",
                ctx.path
            ));
            http::build_500_response()
        }
    }
}

/// Serve the configured SPA index document
async fn serve_index(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let index = Path::new(&state.config.content.static_root)
        .join(&state.config.content.index_file);

    match fs::read(&index).await {
        Ok(content) => build_file_response(ctx, &content, index.as_path()),
        Err(e) => {
            logger::log_error(&format!(
                "SPA index document '{}' unavailable: {e}",
                index.display()
            ));
            http::build_404_response()
        }
    }
}

/// Read an already-resolved file and build its response
async fn serve_resolved_file(ctx: &RequestContext<'_>, path: &Path) -> Response<Full<Bytes>> {
    match fs::read(path).await {
        Ok(content) => build_file_response(ctx, &content, path),
        Err(e) => {
            logger::log_error(&format!("Failed to read file '{}': {e}", path.display()));
            http::build_500_response()
        }
    }
}

/// Build a static file response with `ETag` and conditional GET support
fn build_file_response(
    ctx: &RequestContext<'_>,
    content: &[u8],
    path: &Path,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(content);
    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    let content_type = mime::get_content_type(path.extension().and_then(|e| e.to_str()));
    http::build_asset_response(
        Bytes::from(content.to_owned()),
        content_type,
        &etag,
        ctx.is_head,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        Config, ContentConfig, LoggingConfig, PerformanceConfig, ServerConfig,
    };
    use http_body_util::BodyExt;
    use std::fs as std_fs;

    fn test_state(root: &Path) -> AppState {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
                workers: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: false,
                access_log_format: "combined".to_string(),
                access_log_file: None,
                error_log_file: None,
            },
            performance: PerformanceConfig {
                keep_alive_timeout: 75,
                read_timeout: 15,
                write_timeout: 15,
                max_connections: None,
            },
            content: ContentConfig {
                content_root: root.join("recipes").to_string_lossy().into_owned(),
                static_root: root.join("static").to_string_lossy().into_owned(),
                index_file: "index.html".to_string(),
                recipe_file: "recipe.yml".to_string(),
                card_image: "card.jpg".to_string(),
            },
        };
        AppState::new(config, Vec::new())
    }

    fn setup_site(root: &Path) {
        std_fs::create_dir_all(root.join("static")).unwrap();
        std_fs::write(root.join("static/index.html"), "SPA INDEX").unwrap();
        std_fs::write(root.join("static/app.css"), "body {}").unwrap();
        std_fs::create_dir_all(root.join("recipes/pancakes")).unwrap();
        std_fs::write(root.join("recipes/pancakes/card.jpg"), b"jpegbytes").unwrap();
        // A file outside both roots, reachable only by traversal
        std_fs::write(root.join("secret.txt"), "top secret").unwrap();
    }

    fn ctx(path: &str) -> RequestContext<'_> {
        RequestContext {
            path,
            is_head: false,
            if_none_match: None,
        }
    }

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_resolve_within() {
        let tmp = tempfile::tempdir().unwrap();
        setup_site(tmp.path());
        let root = tmp.path().join("static");

        assert!(matches!(
            resolve_within(&root, "app.css").unwrap(),
            Resolved::File(_)
        ));
        assert!(matches!(
            resolve_within(&root, "").unwrap(),
            Resolved::Directory(_)
        ));
        assert!(matches!(
            resolve_within(&root, "missing.css").unwrap(),
            Resolved::Missing
        ));
        assert!(matches!(
            resolve_within(&root, "../secret.txt").unwrap(),
            Resolved::Outside
        ));
    }

    #[tokio::test]
    async fn test_spa_serves_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        setup_site(tmp.path());
        let state = test_state(tmp.path());

        let resp = serve_spa(&ctx("/static/app.css"), &state, "app.css").await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/css");
        assert_eq!(body_string(resp).await, "body {}");
    }

    #[tokio::test]
    async fn test_spa_falls_back_to_index_for_missing_paths() {
        let tmp = tempfile::tempdir().unwrap();
        setup_site(tmp.path());
        let state = test_state(tmp.path());

        for rest in ["missing-file.css", "some/client/route", "about"] {
            let resp = serve_spa(&ctx("/x"), &state, rest).await;
            assert_eq!(resp.status(), 200, "rest {rest:?}");
            assert_eq!(body_string(resp).await, "SPA INDEX", "rest {rest:?}");
        }
    }

    #[tokio::test]
    async fn test_spa_serves_index_for_directory_root() {
        let tmp = tempfile::tempdir().unwrap();
        setup_site(tmp.path());
        let state = test_state(tmp.path());

        let resp = serve_spa(&ctx("/"), &state, "").await;
        assert_eq!(resp.status(), 200);
        assert_eq!(body_string(resp).await, "SPA INDEX");
    }

    #[tokio::test]
    async fn test_spa_blocks_traversal() {
        let tmp = tempfile::tempdir().unwrap();
        setup_site(tmp.path());
        let state = test_state(tmp.path());

        let resp = serve_spa(&ctx("/static/../secret.txt"), &state, "../secret.txt").await;
        assert_eq!(resp.status(), 403);
    }

    #[tokio::test]
    async fn test_spa_conditional_get() {
        let tmp = tempfile::tempdir().unwrap();
        setup_site(tmp.path());
        let state = test_state(tmp.path());

        let etag = cache::generate_etag(b"body {}");
        let ctx = RequestContext {
            path: "/static/app.css",
            is_head: false,
            if_none_match: Some(etag),
        };
        let resp = serve_spa(&ctx, &state, "app.css").await;
        assert_eq!(resp.status(), 304);
    }

    #[tokio::test]
    async fn test_content_asset_passthrough() {
        let tmp = tempfile::tempdir().unwrap();
        setup_site(tmp.path());
        let state = test_state(tmp.path());

        let resp = serve_content_asset(&ctx("/recipe-content/pancakes/card.jpg"), &state, "pancakes/card.jpg").await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "image/jpeg");
    }

    #[tokio::test]
    async fn test_content_asset_missing_is_404() {
        let tmp = tempfile::tempdir().unwrap();
        setup_site(tmp.path());
        let state = test_state(tmp.path());

        let resp = serve_content_asset(&ctx("/x"), &state, "pancakes/missing.jpg").await;
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_content_asset_blocks_traversal() {
        let tmp = tempfile::tempdir().unwrap();
        setup_site(tmp.path());
        let state = test_state(tmp.path());

        let resp = serve_content_asset(&ctx("/x"), &state, "../secret.txt").await;
        assert_eq!(resp.status(), 403);
    }
}
