//! Serves the pre-built web client.
//!
//! Anything outside `/api` resolves to a file in the static directory if one
//! exists, otherwise to the index document so the client-side router can
//! take over. Unknown `/api` paths get a JSON 404.

use crate::constants::INDEX_DOCUMENT;
use crate::error::AppError;
use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::path::{Component, Path, PathBuf};

use super::AppState;

pub async fn fallback(State(state): State<AppState>, uri: Uri) -> Response {
    if is_api_path(uri.path()) {
        return api_not_found().await;
    }

    let Ok(path) = urlencoding::decode(uri.path()) else {
        return serve_file(&state.static_dir.join(INDEX_DOCUMENT)).await;
    };

    if let Some(asset) = resolve_asset(&state.static_dir, &path) {
        if tokio::fs::metadata(&asset).await.is_ok_and(|m| m.is_file()) {
            return serve_file(&asset).await;
        }
    }

    serve_file(&state.static_dir.join(INDEX_DOCUMENT)).await
}

/// Answer for API requests that match no route, including known paths
/// called with an unsupported method.
pub async fn api_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "API route not found" })),
    )
        .into_response()
}

fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

/// Map a request path onto the static directory. Returns `None` for the
/// root path and for anything that would escape the directory.
fn resolve_asset(static_dir: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = Path::new(request_path.trim_start_matches('/'));
    let mut resolved = static_dir.to_path_buf();
    let mut pushed = false;

    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                resolved.push(part);
                pushed = true;
            }
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    pushed.then_some(resolved)
}

async fn serve_file(path: &Path) -> Response {
    match tokio::fs::read(path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type(path))], bytes).into_response(),
        Err(e) => {
            log::warn!("Failed to read static file {}: {e}", path.display());
            AppError::NotFound { entity: "Page" }.into_response()
        }
    }
}

fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "html" | "htm" => "text/html; charset=utf-8",
        "js" | "mjs" => "text/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" | "map" => "application/json",
        "txt" => "text/plain; charset=utf-8",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "ico" => "image/x-icon",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "webmanifest" => "application/manifest+json",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_api_path() {
        assert!(is_api_path("/api"));
        assert!(is_api_path("/api/unknown"));
        assert!(!is_api_path("/apiary"));
        assert!(!is_api_path("/tasks"));
    }

    #[test]
    fn test_resolve_asset() {
        let root = Path::new("/srv/www");
        assert_eq!(
            resolve_asset(root, "/assets/logo.svg"),
            Some(PathBuf::from("/srv/www/assets/logo.svg"))
        );
        assert_eq!(resolve_asset(root, "/"), None);
        assert_eq!(resolve_asset(root, "/../etc/passwd"), None);
        assert_eq!(resolve_asset(root, "/assets/../../secret"), None);
    }

    #[test]
    fn test_resolve_asset_after_decoding() {
        let root = Path::new("/srv/www");
        let decoded = urlencoding::decode("/assets/my%20font.woff2").unwrap();
        assert_eq!(
            resolve_asset(root, &decoded),
            Some(PathBuf::from("/srv/www/assets/my font.woff2"))
        );

        let encoded_traversal = urlencoding::decode("/assets/%2E%2E/%2E%2E/secret").unwrap();
        assert_eq!(resolve_asset(root, &encoded_traversal), None);
    }

    #[test]
    fn test_content_type() {
        assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("main.JS")), "text/javascript; charset=utf-8");
        assert_eq!(content_type(Path::new("blob")), "application/octet-stream");
    }
}
