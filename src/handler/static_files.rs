//! Static file serving module
//!
//! Resolves request paths against the frontend asset tree (plus the
//! root-level styles tree), loads the file, and builds the response.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::config::StaticConfig;
use crate::http::{self, mime, response::build_file_response};
use crate::logger;

const STYLES_PREFIX: &str = "/styles/";

/// Serve a static file for the given request path
///
/// Any miss or read failure becomes a plain-text 404.
pub async fn serve(path: &str, cfg: &StaticConfig, is_head: bool) -> Response<Full<Bytes>> {
    let file_path = resolve_path(path, cfg);

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_warning(&format!(
                "Static file miss '{}': {e}",
                file_path.display()
            ));
            return http::build_404_response();
        }
    };

    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));
    logger::log_response(content.len());
    build_file_response(content, content_type, is_head)
}

/// Map a request path to a filesystem path
///
/// `/` serves the frontend index document, `/styles/*` resolves relative to
/// the project root, everything else resolves inside the frontend asset
/// directory. `..` segments are stripped to keep resolution inside the
/// configured trees.
fn resolve_path(path: &str, cfg: &StaticConfig) -> PathBuf {
    if path == "/" {
        return Path::new(&cfg.frontend_dir).join(&cfg.index_file);
    }

    let clean = path.replace("..", "");
    if let Some(rest) = clean.strip_prefix(STYLES_PREFIX) {
        Path::new(&cfg.styles_dir).join(rest.trim_start_matches('/'))
    } else {
        Path::new(&cfg.frontend_dir).join(clean.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> StaticConfig {
        StaticConfig {
            frontend_dir: "frontend".to_string(),
            styles_dir: "styles".to_string(),
            index_file: "index.html".to_string(),
        }
    }

    #[test]
    fn test_root_serves_index() {
        assert_eq!(resolve_path("/", &cfg()), Path::new("frontend/index.html"));
    }

    #[test]
    fn test_styles_resolve_from_project_root() {
        assert_eq!(
            resolve_path("/styles/main.css", &cfg()),
            Path::new("styles/main.css")
        );
    }

    #[test]
    fn test_other_paths_resolve_from_frontend_dir() {
        assert_eq!(
            resolve_path("/script.js", &cfg()),
            Path::new("frontend/script.js")
        );
        assert_eq!(
            resolve_path("/img/logo.png", &cfg()),
            Path::new("frontend/img/logo.png")
        );
    }

    #[test]
    fn test_traversal_segments_are_stripped() {
        let resolved = resolve_path("/../../etc/passwd", &cfg());
        assert!(resolved.starts_with("frontend"));
        assert!(!resolved.to_string_lossy().contains(".."));
    }

    #[tokio::test]
    async fn test_serve_miss_is_plain_404() {
        let dir = tempfile::TempDir::new().unwrap();
        let cfg = StaticConfig {
            frontend_dir: dir.path().join("frontend").to_string_lossy().into_owned(),
            styles_dir: dir.path().join("styles").to_string_lossy().into_owned(),
            index_file: "index.html".to_string(),
        };
        let resp = serve("/missing.html", &cfg, false).await;
        assert_eq!(resp.status(), 404);
        assert_eq!(
            resp.headers()["Content-Type"],
            "text/plain; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_serve_existing_file_with_content_type() {
        let dir = tempfile::TempDir::new().unwrap();
        let frontend = dir.path().join("frontend");
        std::fs::create_dir_all(&frontend).unwrap();
        std::fs::write(frontend.join("index.html"), "<html></html>").unwrap();

        let cfg = StaticConfig {
            frontend_dir: frontend.to_string_lossy().into_owned(),
            styles_dir: dir.path().join("styles").to_string_lossy().into_owned(),
            index_file: "index.html".to_string(),
        };
        let resp = serve("/", &cfg, false).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/html; charset=utf-8");
        assert_eq!(resp.headers()["Content-Length"], "13");
    }
}
