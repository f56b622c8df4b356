//! Embedded dealership frontend.
//!
//! The single-page site under `assets/` is compiled into the binary with
//! rust-embed and served next to the API, so one process serves everything.

use axum::{
    body::Body,
    extract::Path,
    http::{header, Response, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use rust_embed::RustEmbed;

use crate::repository::CarRepository;

#[derive(RustEmbed)]
#[folder = "assets"]
pub struct SiteAssets;

pub fn router() -> Router<CarRepository> {
    Router::new()
        .route("/", get(serve_index))
        .route("/assets/{*path}", get(serve_asset))
}

async fn serve_index() -> impl IntoResponse {
    serve_file("index.html")
}

async fn serve_asset(Path(path): Path<String>) -> impl IntoResponse {
    serve_file(&path)
}

fn serve_file(path: &str) -> Response<Body> {
    match SiteAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime.as_ref())
                .header(header::CACHE_CONTROL, "public, max-age=3600")
                .body(Body::from(content.data.into_owned()))
                .unwrap()
        }
        None => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from("Not Found"))
            .unwrap(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_page_is_embedded_with_filter_controls() {
        let index = SiteAssets::get("index.html").expect("index.html should be embedded");
        let html = std::str::from_utf8(&index.data).unwrap();
        assert!(html.contains("search-input"));
        assert!(html.contains("payment-filter"));
        for bucket in ["all", "200", "300", "400", "400+"] {
            assert!(html.contains(&format!("value=\"{}\"", bucket)));
        }
    }

    #[test]
    fn app_script_carries_filter_and_fallback_logic() {
        let script = SiteAssets::get("app.js").expect("app.js should be embedded");
        let js = std::str::from_utf8(&script.data).unwrap();
        assert!(js.contains("monthlyPrice"));
        assert!(js.contains("FALLBACK_CARS"));
        assert!(js.contains("/api/cars"));
    }

    #[test]
    fn served_files_get_content_types() {
        let response = serve_file("app.js");
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.contains("javascript"));

        let response = serve_file("missing.png");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
