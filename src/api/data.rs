//! Static data routes
//!
//! Serves the catalog documents exactly as stored; the views fetch them once
//! per page load and run every query locally.

use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use std::path::PathBuf;

/// Directory holding the static documents
#[derive(Debug, Clone)]
pub struct DataDir(pub PathBuf);

/// GET /data/{document}
#[get("/{document}")]
pub async fn get_document(
    req: HttpRequest,
    path: web::Path<String>,
    data_dir: web::Data<DataDir>,
) -> HttpResponse {
    let document = path.into_inner();

    if !is_document_name(&document) {
        return HttpResponse::NotFound().json(serde_json::json!({
            "error": "Document not found"
        }));
    }

    let file_path = data_dir.0.join(&document);
    match actix_files::NamedFile::open(&file_path) {
        Ok(file) => file.into_response(&req),
        Err(e) => {
            tracing::debug!("Document {} unavailable: {}", file_path.display(), e);
            HttpResponse::NotFound().json(serde_json::json!({
                "error": "Document not found"
            }))
        }
    }
}

/// GET /health
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Only bare `*.json` file names are served, never nested paths
fn is_document_name(name: &str) -> bool {
    name.ends_with(".json")
        && !name.starts_with('.')
        && !name.contains(['/', '\\'])
        && !name.contains("..")
}

/// Configure data routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_document);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test as actix_test, App};
    use tempfile::TempDir;

    #[test]
    fn test_is_document_name() {
        assert!(is_document_name("artists.json"));
        assert!(!is_document_name("../secret.json"));
        assert!(!is_document_name("nested/artists.json"));
        assert!(!is_document_name("settings.toml"));
        assert!(!is_document_name(".hidden.json"));
    }

    #[actix_web::test]
    async fn test_serves_document() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("artists.json"), r#"[{"id":1,"name":"Amy"}]"#).unwrap();

        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(DataDir(temp_dir.path().to_path_buf())))
                .service(health)
                .service(web::scope("/data").configure(configure)),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/data/artists.json").to_request();
        let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body[0]["name"], "Amy");

        let req = actix_test::TestRequest::get().uri("/data/missing.json").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

        let req = actix_test::TestRequest::get().uri("/health").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}
