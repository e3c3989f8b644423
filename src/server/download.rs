// src/server/download.rs
// =============================================================================
// GET /download serves the latest export file.
//
// The file is read fresh on every request, so a client always gets whatever
// the last successful run wrote. 404 until the first run completes.
// =============================================================================

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use log::error;

use crate::report::XLSX_CONTENT_TYPE;

pub fn router(export_path: PathBuf) -> Router {
    Router::new()
        .route("/download", get(download))
        .with_state(Arc::new(export_path))
}

async fn download(State(path): State<Arc<PathBuf>>) -> Response {
    match tokio::fs::read(path.as_path()).await {
        Ok(bytes) => {
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "records.xlsx".to_string());

            (
                [
                    (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", filename),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            (StatusCode::NOT_FOUND, "No export available yet").into_response()
        }
        Err(e) => {
            error!("Could not read {}: {}", path.display(), e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
