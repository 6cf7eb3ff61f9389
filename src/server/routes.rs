//! Axum router for the REST source endpoints

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::manifest::error::ManifestError;
use crate::manifest::models::{DataResponse, ErrorResponseEntry, ManifestSearchRequest};
use crate::manifest::service::ManifestService;

pub const INFORMATION_ENDPOINT: &str = "/information";
pub const MANIFEST_SEARCH_ENDPOINT: &str = "/manifestSearch";
pub const PACKAGE_MANIFESTS_ENDPOINT: &str = "/packageManifests/{identifier}";

/// Create the application router
pub fn create_router(service: Arc<ManifestService>, request_timeout: Duration) -> Router {
    Router::new()
        .route(INFORMATION_ENDPOINT, get(handle_information))
        .route(MANIFEST_SEARCH_ENDPOINT, post(handle_manifest_search))
        .route(PACKAGE_MANIFESTS_ENDPOINT, get(handle_package_manifests))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            request_timeout,
        ))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct PackageManifestsQuery {
    #[serde(rename = "Version")]
    pub version: Option<String>,
}

async fn handle_information(State(service): State<Arc<ManifestService>>) -> Response {
    Json(DataResponse {
        data: service.information(),
    })
    .into_response()
}

async fn handle_manifest_search(
    State(service): State<Arc<ManifestService>>,
    payload: Result<Json<ManifestSearchRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    match service.manifest_search(&request).await {
        Ok(manifests) => Json(DataResponse { data: manifests }).into_response(),
        Err(e) => manifest_error_response(e),
    }
}

async fn handle_package_manifests(
    State(service): State<Arc<ManifestService>>,
    Path(identifier): Path<String>,
    Query(query): Query<PackageManifestsQuery>,
) -> Response {
    match service
        .package_manifests(&identifier, query.version.as_deref())
        .await
    {
        Ok(manifests) => Json(DataResponse { data: manifests }).into_response(),
        Err(e) => manifest_error_response(e),
    }
}

fn manifest_error_response(e: ManifestError) -> Response {
    if e.is_not_found() {
        return StatusCode::NO_CONTENT.into_response();
    }

    error!("Manifest query failed: {}", e);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());

    error!("Request handler panicked: {}", message);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
}

fn error_response(status: StatusCode, message: String) -> Response {
    (
        status,
        Json(vec![ErrorResponseEntry {
            error_code: status.as_u16(),
            error_message: message,
        }]),
    )
        .into_response()
}
