use crate::config::Config;
use crate::constants::{ALLOWED_EXTENSIONS, KOJI_OPERATOR_MANIFESTS_ARCHIVE_KEY};
use crate::models::HealthResponse;
use axum::{extract::State, Json};
use std::sync::Arc;

/// Health check endpoint
///
/// Reports the effective limits so operators can confirm what a deployment enforces.
pub async fn health(State(config): State<Arc<Config>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        config_section: config.section.clone(),
        developer_mode: config.developer_mode,
        default_release_version: config.default_release_version.clone(),
        max_content_length: config.max_content_length,
        zipfile_max_uncompressed_size: config.zipfile_max_uncompressed_size,
        allowed_extensions: ALLOWED_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        archive_key: KOJI_OPERATOR_MANIFESTS_ARCHIVE_KEY.to_string(),
    })
}
