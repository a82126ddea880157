use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Active config section name
    pub config_section: String,
    pub developer_mode: bool,
    /// Release version used when an upload does not name one
    pub default_release_version: String,
    /// Maximum request body size in bytes
    pub max_content_length: usize,
    /// Maximum uncompressed archive size in bytes
    pub zipfile_max_uncompressed_size: usize,
    pub allowed_extensions: Vec<String>,
    /// Key of the manifests archive in Koji build metadata
    pub archive_key: String,
}
