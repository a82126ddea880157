/// Application-wide constants
/// Limits, environment variable names and other fixed values live here

/// Environment variable holding the path to the configuration file
pub const ENV_CONF_FILE: &str = "OMPS_CONF_FILE";

/// Environment variable selecting the active configuration section
pub const ENV_CONF_SECTION: &str = "OMPS_CONF_SECTION";

/// Environment variable enabling developer mode
pub const ENV_DEVELOPER_ENV: &str = "OMPS_DEVELOPER_ENV";

/// Maximum uncompressed size of an uploaded archive in bytes (20 MB)
pub const DEFAULT_ZIPFILE_MAX_UNCOMPRESSED_SIZE: usize = 1024 * 1024 * 20;

/// Maximum request body size in bytes (2 MB)
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 1024 * 1024 * 2;

/// Release version used when none is supplied
pub const DEFAULT_RELEASE_VERSION: &str = "1.0.0";

/// Upload file extensions accepted by the service
pub const ALLOWED_EXTENSIONS: &[&str] = &[".zip"];

/// Key of the manifests archive in Koji build metadata
pub const KOJI_OPERATOR_MANIFESTS_ARCHIVE_KEY: &str = "operator_manifests_archive";

/// Configuration file used when OMPS_CONF_FILE is unset
pub const DEFAULT_CONF_FILE: &str = "/etc/omps/config.json";

/// Configuration file used in developer mode when OMPS_CONF_FILE is unset
pub const DEVELOPER_CONF_FILE: &str = "./conf/config.json";

pub const PROD_SECTION: &str = "ProdConfig";
pub const DEV_SECTION: &str = "DevConfig";
pub const TEST_SECTION: &str = "TestConfig";

/// Values of OMPS_DEVELOPER_ENV that turn developer mode on (case-insensitive)
pub const DEVELOPER_ENV_TRUTHY: &[&str] = &["1", "on", "true", "y", "yes"];

/// Default listening port
pub const DEFAULT_PORT: u16 = 8080;

/// Tracing directives appended to the configured log level
pub const DEFAULT_LOG_FILTER_TARGETS: &str = "tower_http=debug";
