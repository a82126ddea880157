//! Lookups through the env var name constants against the real process environment.
//! Kept as a single test so nothing else in this binary touches the environment.

use omps::config::ConfigSource;
use omps::constants::{ENV_CONF_FILE, ENV_CONF_SECTION, ENV_DEVELOPER_ENV, TEST_SECTION};
use std::env;
use std::path::PathBuf;

#[test]
fn conf_file_is_read_through_constant_name() {
    env::remove_var(ENV_DEVELOPER_ENV);
    env::remove_var(ENV_CONF_SECTION);
    env::set_var("OMPS_CONF_FILE", "/tmp/x.conf");

    assert_eq!(env::var(ENV_CONF_FILE).unwrap(), "/tmp/x.conf");

    let source = ConfigSource::from_env();
    assert_eq!(source.file, Some(PathBuf::from("/tmp/x.conf")));
    assert!(source.file_explicit);

    env::set_var(ENV_CONF_SECTION, TEST_SECTION);
    env::set_var(ENV_DEVELOPER_ENV, "true");
    let source = ConfigSource::from_env();
    assert_eq!(source.section, TEST_SECTION);
    assert!(source.developer_mode);

    env::remove_var(ENV_CONF_FILE);
    env::remove_var(ENV_CONF_SECTION);
    env::remove_var(ENV_DEVELOPER_ENV);
}
