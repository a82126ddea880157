use crate::config::Config;
use crate::constants::DEFAULT_LOG_FILTER_TARGETS;
use tracing::Subscriber;
use tracing_subscriber::{
    fmt::MakeWriter, layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Log level used until the config has been loaded
const STARTUP_LOG_LEVEL: &str = "info";

fn directives_for(level: &str) -> String {
    format!("omps={},{}", level, DEFAULT_LOG_FILTER_TARGETS)
}

/// Swaps the startup filter for the configured one, unless RUST_LOG was given
pub struct LogFilterHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl LogFilterHandle {
    pub fn apply_config(&self, config: &Config) -> Result<(), reload::Error> {
        if self.from_env {
            return Ok(());
        }
        self.handle
            .reload(EnvFilter::new(directives_for(&config.log_level)))
    }
}

/// Build the subscriber without installing it
///
/// `env_directives` wins over the configured log level when it parses.
pub fn subscriber<W>(
    env_directives: Option<String>,
    make_writer: W,
) -> (impl Subscriber + Send + Sync + 'static, LogFilterHandle)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter = env_directives.and_then(|directives| EnvFilter::try_new(directives).ok());
    let from_env = env_filter.is_some();
    let filter = env_filter.unwrap_or_else(|| EnvFilter::new(directives_for(STARTUP_LOG_LEVEL)));

    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(make_writer));

    (subscriber, LogFilterHandle { handle, from_env })
}

/// Install the global subscriber, reading RUST_LOG
///
/// Call before loading the config so loader warnings are not dropped.
pub fn init() -> LogFilterHandle {
    let (subscriber, handle) = subscriber(
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        std::io::stdout,
    );
    subscriber.init();
    handle
}
