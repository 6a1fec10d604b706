//! Subscriber setup.
//!
//! The subscriber goes in before the config file is read so config loading
//! is logged. `[logging].level` is applied afterwards through a reload
//! handle, unless `RUST_LOG` or `--log-level` already chose the filter.

use colloquy_config::LogLevel;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{reload, EnvFilter, Registry};

/// Handle for adjusting the filter once the config is known.
pub struct LogControl {
    handle: reload::Handle<EnvFilter, Registry>,
    /// Set when `RUST_LOG` or the flag chose the filter.
    pinned: bool,
}

impl LogControl {
    /// Switch to the configured level unless the filter is pinned.
    pub fn apply_config_level(&self, level: LogLevel) {
        if self.pinned {
            return;
        }
        if let Err(e) = self.handle.reload(EnvFilter::new(level.directive())) {
            tracing::warn!("failed to apply configured log level: {e}");
        }
    }
}

/// Build the subscriber. `env` is the `RUST_LOG` filter, if any; it wins
/// over `flag`, which wins over the default level.
pub fn build<W>(
    env: Option<EnvFilter>,
    flag: Option<LogLevel>,
    writer: W,
) -> (impl tracing::Subscriber + Send + Sync + 'static, LogControl)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, pinned) = match (env, flag) {
        (Some(filter), _) => (filter, true),
        (None, Some(level)) => (EnvFilter::new(level.directive()), true),
        (None, None) => (EnvFilter::new(LogLevel::default().directive()), false),
    };

    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(writer));
    (subscriber, LogControl { handle, pinned })
}

/// Install the global subscriber, logging to stderr.
pub fn init(flag: Option<LogLevel>) -> LogControl {
    let env = EnvFilter::try_from_default_env().ok();
    let (subscriber, control) = build(env, flag, std::io::stderr);
    subscriber.init();
    control
}
