//! Telemetry logic.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

use crate::config::DEFAULT_LOG_LEVEL;

/// Handle on the installed log filter.
pub struct Logging {
    filter: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

/// Install the global subscriber.
///
/// Filters with `RUST_LOG` when it is set and valid, otherwise with
/// [`DEFAULT_LOG_LEVEL`] until [`Logging::set_level`] is called.
pub fn setup_logging() -> Logging {
    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(DEFAULT_LOG_LEVEL), false),
    };
    let (filter, handle) = reload::Layer::new(filter);

    // Logs go to stderr, stdout carries command output.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();

    Logging {
        filter: handle,
        from_env,
    }
}

impl Logging {
    /// Switch to `level`, unless `RUST_LOG` already decided.
    pub fn set_level(&self, level: &str) {
        if self.from_env {
            return;
        }

        if let Err(err) = self.filter.reload(EnvFilter::new(level)) {
            tracing::warn!(error = %err, %level, "cannot apply log level");
        }
    }
}
