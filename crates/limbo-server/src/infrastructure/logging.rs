//! Structured logging setup.
//!
//! The subscriber is installed before the settings are read, so it starts at
//! `info` (or whatever `RUST_LOG` says).  Once `debugLevel` is known the
//! filter is swapped through a `reload` handle.  An explicit `RUST_LOG`
//! always wins over the document.

use tracing::warn;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Maps the document's `debugLevel` onto a `tracing` level.
///
/// | debugLevel | level |
/// |---|---|
/// | ≤ 0 | error |
/// | 1 | warn |
/// | 2 | info |
/// | ≥ 3 | debug |
pub fn level_for_debug_level(debug_level: i32) -> LevelFilter {
    match debug_level {
        i32::MIN..=0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

/// Handle for adjusting the installed filter after startup.
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

/// Installs the global subscriber.
///
/// Must be called at most once per process.
pub fn init() -> LogHandle {
    let env = EnvFilter::try_from_default_env();
    let from_env = env.is_ok();
    let (filter, handle) =
        reload::Layer::new(env.unwrap_or_else(|_| EnvFilter::new("info")));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    LogHandle {
        filter: handle,
        from_env,
    }
}

impl LogHandle {
    /// Switches the filter to the level implied by `debug_level`, unless
    /// `RUST_LOG` was set at startup.
    pub fn apply_debug_level(&self, debug_level: i32) {
        if self.from_env {
            return;
        }
        let level = level_for_debug_level(debug_level);
        if let Err(e) = self
            .filter
            .reload(EnvFilter::default().add_directive(level.into()))
        {
            warn!("failed to apply debugLevel {debug_level}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_level_mapping() {
        assert_eq!(level_for_debug_level(-4), LevelFilter::ERROR);
        assert_eq!(level_for_debug_level(0), LevelFilter::ERROR);
        assert_eq!(level_for_debug_level(1), LevelFilter::WARN);
        assert_eq!(level_for_debug_level(2), LevelFilter::INFO);
        assert_eq!(level_for_debug_level(3), LevelFilter::DEBUG);
        assert_eq!(level_for_debug_level(99), LevelFilter::DEBUG);
    }
}
