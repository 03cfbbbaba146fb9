//! Stderr logging for the capture pipeline.
//!
//! [`init_with_level`] installs a tiny `log` backend that prefixes each line
//! with the time since startup and the emitting module, so classifier and
//! validator breadcrumbs line up with capture passes:
//!
//! ```text
//!    0.113s DEBUG detect: face detected over 640x480 frame: white white ...
//!    4.720s INFO  validator: cube state valid: blue=9 green=9 ...
//! ```

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

/// Last path segment of a module target, `cube_scan_classify::detect` →
/// `detect`.
fn short_target(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

struct ScanLogger {
    level: LevelFilter,
    started: Instant,
}

impl Log for ScanLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = self.started.elapsed().as_secs_f64();
        let _ = writeln!(
            std::io::stderr(),
            "{:>8.3}s {:<5} {}: {}",
            elapsed,
            record.level(),
            short_target(record.target()),
            record.args()
        );
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<ScanLogger> = OnceLock::new();

/// Install the capture-pipeline stderr logger with the given level filter.
///
/// The first call wins; later calls (any level) are no-ops reporting `Ok`.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let logger = LOGGER.get_or_init(|| ScanLogger {
            level,
            started: Instant::now(),
        });
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

/// Install a compact `tracing` subscriber for span-level diagnostics.
///
/// `RUST_LOG` overrides the default filter; without it, `verbose` picks
/// between `debug` and `info`.
#[cfg(feature = "tracing")]
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = fmt()
        .with_env_filter(filter)
        .with_timer(fmt::time::Uptime::default())
        .compact()
        .finish()
        .try_init();
}
