//! Tracing setup for the CLI.
//!
//! Logs go to stderr (so command output on stdout stays clean) and, unless
//! disabled, to a daily rolling file under the logs directory.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "atelier=info,atelier_application=info,atelier_infrastructure=warn";
const LOG_FILE_PREFIX: &str = "atelier.log";

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held until
/// the process exits.
pub fn init(logs_dir: Option<&Path>, verbose: bool) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            "atelier=debug,atelier_application=debug,atelier_infrastructure=debug,atelier_interaction=debug".into()
        } else {
            DEFAULT_FILTER.into()
        }
    });

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, guard) = match logs_dir.and_then(|dir| std::fs::create_dir_all(dir).ok().map(|_| dir)) {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}
