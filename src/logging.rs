//! Opt-in file logging.
//!
//! The terminal belongs to the game, so logs never go to stdout or stderr.
//! When `RUST_LOG` is set, a daily rolling file is written under the
//! platform's local data directory; otherwise no subscriber is installed.

use directories::ProjectDirs;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Directory the log files go to.
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tooth-guard").map(|dirs| dirs.data_local_dir().join("logs"))
}

/// Filter for the given `RUST_LOG` value. Unset means no logging at all, so
/// there is no default level.
fn filter_from(directives: Option<&str>) -> Option<EnvFilter> {
    EnvFilter::try_new(directives?).ok()
}

/// Install the file subscriber if `RUST_LOG` asks for it.
///
/// Returns the directory being logged to.
pub fn init() -> Option<PathBuf> {
    let filter = filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())?;
    let dir = log_dir()?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&dir, "tooth-guard.log"));
    let _ = FILE_GUARD.set(guard);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    // Panics happen inside the alternate screen; keep a record of them
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("{}", info);
        default_hook(info);
    }));

    Some(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_ends_in_logs() {
        if let Some(dir) = log_dir() {
            assert!(dir.ends_with("logs"));
        }
    }

    #[test]
    fn test_unset_rust_log_installs_nothing() {
        assert!(filter_from(None).is_none());
    }

    #[test]
    fn test_rust_log_directives_are_used() {
        let filter = filter_from(Some("tooth_guard=debug,warn")).unwrap();
        assert!(filter.to_string().contains("tooth_guard=debug"));
    }
}
