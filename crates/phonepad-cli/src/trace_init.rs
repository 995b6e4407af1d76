use std::path::Path;
use std::sync::Once;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the global subscriber. `RUST_LOG` takes precedence over
/// `default_filter`.
///
/// With `log_dir` set, events are written as JSON lines to
/// `padtool-trace.jsonl` in that directory; the returned guard must be held
/// until exit so buffered lines are flushed. Without it, events go to stderr.
pub fn init_tracing(log_dir: Option<&Path>, default_filter: &str) -> Option<WorkerGuard> {
    let mut guard = None;
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        match log_dir {
            Some(dir) => {
                let file_appender = tracing_appender::rolling::never(dir, "padtool-trace.jsonl");
                let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
                guard = Some(worker_guard);

                tracing_subscriber::fmt()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
                    .with_env_filter(filter)
                    .init();
            }
            None => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_env_filter(filter)
                    .init();
            }
        }
    });
    guard
}
