use std::path::PathBuf;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber;

pub fn init(level: Level, console: bool, log_file: Option<PathBuf>) -> Vec<WorkerGuard> {
    let mut guards = Vec::new();
    let format = tracing_subscriber::fmt::format()
        .with_level(true) // include levels in formatted output
        .with_target(true) // don't include targets
        .with_thread_ids(false) // don't include the thread ID of the current thread
        .with_thread_names(false) // include the name of the current thread
        .compact(); // use the `Compact` formatting style.
    match log_file {
        Some(path) if !console => {
            let appender = tracing_appender::rolling::never(".", path);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            guards.push(guard);
            tracing_subscriber::fmt()
                .event_format(format)
                .with_writer(writer)
                .with_ansi(false)
                .with_max_level(level)
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .event_format(format)
                .with_max_level(level)
                .init();
        }
    }
    guards
}
