use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the logging system. Logs go to standard error unless a log
/// file is requested, in which case they are written there as JSON.
pub fn init_logging(log_file: Option<&Path>) {
    let filter = EnvFilter::from_default_env().add_directive("tep_scraper=info".parse().unwrap());

    match log_file {
        Some(path) => {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let name = path
                .file_name()
                .map(|n| n.to_os_string())
                .unwrap_or_else(|| "tep_scraper.log".into());

            // Non-blocking writer so slow disks never stall the pipeline
            let file_appender = tracing_appender::rolling::never(dir, name);
            let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = fmt::layer().json().with_writer(non_blocking_writer);

            tracing_subscriber::registry().with(filter).with(file_layer).init();

            // We need to keep the guard in scope to ensure logs are flushed on exit
            std::mem::forget(guard);
        }
        None => {
            let console_layer = fmt::layer().with_writer(std::io::stderr);
            tracing_subscriber::registry().with(filter).with(console_layer).init();
        }
    }
}
