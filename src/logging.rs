//! Logging configuration for ragchat

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

use crate::config::LoggingConfig;
use crate::errors::RagChatError;
use crate::Result;

const LOGS_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "ragchat.log";

/// Build the filter directive for a level, e.g. `info,ragchat=info`
pub fn filter_directive(level: &str) -> String {
    format!("{level},ragchat={level}")
}

/// Initialize logging from configuration.
///
/// `verbose` forces debug level regardless of the configured one. The returned
/// guard flushes the file writer and must be held for the life of the process.
pub fn init_logging(config: &LoggingConfig, verbose: bool) -> Result<Option<WorkerGuard>> {
    let level = if verbose { "debug" } else { config.level.as_str() };
    let env_filter = EnvFilter::try_new(filter_directive(level))
        .map_err(|e| RagChatError::ConfigError(format!("invalid log level {level:?}: {e}")))?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = if config.file_output {
        let logs_dir = Path::new(LOGS_DIR);
        if !logs_dir.exists() {
            std::fs::create_dir_all(logs_dir)?;
        }

        let file_appender = tracing_appender::rolling::daily(LOGS_DIR, LOG_FILE_PREFIX);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(non_blocking)
            .with_ansi(false); // No colors in file
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| RagChatError::Custom(format!("logging already initialized: {e}")))?;

    tracing::info!("Logging initialized with level: {}", level);
    if config.file_output {
        tracing::info!("Log files will be saved to: {LOGS_DIR}/{LOG_FILE_PREFIX}.YYYY-MM-DD");
    }

    Ok(guard)
}
