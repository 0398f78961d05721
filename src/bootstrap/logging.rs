//! Setup for the application logging.
//!
//! It redirects the log info to the standard error with the log level given on
//! the command line, so that the standard output only carries the generated
//! strings.
//!
//! - `Off` (i.e. don't load any subscriber...)
//! - `Error`
//! - `Warn`
//! - `Info`
//! - `Debug`
//! - `Trace`
use std::sync::Once;

use clap::ValueEnum;
use tracing::debug;
use tracing::level_filters::LevelFilter;

static INIT: Once = Once::new();

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TraceStyle {
    Default,
    Pretty,
    #[default]
    Compact,
    Json,
}

impl std::fmt::Display for TraceStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let style = match self {
            TraceStyle::Default => "Default Style",
            TraceStyle::Pretty => "Pretty Style",
            TraceStyle::Compact => "Compact Style",
            TraceStyle::Json => "Json Format",
        };

        f.write_str(style)
    }
}

/// It redirects the log info to the standard error with the given level and style.
///
/// Only the first call installs a subscriber.
pub fn setup(level: LogLevel, style: TraceStyle) {
    let filter = map_to_tracing_level_filter(level);

    if filter == LevelFilter::OFF {
        return;
    }

    INIT.call_once(|| {
        stderr_init(filter, style);
    });
}

fn map_to_tracing_level_filter(log_level: LogLevel) -> LevelFilter {
    match log_level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}

fn stderr_init(filter: LevelFilter, style: TraceStyle) {
    let builder = tracing_subscriber::fmt().with_max_level(filter).with_writer(std::io::stderr);

    let () = match style {
        TraceStyle::Default => builder.init(),
        TraceStyle::Pretty => builder.pretty().init(),
        TraceStyle::Compact => builder.compact().init(),
        TraceStyle::Json => builder.json().init(),
    };

    debug!("logging initialized with {style}.");
}
