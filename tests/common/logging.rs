//! Logging for the Integration Tests
//!
//! Tests that want to see the generator trace events start their own logging:
//!
//! ```text
//! INIT.call_once(|| tracing_stderr_init(LevelFilter::TRACE));
//! ```
use std::sync::Once;

use tracing::level_filters::LevelFilter;

#[allow(dead_code)]
pub static INIT: Once = Once::new();

#[allow(dead_code)]
pub fn tracing_stderr_init(filter: LevelFilter) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_test_writer();

    builder.compact().init();

    tracing::info!("Logging initialized");
}
