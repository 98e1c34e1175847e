//! Common test utilities and logging infrastructure
//!
//! Sets up `tracing` output for integration tests. The crate itself logs
//! through the `log` facade; `tracing-subscriber` bridges those records, so
//! `RUST_LOG=cli_report=trace` shows layout decisions next to test output.
//!
//! # Environment Variables
//!
//! - `RUST_LOG=debug` - Enable debug logging in tests
//! - `RUST_LOG=cli_report::renderables=trace` - Module-specific tracing
//! - `TEST_LOG_JSON=1` - Output JSON format for CI parsing

#![allow(dead_code)]

pub mod assertions;

use std::sync::Once;

use cli_report::clock::FixedClock;
use cli_report::reporter::Reporter;
use cli_report::sink::BufferSink;
use time::macros::datetime;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Moment every test clock is fixed at.
pub const FIXED_CLOCK: FixedClock = FixedClock(datetime!(2024-03-05 14:07:09 UTC));

/// Initialize test logging infrastructure.
///
/// Idempotent; safe to call from every test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let use_json = std::env::var("TEST_LOG_JSON").is_ok();
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("cli_report=debug,test=info"));

        if use_json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_test_writer())
                .try_init()
                .ok();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_ansi(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_target(true)
                        .compact(),
                )
                .try_init()
                .ok();
        }
    });
}

/// A test span guard that logs entry and exit.
pub fn test_phase(name: &str) -> tracing::span::EnteredSpan {
    let span = tracing::info_span!("test_phase", phase = name);
    tracing::info!(phase = name, "entering test phase");
    span.entered()
}

/// A reporter on a shared buffer with a fixed clock and styling on.
pub fn buffered_reporter() -> (Reporter<BufferSink>, BufferSink) {
    let buffer = BufferSink::new();
    let reporter = Reporter::builder()
        .clock(FIXED_CLOCK)
        .build(buffer.clone());
    (reporter, buffer)
}

/// Same as [`buffered_reporter`] with escape codes off.
pub fn plain_reporter(width: usize) -> (Reporter<BufferSink>, BufferSink) {
    let buffer = BufferSink::new();
    let reporter = Reporter::builder()
        .clock(FIXED_CLOCK)
        .width(width)
        .no_color()
        .build(buffer.clone());
    (reporter, buffer)
}
