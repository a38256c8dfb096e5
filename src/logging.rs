//! Logging configuration for the browser
//!
//! Sets up tracing with a console writer: each event becomes one
//! `console.error/warn/info/debug` call, so the core's state-transition logs
//! show up next to the page's own.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::{
    filter::Targets,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Hands out one [`ConsoleWriter`] per event
pub struct ConsoleMakeWriter;

/// Buffers a formatted event and emits it on drop
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    /// Buffered text without the trailing newline, leaving the buffer empty
    fn take_message(&mut self) -> Option<String> {
        let text = String::from_utf8_lossy(&self.buffer).trim_end().to_string();
        self.buffer.clear();
        (!text.is_empty()).then_some(text)
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let Some(message) = self.take_message() else {
            return;
        };
        let message = JsValue::from(message);
        match self.level {
            Level::ERROR => console::error_1(&message),
            Level::WARN => console::warn_1(&message),
            Level::INFO => console::info_1(&message),
            _ => console::debug_1(&message),
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Default to info, with debug for the page and the core engine
fn filter_targets() -> Targets {
    Targets::new()
        .with_default(Level::INFO)
        .with_target("nft_market_core", Level::DEBUG)
        .with_target("nft_market_frontend", Level::DEBUG)
}

/// Initialize logging to the browser console. Safe to call more than once.
pub fn init_logging() {
    // No wall clock on wasm32-unknown-unknown, the console stamps entries itself
    let console_layer = fmt::layer()
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(filter_targets())
        .with(console_layer)
        .try_init();
}
