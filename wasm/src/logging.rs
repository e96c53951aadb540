//! Console logging
//!
//! Installs a `tracing-subscriber` fmt subscriber whose writer forwards each
//! formatted event to the browser console, picking the console method from
//! the event level.

use crate::error::AdapterError;
use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wasm_bindgen::JsValue;

/// Console method an event is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Log,
}

impl From<Level> for ConsoleMethod {
    fn from(level: Level) -> Self {
        match level {
            Level::ERROR => ConsoleMethod::Error,
            Level::WARN => ConsoleMethod::Warn,
            _ => ConsoleMethod::Log,
        }
    }
}

/// Buffers one formatted event and emits it to the console on drop
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
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
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        let value = JsValue::from_str(line);
        match self.method {
            ConsoleMethod::Error => web_sys::console::error_1(&value),
            ConsoleMethod::Warn => web_sys::console::warn_1(&value),
            ConsoleMethod::Log => web_sys::console::log_1(&value),
        }
    }
}

/// `MakeWriter` handing out a fresh [`ConsoleWriter`] per event
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl ConsoleMakeWriter {
    fn writer(method: ConsoleMethod) -> ConsoleWriter {
        ConsoleWriter {
            method,
            buffer: Vec::with_capacity(128),
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        Self::writer(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        Self::writer(ConsoleMethod::from(*meta.level()))
    }
}

/// Parse the filter directives from the adapter config
pub fn parse_filter(directives: &str) -> Result<EnvFilter, AdapterError> {
    EnvFilter::try_new(directives).map_err(|e| AdapterError::Config(e.to_string()))
}

/// Initialize tracing/logging
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing(directives: &str) -> Result<(), AdapterError> {
    let env_filter = parse_filter(directives)?;

    // Browsers stamp console lines themselves and render no ANSI colours
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(ConsoleMakeWriter);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already installed");
    }

    Ok(())
}
