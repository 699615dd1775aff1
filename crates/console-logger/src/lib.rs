//! Console Logger
//!
//! A `tracing` subscriber for browser apps. Formatted events are written to
//! `console.error` / `console.warn` / `console.info` / `console.debug`
//! according to their level. Off wasm32 (tests) lines go to stderr.

use std::io;

use thiserror::Error;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("failed to install subscriber: {0}")]
    Install(String),
}

/// Install the global subscriber.
///
/// `filter` uses `EnvFilter` directive syntax, e.g. `info,stock_client=debug`.
/// Events from the `log` crate are forwarded as well.
pub fn init(filter: &str) -> Result<(), LoggerError> {
    let filter = EnvFilter::try_new(filter)?;
    // No system clock on wasm32, so no timestamps.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .try_init()
        .map_err(|e| LoggerError::Install(e.to_string()))
}

/// Hands out one [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it on flush or drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    pub fn new(level: Level) -> Self {
        Self { level, buffer: Vec::new() }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    fn take_line(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let line = String::from_utf8_lossy(&self.buffer).trim_end().to_string();
        self.buffer.clear();
        (!line.is_empty()).then_some(line)
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(line) = self.take_line() {
            emit(self.level, &line);
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&value),
        Level::WARN => console::warn_1(&value),
        Level::INFO => console::info_1(&value),
        _ => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_writer_collects_one_line() {
        let mut writer = ConsoleWriter::new(Level::WARN);
        writer.write_all(b" WARN stock_client::http: backend ").unwrap();
        writer.write_all(b"rejected request status=400\n").unwrap();
        assert_eq!(
            writer.take_line().as_deref(),
            Some(" WARN stock_client::http: backend rejected request status=400")
        );
        assert_eq!(writer.take_line(), None);
    }

    #[test]
    fn test_blank_output_is_skipped() {
        let mut writer = ConsoleWriter::new(Level::INFO);
        writer.write_all(b"\n").unwrap();
        assert_eq!(writer.take_line(), None);
    }

    #[test]
    fn test_writer_level_follows_event() {
        let make = ConsoleMakeWriter;
        assert_eq!(make.make_writer().level(), Level::INFO);
        assert_eq!(ConsoleWriter::new(Level::ERROR).level(), Level::ERROR);
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        assert!(matches!(init("stock_client=loud"), Err(LoggerError::Filter(_))));
    }
}
