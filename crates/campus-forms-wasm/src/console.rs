//! `tracing` output routed to the browser console
//!
//! No timestamps: there is no system clock on wasm32-unknown-unknown.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Buffers one formatted event and hands it to `console.*` on drop
pub struct ConsoleWriter {
    level: Level,
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
        let line = JsValue::from_str(line.trim_end());
        match self.level {
            Level::ERROR => console::error_1(&line),
            Level::WARN => console::warn_1(&line),
            Level::INFO => console::info_1(&line),
            _ => console::debug_1(&line),
        }
    }
}

pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buffer: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buffer: Vec::new(),
        }
    }
}

/// Installs the console subscriber; later calls are no-ops
pub fn init_logging() {
    let max_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_max_level(max_level)
        .with_ansi(false)
        .without_time()
        .try_init();
}
