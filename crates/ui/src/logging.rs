//! `tracing` output for the browser
//!
//! Formats events from the core crate with `tracing-subscriber` and hands each
//! finished line to `console.log`. No timestamps: the wasm target has no
//! system clock and devtools stamps messages already.
//!
//! `?log=trace` (or `debug`, `info`, `warn`, `error`, `off`) picks the level;
//! the default is `debug`.

use std::io;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Buffers one formatted event, logs it when dropped
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = finish_line(&self.buf) {
            web_sys::console::log_1(&line.into());
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Console;

impl<'a> MakeWriter<'a> for Console {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { buf: Vec::new() }
    }
}

/// Buffered event text without the trailing newline; `None` when blank
fn finish_line(buf: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(buf);
    let line = text.trim_end();
    (!line.is_empty()).then(|| line.to_string())
}

/// Level named by a `log=` query parameter, `debug` when absent or unknown
pub fn level_from_query(search: &str) -> LevelFilter {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("log="))
        .and_then(|v| v.parse().ok())
        .unwrap_or(LevelFilter::DEBUG)
}

/// Install the console subscriber. A second call is a no-op.
pub fn init(level: LevelFilter) {
    let installed = tracing_subscriber::fmt()
        .with_writer(Console)
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .try_init();
    if installed.is_err() {
        crate::dom::warn("[Log] tracing subscriber already set");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_query() {
        assert_eq!(level_from_query(""), LevelFilter::DEBUG);
        assert_eq!(level_from_query("?log=trace"), LevelFilter::TRACE);
        assert_eq!(level_from_query("?trail=0&log=off"), LevelFilter::OFF);
        assert_eq!(level_from_query("?log=loud"), LevelFilter::DEBUG);
    }

    #[test]
    fn test_finish_line_strips_newline() {
        assert_eq!(
            finish_line(b" DEBUG portfolio_trail::trail: trail created\n").as_deref(),
            Some(" DEBUG portfolio_trail::trail: trail created")
        );
    }

    #[test]
    fn test_finish_line_skips_blank() {
        assert_eq!(finish_line(b""), None);
        assert_eq!(finish_line(b"\n"), None);
    }

    #[test]
    fn test_finish_line_tolerates_bad_utf8() {
        let line = finish_line(b"trace \xff event\n").unwrap();
        assert!(line.starts_with("trace "));
        assert!(line.ends_with(" event"));
    }
}
