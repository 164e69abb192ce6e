//! Where rendered reports go.

use eyre::{Result, WrapErr};
use serde::Serialize;

/// Which terminal stream a line belongs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Target output for reports.
///
/// Reports call the semantic helpers; implementations only decide where a
/// finished line ends up.
pub trait Output {
    /// Emit one finished line.
    fn line(&mut self, stream: Stream, text: String);

    fn section(&mut self, name: &str) {
        self.line(Stream::Stdout, format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.line(Stream::Stdout, format!("{}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.line(Stream::Stdout, format!("  - {}", text));
    }

    /// A newly created or changed item.
    fn added_item(&mut self, text: &str) {
        self.line(Stream::Stdout, format!("  + {}", text));
    }

    fn warning(&mut self, msg: &str) {
        self.line(Stream::Stderr, format!("warning: {}", msg));
    }

    fn divider(&mut self, label: &str) {
        self.line(Stream::Stdout, format!("── {} ──", label));
    }

    /// Text printed as-is; a trailing newline is not doubled.
    fn preformatted(&mut self, text: &str) {
        let text = text.strip_suffix('\n').unwrap_or(text);
        self.line(Stream::Stdout, text.to_string());
    }

    fn newline(&mut self) {
        self.line(Stream::Stdout, String::new());
    }
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Print a report as pretty JSON on stdout.
pub fn print_json<R: Serialize>(report: &R) -> Result<()> {
    let json = serde_json::to_string_pretty(report).wrap_err("failed to serialize report")?;
    println!("{}", json);
    Ok(())
}

/// Prints to the process's stdout and stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn line(&mut self, stream: Stream, text: String) {
        match stream {
            Stream::Stdout => println!("{}", text),
            Stream::Stderr => eprintln!("{}", text),
        }
    }
}

/// Collects lines in memory, for asserting on rendered reports.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn line(&mut self, _stream: Stream, text: String) {
        self.lines.push(text);
    }
}
