use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use crossterm::style::{Color, Stylize};

/// Width of the banner printed above every screen.
const HEADER_WIDTH: usize = 50;

/// Severity levels for one-line status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Notice,
    Error,
}

impl StatusKind {
    fn color(self) -> Color {
        match self {
            StatusKind::Info => Color::Green,
            StatusKind::Notice => Color::Yellow,
            StatusKind::Error => Color::Red,
        }
    }
}

/// Line-oriented prompt/print pair. The shell only talks to the user through
/// this type, so tests can swap stdin/stdout for in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// `color` toggles ANSI styling of status messages; pass `false` when the
    /// output is not an interactive terminal.
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Print `label` without a newline and read one line of input. Returns
    /// `None` once input is exhausted. Only the line terminator is stripped;
    /// bytes that are not UTF-8 become replacement characters.
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}").context("failed to write prompt")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut raw = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut raw)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}").context("failed to write output")
    }

    pub fn status(&mut self, text: &str, kind: StatusKind) -> Result<()> {
        let written = if self.color {
            writeln!(self.output, "{}", text.with(kind.color()))
        } else {
            writeln!(self.output, "{text}")
        };
        written.context("failed to write status")
    }

    /// Blank line, rule, centered title, rule.
    pub fn header(&mut self, title: &str) -> Result<()> {
        let rule = "=".repeat(HEADER_WIDTH);
        writeln!(
            self.output,
            "\n{rule}\n{title:^width$}\n{rule}",
            width = HEADER_WIDTH
        )
        .context("failed to write header")
    }

    /// Hand back the output sink, mostly so tests can inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }
}
