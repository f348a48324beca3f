//! Output lines tagged with the stream they belong to

use std::fmt;
use std::io::Write;

use crate::application::{ApplicationResult, IoResultExt};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Stream::Stdout => write!(f, "stdout"),
            Stream::Stderr => write!(f, "stderr"),
        }
    }
}

/// One line of program output, without its trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    stream: Stream,
    content: String,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.stream, self.content)
    }
}

impl Line {
    pub fn new(stream: Stream, content: impl Into<String>) -> Self {
        Self {
            stream,
            content: content.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        self.content.as_str()
    }

    pub fn stream(&self) -> Stream {
        self.stream
    }

    pub fn is_err(&self) -> bool {
        self.stream == Stream::Stderr
    }
}

/// Ordered output of a program run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<Line>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stream: Stream, content: impl Into<String>) {
        self.lines.push(Line::new(stream, content));
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn stdout_lines(&self) -> Vec<&str> {
        self.on(Stream::Stdout)
    }

    pub fn stderr_lines(&self) -> Vec<&str> {
        self.on(Stream::Stderr)
    }

    fn on(&self, stream: Stream) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|l| l.stream() == stream)
            .map(Line::as_str)
            .collect()
    }

    /// Write every line to its stream, in order, flushing both at the end.
    pub fn emit<O: Write, E: Write>(&self, stdout: &mut O, stderr: &mut E) -> ApplicationResult<()> {
        for line in &self.lines {
            match line.stream() {
                Stream::Stdout => writeln!(stdout, "{}", line.as_str()).io_context("write stdout")?,
                Stream::Stderr => writeln!(stderr, "{}", line.as_str()).io_context("write stderr")?,
            }
        }
        stdout.flush().io_context("flush stdout")?;
        stderr.flush().io_context("flush stderr")?;
        Ok(())
    }
}
