//! Line-oriented console boundary
//!
//! Every interactive read and write goes through the [`Console`] trait, so
//! the session can run on stdin/stdout ([`IoConsole::stdio`]) or on an
//! in-memory script ([`ScriptedConsole`]).

use miette::Diagnostic;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Errors from the console boundary. Both are fatal to the session.
#[derive(Debug, Error, Diagnostic)]
pub enum ConsoleError {
    #[error("input ended at: {prompt}")]
    #[diagnostic(
        code(ftr::console::input_exhausted),
        help("the session only ends through the e(X)it menu option")
    )]
    InputExhausted { prompt: String },

    #[error("console I/O error: {0}")]
    #[diagnostic(code(ftr::console::io))]
    Io(#[from] io::Error),
}

/// A blocking line source and text sink
pub trait Console {
    /// Write text as-is, without a trailing newline
    fn write(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Block for the next line, without its line terminator
    fn read_line(&mut self) -> Result<String, ConsoleError>;

    /// Write a full line
    fn println(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.write(text)?;
        self.write("\n")
    }

    /// Write a prompt and return the trimmed response line
    ///
    /// Running out of input here names the prompt that was left unanswered.
    fn prompt(&mut self, text: &str) -> Result<String, ConsoleError> {
        self.write(text)?;
        match self.read_line() {
            Ok(line) => Ok(line.trim().to_string()),
            Err(ConsoleError::InputExhausted { .. }) => Err(ConsoleError::InputExhausted {
                prompt: prompt_label(text).to_string(),
            }),
            Err(e) => Err(e),
        }
    }
}

/// Prompt text without its layout: leading newlines and the padded colon
fn prompt_label(text: &str) -> &str {
    text.trim().trim_end_matches(':').trim_end()
}

/// Console over any buffered reader and writer
pub struct IoConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl IoConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.writer.write_all(text.as_bytes())?;
        // Prompts have no newline, so flush before every blocking read
        self.writer.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputExhausted {
                prompt: String::new(),
            });
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

/// In-memory console: reads from a fixed list of lines and records output
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: String,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    /// Everything written so far
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Lines not yet consumed
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output.push_str(text);
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        self.input
            .pop_front()
            .ok_or_else(|| ConsoleError::InputExhausted {
                prompt: String::new(),
            })
    }
}
