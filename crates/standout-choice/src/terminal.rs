//! Line-based terminal I/O.
//!
//! [`Prompt`](crate::Prompt) only needs one operation from the outside
//! world: print a question, then read one line. [`TerminalIO`] abstracts
//! that so prompts can be driven by stdin/stdout, by any reader/writer pair,
//! or by a scripted [`MockTerminal`] in tests.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::error::{ChoiceError, Result};

/// Abstraction over terminal I/O for testability.
pub trait TerminalIO: Send + Sync {
    /// Write a prompt and flush it.
    fn write_prompt(&self, prompt: &str) -> io::Result<()>;

    /// Read one line, including its line ending.
    ///
    /// Returns an empty string at end of input.
    fn read_line(&self) -> io::Result<String>;

    /// Print `message` followed by a space and read the answer line.
    ///
    /// The trailing line ending is removed. End of input is reported as
    /// [`ChoiceError::PromptCancelled`].
    fn get_line(&self, message: &str) -> Result<String> {
        self.write_prompt(&format!("{} ", message))
            .map_err(ChoiceError::PromptFailed)?;

        let line = self.read_line().map_err(ChoiceError::PromptFailed)?;
        if line.is_empty() {
            return Err(ChoiceError::PromptCancelled);
        }

        Ok(line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(line.as_str())
            .to_string())
    }
}

/// Real terminal I/O on stdout and stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealTerminal;

impl TerminalIO for RealTerminal {
    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        print!("{}", prompt);
        io::stdout().flush()
    }

    fn read_line(&self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

/// Terminal I/O over an arbitrary reader and writer.
///
/// Useful for pipes, sockets or in-memory buffers.
///
/// ```
/// use std::io::Cursor;
/// use standout_choice::{StreamTerminal, TerminalIO};
///
/// let terminal = StreamTerminal::new(Cursor::new("y\n"), Vec::new());
/// assert_eq!(terminal.get_line("Continue?")?, "y");
///
/// let (_, output) = terminal.into_inner();
/// assert_eq!(output, b"Continue? ");
/// # Ok::<(), standout_choice::ChoiceError>(())
/// ```
#[derive(Debug)]
pub struct StreamTerminal<R, W> {
    reader: Mutex<R>,
    writer: Mutex<W>,
}

impl<R, W> StreamTerminal<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: Mutex::new(reader),
            writer: Mutex::new(writer),
        }
    }

    /// Take back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        let reader = self
            .reader
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let writer = self
            .writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        (reader, writer)
    }
}

fn poisoned() -> io::Error {
    io::Error::other("terminal lock poisoned")
}

impl<R, W> TerminalIO for StreamTerminal<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        let mut writer = self.writer.lock().map_err(|_| poisoned())?;
        writer.write_all(prompt.as_bytes())?;
        writer.flush()
    }

    fn read_line(&self) -> io::Result<String> {
        let mut reader = self.reader.lock().map_err(|_| poisoned())?;
        let mut line = String::new();
        reader.read_line(&mut line)?;
        Ok(line)
    }
}

/// Mock terminal for testing prompts.
///
/// Returns scripted responses in order and records every prompt written.
/// Once the responses run out it behaves like end of input.
#[derive(Debug)]
pub struct MockTerminal {
    responses: Vec<String>,
    /// Index of the next response to return.
    response_index: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl Clone for MockTerminal {
    fn clone(&self) -> Self {
        Self {
            responses: self.responses.clone(),
            response_index: AtomicUsize::new(self.response_index.load(Ordering::SeqCst)),
            prompts: Mutex::new(self.prompts()),
        }
    }
}

impl MockTerminal {
    /// Create a mock terminal that returns the given response.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self::with_responses([response.into()])
    }

    /// Create a mock terminal that returns multiple responses in sequence.
    ///
    /// Useful for testing retry scenarios.
    pub fn with_responses(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            response_index: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that simulates EOF (Ctrl+D).
    pub fn eof() -> Self {
        Self::with_responses(Vec::<String>::new())
    }

    /// Prompts written so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        match self.prompts.lock() {
            Ok(prompts) => prompts.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of lines read so far, including the final EOF read.
    pub fn reads(&self) -> usize {
        self.response_index.load(Ordering::SeqCst)
    }
}

impl TerminalIO for MockTerminal {
    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        self.prompts
            .lock()
            .map_err(|_| poisoned())?
            .push(prompt.to_string());
        Ok(())
    }

    fn read_line(&self) -> io::Result<String> {
        let idx = self.response_index.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(idx) {
            // Add newline like real read_line does
            Some(response) => Ok(format!("{}\n", response)),
            None => Ok(String::new()),
        }
    }
}
