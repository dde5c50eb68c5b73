//! Line input from standard input.

use std::io::{BufRead, IsTerminal, Write};

/// Result of a read operation.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum ReadResult {
    /// A line of input, without its terminator.
    Input(String),
    /// End of input.
    Eof,
}

/// Minimal input backend taking lines from any buffered reader.
pub(crate) struct LineReader<R> {
    reader: R,
    interactive: bool,
}

impl LineReader<std::io::StdinLock<'static>> {
    /// Returns a reader over the process's standard input; prompts are displayed only when
    /// it is a terminal.
    pub fn stdin() -> Self {
        let stdin = std::io::stdin();
        let interactive = stdin.is_terminal();
        Self::new(stdin.lock(), interactive)
    }
}

impl<R: BufRead> LineReader<R> {
    pub const fn new(reader: R, interactive: bool) -> Self {
        Self {
            reader,
            interactive,
        }
    }

    pub const fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Reads the next line, first displaying the prompt on stderr when interactive.
    pub fn read_line(&mut self, prompt: &str) -> Result<ReadResult, std::io::Error> {
        if self.interactive {
            let mut stderr = std::io::stderr();
            write!(stderr, "{prompt}")?;
            stderr.flush()?;
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(ReadResult::Eof);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);

        Ok(ReadResult::Input(line))
    }
}
