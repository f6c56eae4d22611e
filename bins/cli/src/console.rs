//! Line-oriented console over any reader/writer pair.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use teller_core::bank::BankError;
use teller_shared::AppError;
use thiserror::Error;

/// Why a menu action stopped early.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Input ended while a prompt was waiting.
    #[error("end of input")]
    EndOfInput,

    /// Input could not be parsed into the requested value.
    #[error("Invalid {field}: '{raw}'")]
    InvalidInput {
        /// What was being asked for.
        field: &'static str,
        /// The rejected text.
        raw: String,
    },

    /// The bank rejected the operation.
    #[error(transparent)]
    Bank(#[from] BankError),

    /// Console I/O failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl SessionError {
    /// Returns the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EndOfInput => "END_OF_INPUT",
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::Bank(e) => e.error_code(),
            Self::Io(_) => "IO_ERROR",
        }
    }

    /// Returns true if the menu should report the error and continue.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::Bank(_))
    }
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::Io(e) => Self::Io(e),
            SessionError::Bank(e) => e.into(),
            SessionError::InvalidInput { .. } => Self::Validation(e.to_string()),
            SessionError::EndOfInput => Self::Internal(e.to_string()),
        }
    }
}

/// Prompts on `W` and reads trimmed answers from `R`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over `input` and `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line.
    pub fn line(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Writes `label`, then reads one trimmed line.
    pub fn prompt(&mut self, label: &str) -> Result<String, SessionError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(SessionError::EndOfInput);
        }
        Ok(buf.trim().to_string())
    }

    /// Prompts and parses the answer as `T`.
    pub fn prompt_parsed<T: FromStr>(
        &mut self,
        label: &str,
        field: &'static str,
    ) -> Result<T, SessionError> {
        let raw = self.prompt(label)?;
        raw.parse()
            .map_err(|_| SessionError::InvalidInput { field, raw })
    }

    /// Consumes the console, returning the writer.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
