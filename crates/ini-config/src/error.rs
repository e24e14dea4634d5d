use std::fmt;
use std::io;

/// What went wrong while decoding.
///
/// Conversion failures (`InvalidNumber`, `OutOfRange`) are fatal: the line loop
/// stops at the offending line. The remaining shape errors are structural and
/// are accumulated first-wins for the duration of one decode call.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("invalid {target_type} '{value}'")]
    InvalidNumber {
        value: String,
        target_type: &'static str,
    },
    #[error("value '{value}' is out of range for {target_type}")]
    OutOfRange {
        value: String,
        target_type: &'static str,
    },
    #[error("can't map into type {kind}")]
    UnsupportedTarget { kind: &'static str },
    #[error("can't set value of type {kind}")]
    UnsupportedField { kind: &'static str },
    #[error("duplicate tag '{tag}'")]
    DuplicateTag { tag: String },
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),
}

impl ErrorKind {
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ErrorKind::InvalidNumber { .. } | ErrorKind::OutOfRange { .. }
        )
    }

    pub(crate) fn invalid_number(value: &str, target_type: &'static str) -> Self {
        ErrorKind::InvalidNumber {
            value: value.to_string(),
            target_type,
        }
    }

    pub(crate) fn out_of_range(value: &str, target_type: &'static str) -> Self {
        ErrorKind::OutOfRange {
            value: value.to_string(),
            target_type,
        }
    }
}

/// A decode failure, tagged with the input line it happened on.
///
/// `line` is 1-based; `0` means the error was raised before any line was read
/// (while building the field model or acquiring the input).
#[derive(Debug)]
pub struct IniError {
    pub line: usize,
    pub text: String,
    pub kind: ErrorKind,
}

impl IniError {
    pub fn new(line: usize, text: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            line,
            text: text.into(),
            kind,
        }
    }

    pub(crate) fn before_input(kind: ErrorKind) -> Self {
        Self::new(0, String::new(), kind)
    }

    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }
}

impl fmt::Display for IniError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if self.line > 0 {
            write!(f, " on line {}: {}", self.line, self.text)?;
        }
        Ok(())
    }
}

impl std::error::Error for IniError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Read(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for IniError {
    fn from(err: io::Error) -> Self {
        IniError::before_input(ErrorKind::Read(err))
    }
}
