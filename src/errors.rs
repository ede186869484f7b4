//! Error types for hintcheck.
//!
//! `AnalysisError` covers everything that can go wrong while turning a file
//! into signatures, plus configuration loading. File-level variants never
//! escape the file scorer: they become a single top-level issue on the
//! file's report. Command code wraps errors in `anyhow` at the boundary.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// File could not be read
    #[error("read error: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid UTF-8
    #[error("invalid UTF-8 at byte {offset}")]
    Encoding { path: PathBuf, offset: usize },

    /// Source text is not valid syntax
    #[error("syntax error at line {line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// The parser could not be initialised for the language
    #[error("parser unavailable: {0}")]
    Language(String),

    /// Configuration file could not be loaded
    #[error("invalid configuration {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl AnalysisError {
    pub fn parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Line the failure points at, when there is one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = AnalysisError::parse("a.py", 7, "unexpected token");
        assert_eq!(err.to_string(), "syntax error at line 7: unexpected token");
        assert_eq!(err.line(), Some(7));
    }

    #[test]
    fn test_io_error_display() {
        let err = AnalysisError::Io {
            path: PathBuf::from("gone.py"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        assert_eq!(err.to_string(), "read error: file not found");
        assert_eq!(err.line(), None);
    }
}
