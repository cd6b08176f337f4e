//! Error types for line file operations.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Stable identifier reported alongside an error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
  InvalidEncoding,
  AccessDenied,
  IoFailure,
}

impl ErrorCode {
  pub fn as_str(&self) -> &'static str {
    match self {
      ErrorCode::InvalidEncoding => "invalid-encoding",
      ErrorCode::AccessDenied => "access-denied",
      ErrorCode::IoFailure => "io-failure",
    }
  }
}

impl fmt::Display for ErrorCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Errors that can occur while writing or reading a line file.
#[derive(Debug, Error)]
pub enum LinesError {
  /// The encoding name does not resolve. Raised before the file is touched.
  #[error("invalid encoding: {name}")]
  InvalidEncoding { name: String },

  /// The process lacks permission to open, read, or write the file.
  #[error("access denied to {}: {source}", .path.display())]
  AccessDenied {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Any other file system fault.
  #[error("io error on {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

impl LinesError {
  /// Classify an I/O error raised while operating on `path`.
  pub fn from_io(path: &Path, source: io::Error) -> Self {
    let path = path.to_path_buf();
    match source.kind() {
      io::ErrorKind::PermissionDenied => LinesError::AccessDenied { path, source },
      _ => LinesError::Io { path, source },
    }
  }

  /// Error for an operation given an empty path.
  pub(crate) fn empty_path() -> Self {
    LinesError::Io {
      path: PathBuf::new(),
      source: io::Error::new(io::ErrorKind::InvalidInput, "path is empty"),
    }
  }

  pub fn code(&self) -> ErrorCode {
    match self {
      LinesError::InvalidEncoding { .. } => ErrorCode::InvalidEncoding,
      LinesError::AccessDenied { .. } => ErrorCode::AccessDenied,
      LinesError::Io { .. } => ErrorCode::IoFailure,
    }
  }
}
