//! Reporting errors to the hosting build engine.
//!
//! Operations return [`LinesError`](crate::error::LinesError) to their caller.
//! The action layer additionally hands each failure to a [`LogSink`] as an
//! error code plus message, leaving presentation to the host.

use crate::error::ErrorCode;

/// Destination for structured error reports.
pub trait LogSink {
  fn error(&self, code: ErrorCode, message: &str);
}

/// Sink that forwards reports to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
  fn error(&self, code: ErrorCode, message: &str) {
    tracing::error!(code = %code, "{}", message);
  }
}
