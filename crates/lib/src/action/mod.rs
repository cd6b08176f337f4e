//! Line file action execution.
//!
//! Actions are the primitive file operations a build step can perform on
//! line files: writing items out as escaped lines (`WriteLines`) and reading
//! them back (`ReadLines`).
//!
//! # Action Types
//!
//! - [`Action::WriteLines`] - Append or overwrite lines with a chosen encoding
//! - [`Action::ReadLines`] - Read non-blank lines, detecting the encoding
//!
//! # Error Reporting
//!
//! [`execute_action`] hands every failure to the injected [`LogSink`] as an
//! error code and message before returning it to the caller.

pub mod actions;
mod types;

pub use types::*;

use tracing::debug;

use crate::error::LinesError;
use crate::log::LogSink;
use actions::read_lines::execute_read_lines;
use actions::write_lines::execute_write_lines;

/// Execute a single line file action.
///
/// # Arguments
///
/// * `action` - The action to execute
/// * `sink` - Receives the error code and message if the action fails
///
/// # Returns
///
/// The result of the action execution.
pub fn execute_action(action: &Action, sink: &impl LogSink) -> Result<ActionResult, LinesError> {
  let result = match action {
    Action::WriteLines(opts) => {
      debug!(path = %opts.path.display(), "executing WriteLines");
      execute_write_lines(opts).map(|()| ActionResult::default())
    }

    Action::ReadLines(opts) => {
      debug!(path = %opts.path.display(), "executing ReadLines");
      execute_read_lines(opts).map(|lines| ActionResult { lines })
    }
  };

  result.inspect_err(|err| sink.error(err.code(), &err.to_string()))
}
