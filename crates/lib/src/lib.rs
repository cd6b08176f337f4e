//! linefile-lib: Line file utilities for build pipelines
//!
//! This crate writes item lists to text files and reads them back:
//! - `WriteLines`: escape items and append or overwrite them, one per line
//! - `ReadLines`: read the non-blank lines of a file back into items
//! - `escape`: the percent-escaping shared by both directions
//! - `encoding`: named text encodings and byte-order-mark detection

pub mod action;
pub mod consts;
pub mod encoding;
pub mod error;
pub mod escape;
pub mod item;
pub mod log;
pub mod util;

pub use action::actions::read_lines::{ReadLinesOpts, execute_read_lines};
pub use action::actions::write_lines::{WriteLinesOpts, execute_write_lines};
pub use action::{Action, ActionResult, execute_action};
pub use error::{ErrorCode, LinesError};
pub use item::TaskItem;
pub use log::{LogSink, TracingSink};
