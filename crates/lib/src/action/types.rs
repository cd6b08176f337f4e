use serde::{Deserialize, Serialize};

use crate::action::actions::read_lines::ReadLinesOpts;
use crate::action::actions::write_lines::WriteLinesOpts;
use crate::item::TaskItem;

/// A line file action, as carried by a build description.
///
/// # Variants
///
/// - [`WriteLines`](Action::WriteLines): Write items to a file, one per line
/// - [`ReadLines`](Action::ReadLines): Read a file's non-blank lines as items
///
/// Serialized externally tagged, e.g.
/// `{"WriteLines": {"path": "files.txt", "lines": ["a.rs", "b.rs"]}}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
  /// Escape each item and write it as a line.
  ///
  /// - `opts`: Target path, items, encoding, and write mode
  WriteLines(WriteLinesOpts),
  /// Read non-blank lines and unescape them into items.
  ///
  /// - `opts`: Source path
  ReadLines(ReadLinesOpts),
}

/// Result of executing a single action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionResult {
  /// Items produced by the action (the lines read for ReadLines, empty for WriteLines).
  pub lines: Vec<TaskItem>,
}
