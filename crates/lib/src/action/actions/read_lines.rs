//! ReadLines action implementation.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::encoding;
use crate::error::LinesError;
use crate::escape::unescape;
use crate::item::TaskItem;

/// Options for reading lines from a file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReadLinesOpts {
  /// The file to read. A missing file reads as empty.
  pub path: PathBuf,
}

impl ReadLinesOpts {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }
}

/// Execute a ReadLines action.
///
/// Decodes the file (detecting the encoding from a byte-order mark, UTF-8
/// otherwise), drops blank lines, and unescapes the rest in file order.
/// A line is blank when nothing but whitespace and NUL characters remain
/// after trimming; kept lines are returned untrimmed.
///
/// # Errors
///
/// - [`LinesError::AccessDenied`] if the file cannot be read for lack of permission
/// - [`LinesError::Io`] for any other failure except a missing file
pub fn execute_read_lines(opts: &ReadLinesOpts) -> Result<Vec<TaskItem>, LinesError> {
  let path = opts.path.as_path();
  if path.as_os_str().is_empty() {
    return Err(LinesError::empty_path());
  }

  let bytes = match fs::read(path) {
    Ok(bytes) => bytes,
    Err(e) if e.kind() == io::ErrorKind::NotFound => {
      debug!(path = %path.display(), "file does not exist, no lines read");
      return Ok(Vec::new());
    }
    Err(e) => return Err(LinesError::from_io(path, e)),
  };

  let (text, detected) = encoding::decode(&bytes);

  let items: Vec<TaskItem> = split_lines(&text)
    .filter(|line| !is_blank(line))
    .map(|line| TaskItem::new(unescape(line)))
    .collect();

  debug!(path = %path.display(), encoding = %detected, lines = items.len(), "read lines");
  Ok(items)
}

/// Split on `\r\n`, `\n`, or a lone `\r`. A trailing terminator does not
/// produce an extra empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
  let mut rest = text;
  std::iter::from_fn(move || {
    if rest.is_empty() {
      return None;
    }
    match rest.find(['\r', '\n']) {
      Some(end) => {
        let line = &rest[..end];
        let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + skip..];
        Some(line)
      }
      None => {
        let line = rest;
        rest = "";
        Some(line)
      }
    }
  })
}

fn is_blank(line: &str) -> bool {
  line.chars().all(|c| c.is_whitespace() || c == '\0')
}
