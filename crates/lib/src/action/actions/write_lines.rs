//! WriteLines action implementation.
//!
//! Escapes each item and writes it as one physical line, appending to the
//! target file or replacing its contents.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::consts::LINE_ENDING;
use crate::encoding::TextEncoding;
use crate::error::LinesError;
use crate::escape::escape;
use crate::item::TaskItem;

/// Options for writing lines to a file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WriteLinesOpts {
  /// The file to write. Its parent directory must already exist.
  pub path: PathBuf,
  /// Logical lines, in output order.
  #[serde(default)]
  pub lines: Vec<TaskItem>,
  /// Encoding name. UTF-8 without a byte-order mark when unset.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub encoding: Option<String>,
  /// Replace existing contents instead of appending.
  #[serde(default)]
  pub overwrite: bool,
  /// With `overwrite`, leave the file untouched if it already holds the same bytes.
  #[serde(default)]
  pub write_only_when_different: bool,
}

impl WriteLinesOpts {
  pub fn new<I, T>(path: impl Into<PathBuf>, lines: I) -> Self
  where
    I: IntoIterator<Item = T>,
    T: Into<TaskItem>,
  {
    Self {
      path: path.into(),
      lines: lines.into_iter().map(Into::into).collect(),
      encoding: None,
      overwrite: false,
      write_only_when_different: false,
    }
  }

  pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
    self.encoding = Some(encoding.into());
    self
  }

  pub fn with_overwrite(mut self, overwrite: bool) -> Self {
    self.overwrite = overwrite;
    self
  }

  pub fn with_write_only_when_different(mut self, enabled: bool) -> Self {
    self.write_only_when_different = enabled;
    self
  }
}

/// Execute a WriteLines action.
///
/// The encoding is resolved before anything else, so an unknown name fails
/// without creating or modifying the file. An empty `lines` list is a no-op.
///
/// A byte-order mark is written only when output starts at offset zero:
/// a new file, an overwrite, or an append to an empty file.
///
/// # Errors
///
/// - [`LinesError::InvalidEncoding`] if the encoding name does not resolve
/// - [`LinesError::AccessDenied`] if the file cannot be opened or written for lack of permission
/// - [`LinesError::Io`] for any other file system failure, including a missing parent directory
pub fn execute_write_lines(opts: &WriteLinesOpts) -> Result<(), LinesError> {
  let path = opts.path.as_path();
  if path.as_os_str().is_empty() {
    return Err(LinesError::empty_path());
  }

  let encoding = TextEncoding::resolve(opts.encoding.as_deref())?;

  if opts.lines.is_empty() {
    debug!(path = %path.display(), "no lines to write");
    return Ok(());
  }

  let mut text = String::new();
  for line in &opts.lines {
    text.push_str(&escape(line.item_spec()));
    text.push_str(LINE_ENDING);
  }

  let result = if opts.overwrite {
    overwrite(path, &text, encoding, opts.write_only_when_different)
  } else {
    append(path, &text, encoding)
  };
  result.map_err(|e| LinesError::from_io(path, e))?;

  info!(
    path = %path.display(),
    lines = opts.lines.len(),
    encoding = %encoding,
    overwrite = opts.overwrite,
    "wrote lines"
  );
  Ok(())
}

fn overwrite(path: &Path, text: &str, encoding: TextEncoding, only_when_different: bool) -> io::Result<()> {
  let bytes = encoding.encode(text, true);

  if only_when_different {
    match fs::read(path) {
      Ok(existing) if existing == bytes => {
        debug!(path = %path.display(), "contents unchanged, skipping write");
        return Ok(());
      }
      Ok(_) => {}
      Err(e) if e.kind() == io::ErrorKind::NotFound => {}
      Err(e) => return Err(e),
    }
  }

  let mut file = OpenOptions::new().write(true).create(true).truncate(true).open(path)?;
  file.write_all(&bytes)?;
  file.flush()
}

fn append(path: &Path, text: &str, encoding: TextEncoding) -> io::Result<()> {
  let mut file = OpenOptions::new().append(true).create(true).open(path)?;
  let at_start = file.metadata()?.len() == 0;

  file.write_all(&encoding.encode(text, at_start))?;
  file.flush()
}
