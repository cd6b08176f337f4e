//! Shared test helpers for line file integration tests.

use std::path::PathBuf;

use linefile_lib::{ReadLinesOpts, TaskItem, WriteLinesOpts, execute_read_lines, execute_write_lines};
use tempfile::TempDir;

/// Isolated scratch directory holding a single line file.
pub struct TestFile {
  pub temp: TempDir,
  pub path: PathBuf,
}

impl TestFile {
  pub fn new() -> Self {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("lines.txt");
    Self { temp, path }
  }

  /// Append `lines` with the default encoding.
  pub fn append(&self, lines: &[&str]) {
    execute_write_lines(&WriteLinesOpts::new(&self.path, lines.iter().copied())).unwrap();
  }

  /// Read the file back as plain strings.
  pub fn read(&self) -> Vec<String> {
    execute_read_lines(&ReadLinesOpts::new(&self.path))
      .unwrap()
      .into_iter()
      .map(TaskItem::into_item_spec)
      .collect()
  }

  pub fn bytes(&self) -> Vec<u8> {
    std::fs::read(&self.path).unwrap()
  }
}
