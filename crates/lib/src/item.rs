//! The item value passed into and out of line file actions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single item carrying one string value.
///
/// The value is the logical (unescaped) line. Serializes as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskItem {
  item_spec: String,
}

impl TaskItem {
  pub fn new(item_spec: impl Into<String>) -> Self {
    Self {
      item_spec: item_spec.into(),
    }
  }

  pub fn item_spec(&self) -> &str {
    &self.item_spec
  }

  pub fn into_item_spec(self) -> String {
    self.item_spec
  }
}

impl From<&str> for TaskItem {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

impl From<String> for TaskItem {
  fn from(value: String) -> Self {
    Self::new(value)
  }
}

impl fmt::Display for TaskItem {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.item_spec)
  }
}
