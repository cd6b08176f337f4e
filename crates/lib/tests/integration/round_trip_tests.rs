use linefile_lib::{LinesError, WriteLinesOpts, execute_write_lines};
use proptest::prelude::*;

use super::common::TestFile;

proptest! {
  #[test]
  fn alphanumeric_lines_round_trip(lines in prop::collection::vec("[A-Za-z0-9]{1,24}", 1..16)) {
    let file = TestFile::new();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();

    file.append(&refs);

    prop_assert_eq!(file.read(), lines);
  }

  #[test]
  fn reserved_characters_round_trip(lines in prop::collection::vec("[a-z%;*?@$()']{1,12}", 1..8)) {
    let file = TestFile::new();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();

    file.append(&refs);

    prop_assert_eq!(file.read(), lines);
  }
}

#[test]
fn already_escaped_separator_survives() {
  let file = TestFile::new();

  file.append(&["Line1_%3b_"]);

  let on_disk = String::from_utf8(file.bytes()).unwrap();
  assert_eq!(on_disk.trim_end(), "Line1_%253b_");
  assert_eq!(file.read(), vec!["Line1_%3b_"]);
}

#[test]
fn embedded_line_breaks_stay_in_one_value() {
  let file = TestFile::new();

  file.append(&["a\nb", "c\r\nd", "e"]);

  let on_disk = String::from_utf8(file.bytes()).unwrap();
  assert!(on_disk.starts_with("a%0ab"));
  assert_eq!(file.read(), vec!["a\nb", "c\r\nd", "e"]);
}

#[test]
fn missing_file_reads_as_empty() {
  let file = TestFile::new();

  assert!(file.read().is_empty());
  assert!(!file.path.exists());
}

#[test]
fn append_preserves_earlier_lines() {
  let file = TestFile::new();

  file.append(&["Line1"]);
  file.append(&["Line2", "Line3"]);

  assert_eq!(file.read(), vec!["Line1", "Line2", "Line3"]);
}

#[test]
fn overwrite_discards_earlier_lines() {
  let file = TestFile::new();
  file.append(&["Line1", "Line2"]);

  execute_write_lines(&WriteLinesOpts::new(&file.path, ["Line3"]).with_overwrite(true)).unwrap();

  assert_eq!(file.read(), vec!["Line3"]);
}

#[test]
fn blank_lines_are_filtered() {
  let file = TestFile::new();

  file.append(&["Line1", "", "Line2", "   ", "\t", "\0\0\0\0", "Line3", "\0", ""]);

  assert_eq!(file.read(), vec!["Line1", "Line2", "Line3"]);
}

#[test]
fn lines_keep_surrounding_whitespace() {
  let file = TestFile::new();

  file.append(&["  indented", "trailing\t"]);

  assert_eq!(file.read(), vec!["  indented", "trailing\t"]);
}

#[test]
fn unknown_encoding_creates_no_file() {
  let file = TestFile::new();

  let err = execute_write_lines(&WriteLinesOpts::new(&file.path, ["Line1"]).with_encoding("utf-99")).unwrap_err();

  assert!(matches!(err, LinesError::InvalidEncoding { ref name } if name == "utf-99"));
  assert!(!file.path.exists());
}
