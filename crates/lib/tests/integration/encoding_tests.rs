use linefile_lib::{WriteLinesOpts, execute_write_lines};

use super::common::TestFile;

fn write_with(file: &TestFile, lines: &[&str], encoding: &str) {
  execute_write_lines(&WriteLinesOpts::new(&file.path, lines.iter().copied()).with_encoding(encoding)).unwrap();
}

#[test]
fn ascii_mangles_non_ascii_values() {
  let file = TestFile::new();

  write_with(&file, &["My special char is \u{00a3}", "and \u{4e2d}\u{6587}"], "ASCII");

  let lines = file.read();
  assert_eq!(lines, vec!["My special char is ?", "and ??"]);
}

#[test]
fn utf8_keeps_non_ascii_values() {
  let file = TestFile::new();

  write_with(&file, &["My special char is \u{00a3}"], "utf-8");

  assert_eq!(&file.bytes()[..3], &[0xEF, 0xBB, 0xBF]);
  assert_eq!(file.read(), vec!["My special char is \u{00a3}"]);
}

#[test]
fn utf16_writes_bom_and_reads_back() {
  let file = TestFile::new();

  write_with(&file, &["caf\u{e9};bar", "\u{1F600}"], "utf-16");

  assert_eq!(&file.bytes()[..2], &[0xFF, 0xFE]);
  assert_eq!(file.read(), vec!["caf\u{e9};bar", "\u{1F600}"]);
}

#[test]
fn utf16be_appends_without_second_bom() {
  let file = TestFile::new();

  write_with(&file, &["first"], "utf-16be");
  write_with(&file, &["second"], "utf-16be");

  let bytes = file.bytes();
  assert_eq!(&bytes[..2], &[0xFE, 0xFF]);
  assert!(!bytes[2..].windows(2).any(|w| w == [0xFE, 0xFF]));
  assert_eq!(file.read(), vec!["first", "second"]);
}

#[test]
fn utf32_reads_back() {
  let file = TestFile::new();

  write_with(&file, &["wide", "lines"], "utf-32");

  assert_eq!(&file.bytes()[..4], &[0xFF, 0xFE, 0x00, 0x00]);
  assert_eq!(file.read(), vec!["wide", "lines"]);
}

#[test]
fn legacy_encoding_without_bom_reads_mangled() {
  let file = TestFile::new();

  write_with(&file, &["na\u{ef}ve"], "windows-1252");

  // No byte-order mark, so the reader falls back to UTF-8 and 0xEF is malformed.
  assert_eq!(file.read(), vec!["na\u{FFFD}ve"]);
}
