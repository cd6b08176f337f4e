//! Percent-escaping of reserved build-syntax characters.
//!
//! Line values are escaped before they are written and unescaped after they
//! are read, so a value like `a;b` survives a trip through a file that is
//! later fed back into an item list.
//!
//! # Format
//!
//! Each reserved character becomes `%` followed by its code point as two
//! lowercase hex digits (`;` -> `%3b`, `%` -> `%25`). Escaping is a single
//! left-to-right pass. `\r` and `\n` are reserved too, so an escaped value
//! always fits on one physical line. `%` is itself reserved, so input that already
//! looks escaped is escaped again:
//!
//! ```
//! use linefile_lib::escape::{escape, unescape};
//!
//! assert_eq!(escape("Line1_%3b_"), "Line1_%253b_");
//! assert_eq!(unescape("Line1_%253b_"), "Line1_%3b_");
//! ```
//!
//! No attempt is made to detect "already encoded" input.

use std::borrow::Cow;
use std::fmt::Write;

use crate::consts::RESERVED_CHARS;

fn is_reserved(c: char) -> bool {
  RESERVED_CHARS.contains(&c)
}

/// Escape every reserved character in `value`.
///
/// Returns the input unchanged (borrowed) when it holds no reserved characters.
pub fn escape(value: &str) -> Cow<'_, str> {
  let Some(first) = value.find(is_reserved) else {
    return Cow::Borrowed(value);
  };

  let mut escaped = String::with_capacity(value.len() + 8);
  escaped.push_str(&value[..first]);

  for c in value[first..].chars() {
    if is_reserved(c) {
      // Every reserved character is ASCII, so two hex digits always suffice.
      let _ = write!(escaped, "%{:02x}", c as u32);
    } else {
      escaped.push(c);
    }
  }

  Cow::Owned(escaped)
}

/// Decode every `%XX` triplet in `value`.
///
/// Any two hex digits are accepted in either case, not only those produced by
/// [`escape`]. A `%` that is not followed by two hex digits is kept as is.
pub fn unescape(value: &str) -> Cow<'_, str> {
  let Some(first) = value.find('%') else {
    return Cow::Borrowed(value);
  };

  let mut unescaped = String::with_capacity(value.len());
  unescaped.push_str(&value[..first]);

  let rest = &value[first..];
  let bytes = rest.as_bytes();
  let mut i = 0;
  let mut literal_start = 0;

  while i < bytes.len() {
    if bytes[i] == b'%' {
      if let Some(decoded) = decode_triplet(&bytes[i..]) {
        unescaped.push_str(&rest[literal_start..i]);
        unescaped.push(decoded);
        i += 3;
        literal_start = i;
        continue;
      }
    }
    i += 1;
  }
  unescaped.push_str(&rest[literal_start..]);

  Cow::Owned(unescaped)
}

/// Decode `%XX` at the start of `bytes` into the character with code point `0xXX`.
fn decode_triplet(bytes: &[u8]) -> Option<char> {
  match bytes {
    [b'%', hi, lo, ..] => {
      let hi = (*hi as char).to_digit(16)?;
      let lo = (*lo as char).to_digit(16)?;
      char::from_u32(hi * 16 + lo)
    }
    _ => None,
  }
}
