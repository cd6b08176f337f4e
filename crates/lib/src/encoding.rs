//! Text encodings for line files.
//!
//! Encoding names are resolved through a closed registry: the Unicode
//! encodings are handled here, and every other name falls through to the
//! WHATWG label table in `encoding_rs`. Anything else is an
//! [`LinesError::InvalidEncoding`].
//!
//! Writing to a narrower character set is lossy: code points the target
//! cannot represent are replaced with `?`. Reading never fails on malformed
//! input; bad sequences decode to U+FFFD.

use std::fmt;

use encoding_rs::{EncoderResult, Encoding, UTF_8, UTF_16BE, UTF_16LE};

use crate::consts::{DEFAULT_ENCODING, UNMAPPABLE_REPLACEMENT};
use crate::error::LinesError;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16BE_BOM: &[u8] = &[0xFE, 0xFF];
const UTF32LE_BOM: &[u8] = &[0xFF, 0xFE, 0x00, 0x00];
const UTF32BE_BOM: &[u8] = &[0x00, 0x00, 0xFE, 0xFF];

/// A resolved text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
  /// UTF-8, optionally preceded by a byte-order mark.
  Utf8 { bom: bool },
  /// 7-bit ASCII. Anything above U+007F is written as `?`.
  Ascii,
  /// Little-endian UTF-16 with a byte-order mark.
  Utf16Le,
  /// Big-endian UTF-16 with a byte-order mark.
  Utf16Be,
  /// Little-endian UTF-32 with a byte-order mark.
  Utf32Le,
  /// Big-endian UTF-32 with a byte-order mark.
  Utf32Be,
  /// A legacy single- or multi-byte encoding from the WHATWG registry.
  Legacy(&'static Encoding),
}

impl TextEncoding {
  /// Resolve an optional encoding name.
  ///
  /// `None` selects UTF-8 without a byte-order mark. A name that is given
  /// explicitly selects the encoding as registered, which for `utf-8`
  /// includes the mark.
  pub fn resolve(name: Option<&str>) -> Result<Self, LinesError> {
    match name {
      None => Ok(TextEncoding::Utf8 { bom: false }),
      Some(name) => Self::from_name(name),
    }
  }

  /// Resolve an encoding name, case-insensitively.
  pub fn from_name(name: &str) -> Result<Self, LinesError> {
    let label = name.trim().to_ascii_lowercase();

    let encoding = match label.as_str() {
      "utf-8" | "utf8" => TextEncoding::Utf8 { bom: true },
      "ascii" | "us-ascii" => TextEncoding::Ascii,
      "utf-16" | "utf-16le" | "unicode" => TextEncoding::Utf16Le,
      "utf-16be" | "unicodefffe" | "bigendianunicode" => TextEncoding::Utf16Be,
      "utf-32" | "utf-32le" => TextEncoding::Utf32Le,
      "utf-32be" => TextEncoding::Utf32Be,
      _ => {
        // Only labels that encode to themselves are accepted; the UTF-16
        // labels are handled above and `replacement` cannot encode at all.
        let legacy = Encoding::for_label_no_replacement(label.as_bytes())
          .filter(|enc| enc.output_encoding() == *enc)
          .ok_or_else(|| LinesError::InvalidEncoding { name: name.to_string() })?;
        if legacy == UTF_8 {
          TextEncoding::Utf8 { bom: true }
        } else {
          TextEncoding::Legacy(legacy)
        }
      }
    };

    Ok(encoding)
  }

  /// Canonical name of the encoding.
  pub fn name(&self) -> &'static str {
    match self {
      TextEncoding::Utf8 { .. } => DEFAULT_ENCODING,
      TextEncoding::Ascii => "us-ascii",
      TextEncoding::Utf16Le => "utf-16le",
      TextEncoding::Utf16Be => "utf-16be",
      TextEncoding::Utf32Le => "utf-32le",
      TextEncoding::Utf32Be => "utf-32be",
      TextEncoding::Legacy(enc) => enc.name(),
    }
  }

  /// The byte-order mark this encoding writes at the start of a file.
  pub fn preamble(&self) -> &'static [u8] {
    match self {
      TextEncoding::Utf8 { bom: true } => UTF8_BOM,
      TextEncoding::Utf16Le => UTF16LE_BOM,
      TextEncoding::Utf16Be => UTF16BE_BOM,
      TextEncoding::Utf32Le => UTF32LE_BOM,
      TextEncoding::Utf32Be => UTF32BE_BOM,
      TextEncoding::Utf8 { bom: false } | TextEncoding::Ascii | TextEncoding::Legacy(_) => &[],
    }
  }

  /// Encode `text`, prefixed with the preamble when `with_preamble` is set.
  pub fn encode(&self, text: &str, with_preamble: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() + 4);
    if with_preamble {
      out.extend_from_slice(self.preamble());
    }

    match self {
      TextEncoding::Utf8 { .. } => out.extend_from_slice(text.as_bytes()),
      TextEncoding::Ascii => out.extend(
        text
          .chars()
          .map(|c| if c.is_ascii() { c as u8 } else { UNMAPPABLE_REPLACEMENT }),
      ),
      TextEncoding::Utf16Le => out.extend(text.encode_utf16().flat_map(u16::to_le_bytes)),
      TextEncoding::Utf16Be => out.extend(text.encode_utf16().flat_map(u16::to_be_bytes)),
      TextEncoding::Utf32Le => out.extend(text.chars().flat_map(|c| (c as u32).to_le_bytes())),
      TextEncoding::Utf32Be => out.extend(text.chars().flat_map(|c| (c as u32).to_be_bytes())),
      TextEncoding::Legacy(enc) => encode_legacy(enc, text, &mut out),
    }

    out
  }
}

impl fmt::Display for TextEncoding {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

fn encode_legacy(encoding: &'static Encoding, text: &str, out: &mut Vec<u8>) {
  let mut encoder = encoding.new_encoder();
  let mut buffer = [0u8; 1024];
  let mut remaining = text;

  loop {
    let (result, read, written) = encoder.encode_from_utf8_without_replacement(remaining, &mut buffer, true);
    out.extend_from_slice(&buffer[..written]);
    remaining = &remaining[read..];

    match result {
      EncoderResult::InputEmpty => break,
      EncoderResult::OutputFull => {}
      EncoderResult::Unmappable(_) => out.push(UNMAPPABLE_REPLACEMENT),
    }
  }
}

/// Decode file contents, detecting the encoding from a byte-order mark.
///
/// Without a mark the bytes are read as UTF-8. Returns the decoded text and
/// the detected encoding.
pub fn decode(bytes: &[u8]) -> (String, TextEncoding) {
  // UTF-32LE shares its first two bytes with the UTF-16LE mark, so check it first.
  // A UTF-16LE file starting with U+0000 is therefore read as UTF-32LE.
  if let Some(body) = bytes.strip_prefix(UTF32LE_BOM) {
    return (decode_utf32(body, u32::from_le_bytes), TextEncoding::Utf32Le);
  }
  if let Some(body) = bytes.strip_prefix(UTF32BE_BOM) {
    return (decode_utf32(body, u32::from_be_bytes), TextEncoding::Utf32Be);
  }

  match Encoding::for_bom(bytes) {
    Some((enc, bom_len)) => {
      let (text, _) = enc.decode_without_bom_handling(&bytes[bom_len..]);
      let detected = if enc == UTF_16LE {
        TextEncoding::Utf16Le
      } else if enc == UTF_16BE {
        TextEncoding::Utf16Be
      } else {
        TextEncoding::Utf8 { bom: true }
      };
      (text.into_owned(), detected)
    }
    None => {
      let (text, _) = UTF_8.decode_without_bom_handling(bytes);
      (text.into_owned(), TextEncoding::Utf8 { bom: false })
    }
  }
}

fn decode_utf32(bytes: &[u8], from_bytes: fn([u8; 4]) -> u32) -> String {
  let chunks = bytes.chunks_exact(4);
  let trailing = !chunks.remainder().is_empty();

  let mut text: String = chunks
    .map(|chunk| {
      let unit = from_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
      char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER)
    })
    .collect();

  if trailing {
    text.push(char::REPLACEMENT_CHARACTER);
  }
  text
}
