//! Constants shared by the line writer and reader.

/// Characters with special meaning in build descriptions.
///
/// `;` separates items in a list, `%` introduces an escape, and the rest are
/// metadata, property, and wildcard markers. Line breaks are included so a
/// single value never spans physical lines. Each of these is written to disk
/// as a `%XX` triplet.
pub const RESERVED_CHARS: &[char] = &['%', '*', '?', '@', '$', '(', ')', ';', '\'', '\r', '\n'];

/// Encoding used when the caller does not name one.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Terminator appended after every written line.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Replacement emitted for characters the target encoding cannot represent.
pub const UNMAPPABLE_REPLACEMENT: u8 = b'?';
