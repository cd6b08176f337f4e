//! Individual action implementations.
//!
//! This module contains the concrete implementations for each action type:
//!
//! - [`write_lines`] - Escape items and append or overwrite them in a text file
//! - [`read_lines`] - Read the non-blank lines of a text file back into items

pub mod read_lines;
pub mod write_lines;
