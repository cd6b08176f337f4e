//! Shared utilities.
//!
//! Currently only test helpers.
