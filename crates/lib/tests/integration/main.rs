//! Integration tests for linefile-lib.

mod common;
mod encoding_tests;
mod round_trip_tests;
