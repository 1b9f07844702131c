//! Integration tests for lintstep
//!
//! These tests drive the `lintstep` binary end to end.

mod cli_test;
