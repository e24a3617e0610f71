//! Integration tests for the rover_parser crate.
//!
//! Tests for the interpreter pipeline:
//! - Line tokenization
//! - Registry lookup, alias resolution, and dispatch
//! - Handler argument validation and replies

mod tokenizer_tests;
