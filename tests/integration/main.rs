//! Cross-layer integration tests for Rover
//!
//! Tests that verify correct interaction between multiple crates,
//! driving full command sequences through a session the way the REPL
//! does.

mod properties;
mod scenarios;
