//! Rover - Command-line rover simulator
//!
//! This crate re-exports all layers of the rover system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: rover_runtime - REPL, line editing, CLI binary
//! Layer 1: rover_parser  - Tokenizer, command registry, handlers
//! Layer 0: rover_model   - Rover state, headings, errors
//! ```

pub use rover_model as model;
pub use rover_parser as parser;
pub use rover_runtime as runtime;
