//! Command parsing and dispatch for the rover simulator.
//!
//! This crate turns raw input lines like "F 3" or "goto -5 -10 S" into
//! effects on a [`rover_model::Rover`] and replies for the caller to
//! print.
//!
//! # Architecture
//!
//! ```text
//! "  goto -5 -10 S "
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ParsedLine { name: "GOTO", args: ["-5", "-10", "S"] }
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   REGISTRY      │  → CommandSpec (GOTO) via canonical name or alias
//! │   LOOKUP        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   HANDLER       │  → validates args, mutates the rover
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   OUTCOME       │  → Reply("(-5, -10) heading=S") | Quit("bye") | Empty
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Split raw input into a command name and arguments
//! - [`command`] - Dispatch types: [`Outcome`], [`Handler`], [`CommandSpec`]
//! - [`registry`] - The command table with aliases and the dispatch path
//! - [`handlers`] - The built-in command handlers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod handlers;
pub mod registry;
pub mod tokenizer;

// Re-export main types for convenience
pub use command::{CommandSpec, Handler, Outcome};
pub use registry::CommandRegistry;
pub use tokenizer::{LineTokenizer, ParsedLine};
