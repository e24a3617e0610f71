//! Interactive runtime for the rover simulator.
//!
//! This crate provides:
//! - [`Repl`] - The interactive read-eval-print loop
//! - [`Session`] - Rover plus command registry, the evaluation seam
//! - [`LineEditor`] - Editor abstraction with a rustyline implementation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod highlight;
pub mod repl;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use session::Session;
