//! Domain model for the rover simulator.
//!
//! This crate provides:
//! - [`Rover`] - Position and heading state on an unbounded grid
//! - [`Heading`] - The four cardinal directions
//! - [`Error`] - Error types shared across the workspace

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod heading;
pub mod rover;

pub use error::{Error, ErrorKind, Result};
pub use heading::Heading;
pub use rover::Rover;
