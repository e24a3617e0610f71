//! Command dispatch types.
//!
//! A command pairs a canonical name (plus aliases) with the handler
//! function that executes it. Handlers report back through [`Outcome`],
//! which tells the caller what to print and whether to keep running.

use rover_model::{Result, Rover};

/// What the caller should do after a command executes.
///
/// The quit signal crosses the handler boundary as data rather than as
/// control flow, so the loop decides when to stop.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Print the text and keep going.
    Reply(String),
    /// Print the farewell text and stop the loop.
    Quit(String),
    /// Nothing to print (empty input).
    Empty,
}

impl Outcome {
    /// Creates a reply outcome.
    #[must_use]
    pub fn reply(text: impl Into<String>) -> Self {
        Self::Reply(text.into())
    }

    /// Creates a quit outcome.
    #[must_use]
    pub fn quit(text: impl Into<String>) -> Self {
        Self::Quit(text.into())
    }

    /// Returns true if this outcome ends the loop.
    #[must_use]
    pub const fn is_quit(&self) -> bool {
        matches!(self, Self::Quit(_))
    }

    /// Returns the text to print, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Reply(text) | Self::Quit(text) => Some(text),
            Self::Empty => None,
        }
    }
}

/// A command handler.
///
/// Validates its arguments, applies the effect to the rover, and
/// produces an [`Outcome`]. Validation failures are returned as errors
/// and rendered at the loop boundary.
pub type Handler = fn(&mut Rover, &[String]) -> Result<Outcome>;

/// A registered command: canonical name, aliases, and handler.
#[derive(Clone, Debug)]
pub struct CommandSpec {
    /// Canonical command name, upper-case.
    pub name: &'static str,
    /// Alias tokens that resolve to this command.
    pub aliases: &'static [&'static str],
    /// The function that executes this command.
    pub handler: Handler,
}
