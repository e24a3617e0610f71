//! Session state for the REPL.
//!
//! The session pairs the rover with the command registry and evaluates
//! one input line at a time. Tests drive this seam directly; the REPL
//! wraps it with input handling and printing.

use rover_model::{Result, Rover};
use rover_parser::{CommandRegistry, Outcome};

/// State for an interactive session.
pub struct Session {
    /// The rover being driven.
    rover: Rover,

    /// The command table.
    registry: CommandRegistry,
}

impl Session {
    /// Creates a session with a fresh rover and the standard commands.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rover: Rover::new(),
            registry: CommandRegistry::standard(),
        }
    }

    /// Creates a session starting from the given rover.
    #[must_use]
    pub fn with_rover(rover: Rover) -> Self {
        Self {
            rover,
            registry: CommandRegistry::standard(),
        }
    }

    /// Returns a reference to the rover.
    #[must_use]
    pub const fn rover(&self) -> &Rover {
        &self.rover
    }

    /// Returns a mutable reference to the rover.
    pub fn rover_mut(&mut self) -> &mut Rover {
        &mut self.rover
    }

    /// Returns a reference to the command registry.
    #[must_use]
    pub const fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Evaluates one line of input against the rover.
    ///
    /// # Errors
    ///
    /// Returns an error if the command is unknown or its arguments are
    /// invalid; the session stays usable afterwards.
    pub fn eval(&mut self, line: &str) -> Result<Outcome> {
        self.registry.dispatch(&mut self.rover, line)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
