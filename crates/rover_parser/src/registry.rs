//! Command registry and dispatch.
//!
//! Maps every recognized token (canonical names and aliases) to its
//! handler, and drives the tokenize-lookup-execute path for one input
//! line. The table is built once at startup and read-only afterwards.

use std::collections::HashMap;

use rover_model::{Error, Result, Rover};

use crate::command::{CommandSpec, Outcome};
use crate::handlers;
use crate::tokenizer::LineTokenizer;

/// The command table with alias resolution.
pub struct CommandRegistry {
    /// Registered commands in declaration order.
    specs: Vec<CommandSpec>,
    /// Token (canonical name or alias) to index into `specs`.
    index: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            specs: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates the standard rover command table.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(CommandSpec {
            name: "FORWARD",
            aliases: &["F", "MOVE"],
            handler: handlers::forward,
        });
        registry.register(CommandSpec {
            name: "BACK",
            aliases: &["B"],
            handler: handlers::back,
        });
        registry.register(CommandSpec {
            name: "LEFT",
            aliases: &["L"],
            handler: handlers::left,
        });
        registry.register(CommandSpec {
            name: "RIGHT",
            aliases: &["R"],
            handler: handlers::right,
        });
        registry.register(CommandSpec {
            name: "STATUS",
            aliases: &[],
            handler: handlers::status,
        });
        registry.register(CommandSpec {
            name: "GOTO",
            aliases: &[],
            handler: handlers::goto,
        });
        registry.register(CommandSpec {
            name: "RESET",
            aliases: &[],
            handler: handlers::reset,
        });
        registry.register(CommandSpec {
            name: "HELP",
            aliases: &["?"],
            handler: handlers::help,
        });
        registry.register(CommandSpec {
            name: "QUIT",
            aliases: &["EXIT"],
            handler: handlers::quit,
        });
        registry
    }

    /// Registers a command under its canonical name and all aliases.
    pub fn register(&mut self, spec: CommandSpec) {
        let index = self.specs.len();
        self.index.insert(spec.name, index);
        for &alias in spec.aliases {
            self.index.insert(alias, index);
        }
        self.specs.push(spec);
    }

    /// Looks up a command by token (canonical name or alias).
    #[must_use]
    pub fn lookup(&self, token: &str) -> Option<&CommandSpec> {
        self.index.get(token).map(|&i| &self.specs[i])
    }

    /// Returns every recognized token: canonical names, then aliases.
    #[must_use]
    pub fn command_tokens(&self) -> Vec<&'static str> {
        let mut tokens: Vec<&'static str> = self.specs.iter().map(|spec| spec.name).collect();
        for spec in &self.specs {
            tokens.extend(spec.aliases);
        }
        tokens
    }

    /// Parses and executes one input line against the rover.
    ///
    /// Empty or whitespace-only input yields [`Outcome::Empty`].
    ///
    /// # Errors
    ///
    /// Returns an error if the command token is unknown or the handler
    /// rejects its arguments.
    pub fn dispatch(&self, rover: &mut Rover, line: &str) -> Result<Outcome> {
        let Some(parsed) = LineTokenizer::tokenize(line) else {
            return Ok(Outcome::Empty);
        };
        match self.lookup(&parsed.name) {
            Some(spec) => (spec.handler)(rover, &parsed.args),
            None => Err(Error::unknown_command(parsed.name)),
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
