//! The main REPL implementation.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use rover_model::{Error, Result};
use rover_parser::Outcome;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (rover, command table).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "rover> ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop until a quit command or end of input.
    ///
    /// Command errors are printed and the loop continues; only input
    /// failures end the loop early.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    self.print_error(&e);
                }
            }
        }

        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let Some(input) = self.read_input()? else {
            // End of input reads as a farewell, not an error
            println!("\nbye");
            return Ok(false);
        };

        // Skip empty lines
        if input.trim().is_empty() {
            return Ok(true);
        }

        // Add to history
        self.editor.add_history(&input);

        // Eval and print
        match self.session.eval(&input)? {
            Outcome::Reply(text) => {
                println!("{text}");
                Ok(true)
            }
            Outcome::Quit(text) => {
                println!("{text}");
                Ok(false)
            }
            Outcome::Empty => Ok(true),
        }
    }

    /// Reads one line, looping past interrupts.
    fn read_input(&mut self) -> Result<Option<String>> {
        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => return Ok(Some(line)),
                ReadResult::Interrupted => {
                    println!("(Interrupted) Type EXIT to quit.");
                }
                ReadResult::Eof => return Ok(None),
            }
        }
    }

    /// Runs a script of commands from a file, printing each reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a command fails.
    pub fn run_script(&mut self, path: &Path) -> Result<()> {
        let source = fs::read_to_string(path).map_err(|e| {
            Error::internal(format!("failed to read {}: {e}", path.display()))
        })?;
        self.eval_script(&source)
    }

    /// Executes newline-separated commands, printing each reply.
    ///
    /// Blank lines and lines starting with `#` are skipped. A quit
    /// command stops the script without error.
    ///
    /// # Errors
    ///
    /// Returns an error on the first failing command; remaining lines
    /// are not executed.
    pub fn eval_script(&mut self, source: &str) -> Result<()> {
        for line in source.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            match self.session.eval(line)? {
                Outcome::Reply(text) => println!("{text}"),
                Outcome::Quit(text) => {
                    println!("{text}");
                    break;
                }
                Outcome::Empty => {}
            }
        }
        Ok(())
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner and the initial status line.
    fn print_banner(&self) {
        println!("\x1b[1;36mRover CLI.\x1b[0m Type HELP for commands.");
        println!("{}", self.session.rover());

        // Flush to ensure the banner appears before the first prompt
        let _ = io::stdout().flush();
    }
}
