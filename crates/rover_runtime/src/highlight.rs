//! Input highlighting for the REPL.

use std::borrow::Cow;

use rover_parser::CommandRegistry;

/// Highlighter for rover command lines.
///
/// The leading token is colored by whether it is a recognized command;
/// integer and heading arguments get their own colors. Highlighting is
/// purely cosmetic and never changes the text content.
pub struct CommandHighlighter {
    /// Recognized command tokens, upper-case.
    tokens: Vec<String>,
}

impl CommandHighlighter {
    /// Creates a highlighter over the standard command table.
    #[must_use]
    pub fn new() -> Self {
        let registry = CommandRegistry::standard();
        Self {
            tokens: registry
                .command_tokens()
                .iter()
                .map(|token| (*token).to_string())
                .collect(),
        }
    }

    /// Highlight a line of input.
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let mut result = String::with_capacity(line.len() * 2);
        let mut rest = line;
        let mut seen_command = false;

        while !rest.is_empty() {
            // Copy the whitespace run verbatim
            match rest.find(|c: char| !c.is_whitespace()) {
                Some(start) => {
                    result.push_str(&rest[..start]);
                    rest = &rest[start..];
                }
                None => {
                    result.push_str(rest);
                    break;
                }
            }

            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let word = &rest[..end];
            rest = &rest[end..];

            let style = if seen_command {
                argument_style(word)
            } else {
                seen_command = true;
                if self.is_command(word) {
                    "\x1b[1;32m" // bold green
                } else {
                    "\x1b[31m" // red
                }
            };

            if style.is_empty() {
                result.push_str(word);
            } else {
                result.push_str(style);
                result.push_str(word);
                result.push_str("\x1b[0m");
            }
        }

        Cow::Owned(result)
    }

    /// Returns true if the token names a registered command.
    fn is_command(&self, word: &str) -> bool {
        let upper = word.to_uppercase();
        self.tokens.iter().any(|token| *token == upper)
    }
}

impl Default for CommandHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks a style for an argument token.
fn argument_style(word: &str) -> &'static str {
    if is_integer(word) {
        "\x1b[35m" // magenta
    } else if is_heading(word) {
        "\x1b[36m" // cyan
    } else {
        ""
    }
}

/// Returns true for an optionally-signed integer token.
fn is_integer(word: &str) -> bool {
    let digits = word.strip_prefix('-').unwrap_or(word);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Returns true for a bare heading letter.
fn is_heading(word: &str) -> bool {
    matches!(word.to_uppercase().as_str(), "N" | "E" | "S" | "W")
}
