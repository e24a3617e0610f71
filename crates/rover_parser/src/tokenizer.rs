//! Input line tokenization.
//!
//! Converts a raw input line into a command name and argument tokens.

/// A tokenized input line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsedLine {
    /// The command token, upper-cased.
    pub name: String,
    /// Argument tokens in order, case preserved.
    pub args: Vec<String>,
}

/// Tokenizes raw input lines.
pub struct LineTokenizer;

impl LineTokenizer {
    /// Splits a raw line into a command name and arguments.
    ///
    /// - Strips leading and trailing whitespace
    /// - Treats runs of whitespace as single separators
    /// - Upper-cases the command token
    /// - Leaves argument tokens as written (handlers validate/convert)
    ///
    /// Returns `None` for empty or whitespace-only input.
    #[must_use]
    pub fn tokenize(input: &str) -> Option<ParsedLine> {
        let mut parts = input.split_whitespace();
        let name = parts.next()?.to_uppercase();
        let args = parts.map(String::from).collect();
        Some(ParsedLine { name, args })
    }
}
