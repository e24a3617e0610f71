//! Tokenizer tests.
//!
//! Equivalence classes: the tokenizer should erase case and spacing
//! differences without touching argument text.

use rover_parser::LineTokenizer;

#[test]
fn equivalent_spellings_tokenize_identically() {
    let spellings = ["f 3", "F 3", "  f   3  ", "\tF\t3\t"];
    let expected = LineTokenizer::tokenize("F 3").unwrap();
    for spelling in spellings {
        assert_eq!(LineTokenizer::tokenize(spelling).unwrap(), expected);
    }
}

#[test]
fn command_names_are_uppercased() {
    let parsed = LineTokenizer::tokenize("goto 1 2 n").unwrap();
    assert_eq!(parsed.name, "GOTO");
}

#[test]
fn argument_text_is_preserved_verbatim() {
    let parsed = LineTokenizer::tokenize("goto -5 -10 s").unwrap();
    assert_eq!(parsed.args, vec!["-5", "-10", "s"]);
}

#[test]
fn blank_lines_produce_nothing() {
    assert!(LineTokenizer::tokenize("").is_none());
    assert!(LineTokenizer::tokenize("   \t  ").is_none());
}

#[test]
fn bare_commands_have_no_arguments() {
    let parsed = LineTokenizer::tokenize("status").unwrap();
    assert_eq!(parsed.name, "STATUS");
    assert!(parsed.args.is_empty());
}
