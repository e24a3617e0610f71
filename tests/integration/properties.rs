//! Property-based integration tests
//!
//! Tests randomized command sequences evaluated end to end.

use proptest::prelude::*;
use rover_model::Heading;
use rover_runtime::Session;

proptest! {
    #[test]
    fn forward_then_back_returns_home(n in 0i64..10_000) {
        let mut session = Session::new();
        session.eval(&format!("F {n}")).unwrap();
        session.eval(&format!("B {n}")).unwrap();
        prop_assert_eq!(session.rover().position(), (0, 0));
        prop_assert_eq!(session.rover().heading(), Heading::North);
    }

    #[test]
    fn net_rotation_matches_the_turn_sequence(
        turns in proptest::collection::vec(prop_oneof![Just("L"), Just("R")], 0..32)
    ) {
        let mut session = Session::new();
        let mut expected = Heading::North;
        for turn in &turns {
            session.eval(turn).unwrap();
            expected = if *turn == "L" { expected.left() } else { expected.right() };
        }
        prop_assert_eq!(session.rover().heading(), expected);
        prop_assert_eq!(session.rover().position(), (0, 0));
    }

    #[test]
    fn unknown_words_never_disturb_the_rover(word in "[a-z]{1,8}") {
        let mut session = Session::new();
        let tokens = session.registry().command_tokens();
        prop_assume!(!tokens.contains(&word.to_uppercase().as_str()));

        session.eval("GOTO 3 4 E").unwrap();
        prop_assert!(session.eval(&word).is_err());
        prop_assert_eq!(session.rover().position(), (3, 4));
        prop_assert_eq!(session.rover().heading(), Heading::East);
    }

    #[test]
    fn goto_then_status_agree(x in -1_000_000i64..1_000_000, y in -1_000_000i64..1_000_000) {
        let mut session = Session::new();
        session.eval(&format!("GOTO {x} {y}")).unwrap();
        let outcome = session.eval("STATUS").unwrap();
        prop_assert_eq!(outcome.text().unwrap(), format!("({x}, {y}) heading=N"));
    }
}
