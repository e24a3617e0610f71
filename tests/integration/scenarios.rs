//! Scenario integration tests
//!
//! Tests complete interactive sessions replayed line by line, asserting
//! the exact reply for each step.

use rover_model::{Heading, Rover};
use rover_runtime::Session;

fn reply(session: &mut Session, line: &str) -> String {
    let outcome = session.eval(line).unwrap();
    outcome.text().unwrap().to_string()
}

// =============================================================================
// Guided tour
// =============================================================================

#[test]
fn a_full_drive_ends_back_at_the_origin() {
    let mut session = Session::new();

    assert_eq!(reply(&mut session, "F 3"), "(0, 3) heading=N");
    assert_eq!(reply(&mut session, "R"), "(0, 3) heading=E");
    assert_eq!(reply(&mut session, "FORWARD 2"), "(2, 3) heading=E");
    assert_eq!(reply(&mut session, "L"), "(2, 3) heading=N");
    assert_eq!(reply(&mut session, "GOTO -5 -10 S"), "(-5, -10) heading=S");
    assert_eq!(reply(&mut session, "RESET"), "(0, 0) heading=N");

    assert_eq!(*session.rover(), Rover::new());
}

#[test]
fn spelling_variants_drive_the_same_route() {
    let mut canonical = Session::new();
    let mut sloppy = Session::new();

    for line in ["FORWARD 2", "RIGHT", "BACK 1", "STATUS"] {
        canonical.eval(line).unwrap();
    }
    for line in ["  move 2", "r", "\tB  1 ", "status"] {
        sloppy.eval(line).unwrap();
    }

    assert_eq!(canonical.rover(), sloppy.rover());
}

// =============================================================================
// Error recovery
// =============================================================================

#[test]
fn a_session_survives_every_error_class() {
    let mut session = Session::new();
    session.eval("F 2").unwrap();
    let parked = *session.rover();

    assert!(session.eval("FLY").is_err());
    assert!(session.eval("GOTO 1").is_err());
    assert!(session.eval("F -3").is_err());
    assert!(session.eval("B many").is_err());

    assert_eq!(*session.rover(), parked);
    assert_eq!(reply(&mut session, "R"), "(0, 2) heading=E");
}

#[test]
fn a_bad_goto_heading_still_moves_the_rover() {
    let mut session = Session::new();
    assert!(session.eval("GOTO 7 8 UP").is_err());
    assert_eq!(session.rover().position(), (7, 8));
    assert_eq!(session.rover().heading(), Heading::North);
}

// =============================================================================
// Session boundaries
// =============================================================================

#[test]
fn quit_is_reported_but_not_enforced_by_the_session() {
    let mut session = Session::new();
    let outcome = session.eval("EXIT").unwrap();
    assert!(outcome.is_quit());

    // The loop decides when to stop; the session itself keeps working.
    assert_eq!(reply(&mut session, "STATUS"), "(0, 0) heading=N");
}

#[test]
fn blank_lines_between_commands_change_nothing() {
    let mut session = Session::new();
    session.eval("F 1").unwrap();
    let outcome = session.eval("   ").unwrap();
    assert!(outcome.text().is_none());
    assert_eq!(session.rover().position(), (0, 1));
}
