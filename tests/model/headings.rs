//! Integration tests for Heading
//!
//! Tests rotation algebra, parsing, and display round-trips.

use rover_model::Heading;

// =============================================================================
// Rotation
// =============================================================================

#[test]
fn left_visits_all_headings_counterclockwise() {
    let mut heading = Heading::North;
    let mut seen = vec![heading];
    for _ in 0..3 {
        heading = heading.left();
        seen.push(heading);
    }
    assert_eq!(
        seen,
        vec![Heading::North, Heading::West, Heading::South, Heading::East]
    );
}

#[test]
fn right_visits_all_headings_clockwise() {
    let mut heading = Heading::North;
    let mut seen = vec![heading];
    for _ in 0..3 {
        heading = heading.right();
        seen.push(heading);
    }
    assert_eq!(
        seen,
        vec![Heading::North, Heading::East, Heading::South, Heading::West]
    );
}

#[test]
fn opposite_headings_have_opposite_vectors() {
    for heading in Heading::ALL {
        let (dx, dy) = heading.unit_vector();
        let (ox, oy) = heading.left().left().unit_vector();
        assert_eq!((dx, dy), (-ox, -oy));
    }
}

#[test]
fn left_and_right_are_inverses() {
    for heading in Heading::ALL {
        assert_eq!(heading.left().right(), heading);
        assert_eq!(heading.right().left(), heading);
    }
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn parses_all_letters_in_either_case() {
    for heading in Heading::ALL {
        let upper = heading.letter().to_string();
        let lower = upper.to_lowercase();
        assert_eq!(upper.parse::<Heading>().unwrap(), heading);
        assert_eq!(lower.parse::<Heading>().unwrap(), heading);
    }
}

#[test]
fn rejects_unknown_letters() {
    let error = "Q".parse::<Heading>().unwrap_err();
    assert!(error.to_string().contains("invalid heading: Q"));
    assert!(error.to_string().contains("N, E, S, W"));
}

#[test]
fn rejects_full_direction_names() {
    assert!("NORTH".parse::<Heading>().is_err());
    assert!("north".parse::<Heading>().is_err());
}

#[test]
fn display_round_trips_through_parse() {
    for heading in Heading::ALL {
        let rendered = heading.to_string();
        assert_eq!(rendered.parse::<Heading>().unwrap(), heading);
    }
}
