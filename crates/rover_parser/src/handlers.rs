//! Built-in command handlers.
//!
//! Each handler validates its arguments, applies its effect to the
//! rover, and replies with the fresh status line. Extra trailing
//! arguments are ignored.

use rover_model::{Error, Heading, Result, Rover};

use crate::command::Outcome;

/// Usage line for GOTO, quoted when its required arguments are missing.
const GOTO_USAGE: &str = "GOTO x y [H]";

/// Help text listing the command surface.
///
/// The MOVE alias is accepted but deliberately undocumented.
pub const HELP_TEXT: &str = "\
Commands:
  F [n] | FORWARD [n]    move forward n steps (default 1)
  B [n] | BACK [n]       move back n steps (default 1)
  L | LEFT               turn left 90°
  R | RIGHT              turn right 90°
  STATUS                 show current position and heading
  GOTO x y [H]           set position to (x,y) and optional heading H in {N,E,S,W}
  RESET                  reset to (0,0) heading N
  QUIT | EXIT            exit the program";

/// Moves the rover forward along its heading.
pub fn forward(rover: &mut Rover, args: &[String]) -> Result<Outcome> {
    let steps = step_arg(args)?;
    rover.advance(steps);
    Ok(Outcome::reply(rover.to_string()))
}

/// Moves the rover backward, opposite its heading.
pub fn back(rover: &mut Rover, args: &[String]) -> Result<Outcome> {
    let steps = step_arg(args)?;
    rover.advance(-steps);
    Ok(Outcome::reply(rover.to_string()))
}

/// Turns the rover 90 degrees counter-clockwise.
pub fn left(rover: &mut Rover, _args: &[String]) -> Result<Outcome> {
    rover.turn_left();
    Ok(Outcome::reply(rover.to_string()))
}

/// Turns the rover 90 degrees clockwise.
pub fn right(rover: &mut Rover, _args: &[String]) -> Result<Outcome> {
    rover.turn_right();
    Ok(Outcome::reply(rover.to_string()))
}

/// Reports the current position and heading.
pub fn status(rover: &mut Rover, _args: &[String]) -> Result<Outcome> {
    Ok(Outcome::reply(rover.to_string()))
}

/// Moves the rover to absolute coordinates, with an optional heading.
///
/// The position is validated and applied before the heading token is
/// examined, so `GOTO 1 2 Q` moves the rover to (1, 2) and then fails
/// with an invalid-heading error, leaving the old heading in place.
pub fn goto(rover: &mut Rover, args: &[String]) -> Result<Outcome> {
    let (Some(raw_x), Some(raw_y)) = (args.first(), args.get(1)) else {
        return Err(Error::missing_argument(GOTO_USAGE));
    };
    let x = parse_int(raw_x)?;
    let y = parse_int(raw_y)?;
    rover.set_position(x, y);
    if let Some(raw_heading) = args.get(2) {
        let heading: Heading = raw_heading.parse()?;
        rover.set_heading(heading);
    }
    Ok(Outcome::reply(rover.to_string()))
}

/// Returns the rover to the origin, facing north.
pub fn reset(rover: &mut Rover, _args: &[String]) -> Result<Outcome> {
    rover.reset();
    Ok(Outcome::reply(rover.to_string()))
}

/// Shows the command reference.
pub fn help(_rover: &mut Rover, _args: &[String]) -> Result<Outcome> {
    Ok(Outcome::reply(HELP_TEXT))
}

/// Ends the session.
pub fn quit(_rover: &mut Rover, _args: &[String]) -> Result<Outcome> {
    Ok(Outcome::quit("bye"))
}

/// Parses the optional step-count argument, defaulting to 1.
///
/// Zero is allowed; negative counts are rejected (BACK is the way to
/// move backward).
fn step_arg(args: &[String]) -> Result<i64> {
    let steps = match args.first() {
        None => 1,
        Some(raw) => parse_int(raw)?,
    };
    if steps < 0 {
        return Err(Error::invalid_argument(
            "a non-negative step count",
            steps.to_string(),
        ));
    }
    Ok(steps)
}

/// Parses one integer token.
fn parse_int(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| Error::invalid_argument("an integer", raw))
}
