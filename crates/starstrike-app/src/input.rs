//! Line-oriented command input.
//!
//! One command per line: `start`, `fire`, `+up` / `-up` (likewise `down`,
//! `left`, `right`), `aim <dyaw> <dpitch>`, `status`, `quit`.

use std::io::BufRead;

use starstrike_core::commands::PlayerCommand;
use starstrike_core::enums::MoveDirection;

use crate::state::AppState;

/// Errors raised while parsing an input line.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("`{command}` is missing its {argument} argument")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("`{0}` is not a number")]
    BadNumber(String),
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    Command(PlayerCommand),
    /// Print the latest snapshot as JSON.
    Status,
    Quit,
}

/// Parse one input line.
pub fn parse_line(line: &str) -> Result<InputAction, InputError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(InputError::Empty);
    };
    let head = head.to_ascii_lowercase();

    if let Some(rest) = head.strip_prefix('+') {
        return parse_direction(rest, &head).map(|direction| {
            InputAction::Command(PlayerCommand::Move {
                direction,
                pressed: true,
            })
        });
    }
    if let Some(rest) = head.strip_prefix('-') {
        return parse_direction(rest, &head).map(|direction| {
            InputAction::Command(PlayerCommand::Move {
                direction,
                pressed: false,
            })
        });
    }

    match head.as_str() {
        "start" => Ok(InputAction::Command(PlayerCommand::Start)),
        "fire" => Ok(InputAction::Command(PlayerCommand::Fire)),
        "status" => Ok(InputAction::Status),
        "quit" | "exit" => Ok(InputAction::Quit),
        "aim" => {
            let delta_yaw = parse_number(words.next(), "yaw")?;
            let delta_pitch = parse_number(words.next(), "pitch")?;
            Ok(InputAction::Command(PlayerCommand::Aim {
                delta_yaw,
                delta_pitch,
            }))
        }
        _ => Err(InputError::Unknown(head)),
    }
}

fn parse_direction(name: &str, word: &str) -> Result<MoveDirection, InputError> {
    match name {
        "up" => Ok(MoveDirection::Up),
        "down" => Ok(MoveDirection::Down),
        "left" => Ok(MoveDirection::Left),
        "right" => Ok(MoveDirection::Right),
        _ => Err(InputError::Unknown(word.to_string())),
    }
}

fn parse_number(word: Option<&str>, argument: &'static str) -> Result<f64, InputError> {
    let word = word.ok_or(InputError::MissingArgument {
        command: "aim",
        argument,
    })?;
    match word.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::BadNumber(word.to_string())),
    }
}

/// Read commands until `quit`, end of input, or the game loop going away.
/// Bad lines are logged and skipped.
pub fn forward_lines(reader: impl BufRead, state: &AppState) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("failed to read input: {e}");
                return;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Ok(InputAction::Command(command)) => {
                log::debug!("input: {command:?}");
                if !state.send(command) {
                    log::warn!("game loop has stopped; ignoring further input");
                    return;
                }
            }
            Ok(InputAction::Status) => print_status(state),
            Ok(InputAction::Quit) => return,
            Err(e) => log::warn!("{e}"),
        }
    }
}

fn print_status(state: &AppState) {
    let Ok(lock) = state.latest_snapshot.lock() else {
        return;
    };
    match lock.as_ref().map(serde_json::to_string) {
        Some(Ok(json)) => println!("{json}"),
        Some(Err(e)) => log::error!("failed to serialize snapshot: {e}"),
        None => log::info!("no frame has run yet"),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::{mpsc, Arc, Mutex};

    use super::*;
    use crate::state::GameLoopCommand;

    #[test]
    fn test_simple_commands() {
        assert_eq!(
            parse_line("start"),
            Ok(InputAction::Command(PlayerCommand::Start))
        );
        assert_eq!(
            parse_line("  FIRE "),
            Ok(InputAction::Command(PlayerCommand::Fire))
        );
        assert_eq!(parse_line("quit"), Ok(InputAction::Quit));
        assert_eq!(parse_line("status"), Ok(InputAction::Status));
    }

    #[test]
    fn test_move_press_release() {
        assert_eq!(
            parse_line("+left"),
            Ok(InputAction::Command(PlayerCommand::Move {
                direction: MoveDirection::Left,
                pressed: true,
            }))
        );
        assert_eq!(
            parse_line("-down"),
            Ok(InputAction::Command(PlayerCommand::Move {
                direction: MoveDirection::Down,
                pressed: false,
            }))
        );
        assert_eq!(
            parse_line("+sideways"),
            Err(InputError::Unknown("+sideways".into()))
        );
    }

    #[test]
    fn test_aim_arguments() {
        assert_eq!(
            parse_line("aim 0.1 -0.25"),
            Ok(InputAction::Command(PlayerCommand::Aim {
                delta_yaw: 0.1,
                delta_pitch: -0.25,
            }))
        );
        assert_eq!(
            parse_line("aim 0.1"),
            Err(InputError::MissingArgument {
                command: "aim",
                argument: "pitch",
            })
        );
        assert_eq!(
            parse_line("aim left 1"),
            Err(InputError::BadNumber("left".into()))
        );
        assert_eq!(
            parse_line("aim NaN 0"),
            Err(InputError::BadNumber("NaN".into()))
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_line("   "), Err(InputError::Empty));
        assert_eq!(
            parse_line("warp 9"),
            Err(InputError::Unknown("warp".into()))
        );
    }

    #[test]
    fn test_forward_lines_stops_at_quit() {
        let (tx, rx) = mpsc::channel();
        let state = AppState {
            command_tx: tx,
            latest_snapshot: Arc::new(Mutex::new(None)),
        };
        let input = Cursor::new("start\n\nbogus\n+up\nquit\nfire\n");
        forward_lines(input, &state);

        let received: Vec<GameLoopCommand> = rx.try_iter().collect();
        assert_eq!(
            received,
            vec![
                GameLoopCommand::PlayerCommand(PlayerCommand::Start),
                GameLoopCommand::PlayerCommand(PlayerCommand::Move {
                    direction: MoveDirection::Up,
                    pressed: true,
                }),
            ]
        );
    }
}
