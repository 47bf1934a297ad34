use std::collections::VecDeque;
use std::convert::Infallible;

use thiserror::Error;

use crate::MoveInput;
use crate::game_state::Square;

/// Error when parsing a move script.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("invalid square notation: '{0}'")]
    BadSquare(String),
    #[error("move '{0}' needs a destination square")]
    MissingDestination(String),
}

/// A scriptable move source.
///
/// Queues moves parsed from coordinate notation and hands them out one at a
/// time. More script can be appended at any time for interactive use.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoves {
    pending: VecDeque<(Square, Square)>,
}

impl ScriptedMoves {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and queue additional moves.
    ///
    /// Format:
    /// - A move is two squares back to back (e.g., "e2e4")
    /// - Moves are separated by whitespace, `.` or `,`
    ///
    /// Nothing is queued if any part of the script is invalid.
    pub fn push_script(&mut self, script: &str) -> Result<(), ScriptError> {
        let moves = parse_script(script)?;
        self.pending.extend(moves);
        Ok(())
    }

    /// Number of moves still queued.
    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl MoveInput for ScriptedMoves {
    type Error = Infallible;

    fn next_move(&mut self) -> Result<Option<(Square, Square)>, Infallible> {
        Ok(self.pending.pop_front())
    }
}

/// Parse a script into `(from, to)` pairs.
fn parse_script(script: &str) -> Result<Vec<(Square, Square)>, ScriptError> {
    script
        .split(|c: char| c.is_whitespace() || c == '.' || c == ',')
        .filter(|token| !token.is_empty())
        .map(parse_move)
        .collect()
}

fn parse_move(token: &str) -> Result<(Square, Square), ScriptError> {
    let parse_square = |s: &str| {
        s.parse::<Square>()
            .map_err(|_| ScriptError::BadSquare(s.to_string()))
    };

    let split = token
        .char_indices()
        .nth(2)
        .map(|(idx, _)| idx)
        .ok_or_else(|| ScriptError::MissingDestination(token.to_string()))?;
    let (from, to) = token.split_at(split);
    Ok((parse_square(from)?, parse_square(to)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test_case("e2e4 e7e5"; "spaces")]
    #[test_case("e2e4. e7e5."; "periods")]
    #[test_case("  e2e4,e7e5\n"; "commas and newline")]
    fn test_parse_separators(script: &str) {
        let mut input = ScriptedMoves::new();
        input.push_script(script).unwrap();

        assert_eq!(input.len(), 2);
        assert_eq!(input.next_move(), Ok(Some((sq("e2"), sq("e4")))));
        assert_eq!(input.next_move(), Ok(Some((sq("e7"), sq("e5")))));
        assert_eq!(input.next_move(), Ok(None));
    }

    #[test]
    fn test_parse_error_invalid_square() {
        let mut input = ScriptedMoves::new();
        let result = input.push_script("e2e4 zze5");
        assert_eq!(result, Err(ScriptError::BadSquare("zz".to_string())));
    }

    #[test]
    fn test_parse_error_missing_destination() {
        let mut input = ScriptedMoves::new();
        let result = input.push_script("e2");
        assert_eq!(result, Err(ScriptError::MissingDestination("e2".to_string())));
    }

    #[test]
    fn test_parse_error_does_not_modify_state() {
        let mut input = ScriptedMoves::new();
        input.push_script("g1f3").unwrap();

        assert!(input.push_script("e2e4 xx").is_err());

        assert_eq!(input.len(), 1);
        assert_eq!(input.next_move(), Ok(Some((sq("g1"), sq("f3")))));
    }
}
