use super::roll::Roll;
use crate::Position;
use crate::TRACK_LENGTH;
use std::fmt::Display;
use std::fmt::Formatter;

/// A named pawn on the circular track.
///
/// Names are fixed at creation and serve as the player's identity everywhere:
/// in the turn ring, in the peer directory, and on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    name: String,
    position: Position,
}

impl Player {
    pub fn new<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            position: 0,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn position(&self) -> Position {
        self.position
    }
    /// Names must survive the `name=position,` board encoding.
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty() && !name.contains([',', '='])
    }
    /// Moves forward by the roll, wrapping past the last square.
    pub(super) fn step(&mut self, roll: Roll) -> Position {
        self.position = (self.position + Position::from(roll.value())) % TRACK_LENGTH;
        self.position
    }
}

impl From<&str> for Player {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.position)
    }
}
