//! Door identifiers
//!
//! The game always has three doors. The contestant's pick is fixed at door 0:
//! every probability in the puzzle is invariant under relabeling the doors, so
//! nothing is lost by pinning it.

use std::fmt;

/// Number of doors in the game.
pub const DOOR_COUNT: u8 = 3;

/// One of the three doors, numbered `0..DOOR_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Door(u8);

/// The door the contestant picks in every round.
pub const PLAYER_DOOR: Door = Door(0);

impl Door {
    pub const ALL: [Door; DOOR_COUNT as usize] = [Door(0), Door(1), Door(2)];

    pub fn new(index: u8) -> Option<Self> {
        (index < DOOR_COUNT).then_some(Self(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// The two doors other than `self`, in ascending order.
    pub fn others(self) -> [Door; 2] {
        match self.0 {
            0 => [Door(1), Door(2)],
            1 => [Door(0), Door(2)],
            _ => [Door(0), Door(1)],
        }
    }

    /// The single door that is neither `a` nor `b`.
    ///
    /// Returns `None` when `a == b`, since two doors are then left over.
    pub fn remaining(a: Door, b: Door) -> Option<Door> {
        if a == b {
            return None;
        }
        // Indices sum to 0 + 1 + 2.
        Some(Door(3 - a.0 - b.0))
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
