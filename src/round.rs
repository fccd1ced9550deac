//! Single-round simulation
//!
//! Places the prize, lets the host open a goat door and scores both fixed
//! strategies against the result.

use crate::door::{Door, PLAYER_DOOR};
use crate::rng::DoorRng;

/// Which strategy took the prize in a round. Exactly one of them does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    StayWins,
    SwitchWins,
}

impl Outcome {
    pub fn stay_wins(self) -> bool {
        self == Outcome::StayWins
    }

    pub fn switch_wins(self) -> bool {
        self == Outcome::SwitchWins
    }
}

/// One played round: where the prize was and which door the host opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub prize: Door,
    pub host: Door,
}

impl Round {
    pub fn new(prize: Door, host: Door) -> Self {
        Self { prize, host }
    }

    /// Play one round against the contestant's fixed pick.
    pub fn play(rng: &mut DoorRng) -> Self {
        let prize = rng.door();
        let host = host_door(prize, rng);
        Self { prize, host }
    }

    pub fn outcome(&self) -> Outcome {
        if self.prize == PLAYER_DOOR {
            Outcome::StayWins
        } else {
            Outcome::SwitchWins
        }
    }
}

/// The door the host opens given the prize location.
///
/// With the prize behind the contestant's door the host has two goats to
/// choose from and picks one at random. Otherwise exactly one legal door is
/// left and the host must open it.
pub fn host_door(prize: Door, rng: &mut DoorRng) -> Door {
    match Door::remaining(PLAYER_DOOR, prize) {
        Some(door) => door,
        None => {
            let [a, b] = PLAYER_DOOR.others();
            rng.pick(a, b)
        }
    }
}
