//! Per-round invariant checks for debug runs
//!
//! Every check here should hold by construction of [`host_door`]. A failure
//! means the round simulator is broken, so the run is aborted rather than
//! continued with bad data.
//!
//! [`host_door`]: crate::round::host_door

use thiserror::Error;

use crate::door::{Door, PLAYER_DOOR};
use crate::round::Round;

/// A broken rule of the game, with the offending door values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("host_opened_player (player={player}, host={host})")]
    HostOpenedPlayer { player: Door, host: Door },
    #[error("host_opened_prize (prize={prize}, host={host})")]
    HostOpenedPrize { prize: Door, host: Door },
    #[error("wrong_host_choice (prize={prize}, host={host}, expected={expected})")]
    WrongHostChoice {
        prize: Door,
        host: Door,
        expected: Door,
    },
    #[error("wrong_tie_break (prize={prize}, host={host})")]
    WrongTieBreak { prize: Door, host: Door },
}

/// Check the host's door against the rules of the game.
pub fn check_round(round: &Round) -> Result<(), InvariantViolation> {
    let Round { prize, host } = *round;

    if host == PLAYER_DOOR {
        return Err(InvariantViolation::HostOpenedPlayer {
            player: PLAYER_DOOR,
            host,
        });
    }
    if host == prize {
        return Err(InvariantViolation::HostOpenedPrize { prize, host });
    }
    if let Some(expected) = Door::remaining(PLAYER_DOOR, prize) {
        if host != expected {
            return Err(InvariantViolation::WrongHostChoice {
                prize,
                host,
                expected,
            });
        }
    }
    // Already implied by the first check; kept as a direct statement of the
    // tie-break rule.
    if prize == PLAYER_DOOR && !PLAYER_DOOR.others().contains(&host) {
        return Err(InvariantViolation::WrongTieBreak { prize, host });
    }

    Ok(())
}
