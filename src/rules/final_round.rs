//! Final-round resolution.
//!
//! Once a player reaches the winning score the game enters a final round: every
//! other player gets one more turn to try to beat the leader. The round ends in
//! one of two ways:
//!
//! - **Upset**: the player whose turn it is holds a winning score strictly
//!   above everyone else's before play has come back around. They win at once.
//!   The trigger player never wins this way, only through cycle completion.
//! - **Cycle completion**: play returns to the trigger player's original seat.
//!   The leader wins, provided they still hold a winning score.
//!
//! Resolution only runs after at least one turn has been advanced since the
//! trigger, so the trigger player can never win on the same turn they crossed
//! the threshold.

use serde::{Deserialize, Serialize};

use crate::core::config::FarkleConfig;
use crate::core::player::{Player, PlayerId};

/// Record of how the final round started.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalRound {
    /// Player whose score first crossed the threshold.
    pub trigger: PlayerId,

    /// Turn index at the moment of the crossing.
    pub started_at: usize,

    /// Has `advance_turn` run since the trigger?
    pub has_advanced: bool,
}

impl FinalRound {
    #[must_use]
    pub fn new(trigger: PlayerId, started_at: usize) -> Self {
        Self {
            trigger,
            started_at,
            has_advanced: false,
        }
    }

    /// Has play come back to the trigger player's original seat?
    #[must_use]
    pub fn is_cycle_complete(&self, current: &Player, current_index: usize) -> bool {
        current.id() == self.trigger && current_index == self.started_at
    }
}

/// The player with the highest score. Ties go to the earliest in turn order.
pub fn leader<'a, I>(players: I) -> Option<&'a Player>
where
    I: IntoIterator<Item = &'a Player>,
{
    let mut best: Option<&Player> = None;
    for player in players {
        match best {
            Some(b) if player.score() <= b.score() => {}
            _ => best = Some(player),
        }
    }
    best
}

/// Best score among everyone except `excluded`.
fn best_rival_score<'a, I>(players: I, excluded: PlayerId) -> Option<i64>
where
    I: IntoIterator<Item = &'a Player>,
{
    players
        .into_iter()
        .filter(|p| p.id() != excluded)
        .map(Player::score)
        .max()
}

/// Decide whether the final round has produced a winner.
///
/// `players` is the roster in turn order (any borrowed collection) and
/// `current_index` the seat whose turn it is. Returns the winner's id, or
/// `None` if play continues.
pub fn check_winner<'a, I>(
    players: I,
    current_index: usize,
    round: &FinalRound,
    config: &FarkleConfig,
) -> Option<PlayerId>
where
    I: IntoIterator<Item = &'a Player> + Copy,
{
    let current = players.into_iter().nth(current_index)?;
    let top = leader(players)?;

    if !round.is_cycle_complete(current, current_index) {
        if current.id() == round.trigger {
            return None;
        }
        let beats_rivals = best_rival_score(players, current.id())
            .map_or(true, |rival| current.score() > rival);
        if beats_rivals && config.is_winning(current.score()) {
            return Some(current.id());
        }
        return None;
    }

    if config.is_winning(top.score()) {
        return Some(top.id());
    }
    None
}
