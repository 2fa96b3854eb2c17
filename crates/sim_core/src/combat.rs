//! Damage, death, respawn and team scoring state machines.
//!
//! These are the pure state transitions; the relay server owns the timers
//! that drive respawns and score resets.

use crate::types::Team;

/// Health and liveness of one player. Health stays in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatState {
    pub hp: i32,
    pub alive: bool,
}

impl Default for CombatState {
    fn default() -> Self {
        Self {
            hp: 100,
            alive: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Victim already dead; dropped without effect.
    Ignored,
    Damaged,
    /// Health reached zero on this application; exactly one per life.
    Killed,
}

impl CombatState {
    pub fn apply_damage(&mut self, amount: i32) -> DamageOutcome {
        if !self.alive {
            return DamageOutcome::Ignored;
        }
        self.hp = (self.hp - amount).clamp(0, 100);
        if self.hp == 0 {
            self.alive = false;
            DamageOutcome::Killed
        } else {
            DamageOutcome::Damaged
        }
    }

    /// Valid only while dead; returns whether the transition happened.
    pub fn respawn(&mut self) -> bool {
        if self.alive {
            return false;
        }
        self.hp = 100;
        self.alive = true;
        true
    }
}

/// Team kill counters and the round-over latch.
#[derive(Debug, Clone, Copy)]
pub struct Scoreboard {
    pub red: u32,
    pub blue: u32,
    limit: u32,
    round_over: bool,
}

impl Scoreboard {
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self {
            red: 0,
            blue: 0,
            limit,
            round_over: false,
        }
    }

    /// Credit a kill to `team`. Returns the winner exactly once, on the kill
    /// that reaches the limit; later kills still count but cannot re-trigger
    /// the announcement until [`Self::reset`].
    pub fn record_kill(&mut self, team: Team) -> Option<Team> {
        let counter = match team {
            Team::Red => &mut self.red,
            Team::Blue => &mut self.blue,
        };
        *counter += 1;
        if *counter >= self.limit && !self.round_over {
            self.round_over = true;
            Some(team)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.red = 0;
        self.blue = 0;
        self.round_over = false;
    }
}
