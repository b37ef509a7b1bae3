use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::*;

/// The session's state-machine stage. `Won` and `Lost` are terminal until
/// [`GameSession::reset`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    Playing,
    Won,
    Lost,
}

impl Phase {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Why a session ended in `Lost`; meaningful only in that phase.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LossReason {
    Obstacle,
    Timeout,
}

/// Outcome of a single directional command.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    /// Wrong phase, or the target cell lies outside the grid.
    Ignored,
    Moved,
    Collected,
    Won,
    HitObstacle,
}

impl MoveOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            Ignored => false,
            Moved => true,
            Collected => true,
            Won => true,
            HitObstacle => true,
        }
    }
}

/// Read-only view handed to the embedding shell.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub move_count: u32,
    pub remaining_secs: f64,
    pub loss_reason: Option<LossReason>,
}

/// A single game from placement to win or loss.
///
/// Owns all mutable session state; nothing else aliases it. Every operation
/// that depends on the clock takes `now` from the caller, so timeout
/// detection is a pull: the shell calls [`check_timeout`] before each render
/// or query instead of relying on a scheduled callback.
///
/// [`check_timeout`]: GameSession::check_timeout
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    config: GameConfig,
    player: Coord2,
    coins: BTreeSet<Coord2>,
    obstacles: BTreeSet<Coord2>,
    move_count: u32,
    phase: Phase,
    loss_reason: Option<LossReason>,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
}

impl GameSession {
    /// Creates a session with a board placed from `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let layout = RandomLayoutGenerator::new(seed).generate(&config, config.grid.center());
        Self::from_parts(config, layout)
    }

    /// Creates a session from an explicit layout, which must leave the
    /// spawn cell free.
    pub fn with_layout(config: GameConfig, layout: BoardLayout) -> Result<Self> {
        if layout.occupies(config.grid.center()) {
            return Err(GameError::SpawnOccupied);
        }
        Ok(Self::from_parts(config, layout))
    }

    fn from_parts(config: GameConfig, layout: BoardLayout) -> Self {
        let (coins, obstacles) = layout.into_sets();
        Self {
            player: config.grid.center(),
            config,
            coins,
            obstacles,
            move_count: 0,
            phase: Phase::default(),
            loss_reason: None,
            started_at: None,
            ended_at: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.config.grid
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn player(&self) -> Coord2 {
        self.player
    }

    pub fn coins(&self) -> &BTreeSet<Coord2> {
        &self.coins
    }

    pub fn obstacles(&self) -> &BTreeSet<Coord2> {
        &self.obstacles
    }

    pub fn coins_left(&self) -> CellCount {
        self.coins.len().try_into().unwrap()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn loss_reason(&self) -> Option<LossReason> {
        self.loss_reason
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// Begins the countdown. Valid only from `NotStarted`; anything else is
    /// treated as stale input and ignored.
    pub fn start(&mut self, now: DateTime<Utc>) -> bool {
        if !self.phase.is_initial() {
            return false;
        }

        self.phase = Phase::Playing;
        self.started_at = Some(now);
        self.ended_at = None;
        log::debug!("started at {}", now);
        true
    }

    /// Applies one directional command.
    ///
    /// Out-of-phase commands and moves that would leave the grid are
    /// ignored. The coin check runs before the obstacle check and both
    /// always run, so a move that collects the final coin still loses the
    /// game when the same cell holds an obstacle.
    pub fn move_player(&mut self, direction: Direction, now: DateTime<Utc>) -> MoveOutcome {
        use MoveOutcome::*;

        if !matches!(self.phase, Phase::Playing) {
            return Ignored;
        }
        let Some(next) = self.config.grid.step(self.player, direction) else {
            return Ignored;
        };

        self.player = next;
        self.move_count += 1;

        let mut outcome = if self.coins.remove(&next) {
            Collected
        } else {
            Moved
        };

        if self.coins.is_empty() {
            self.end_session(Phase::Won, None, now);
            outcome = Won;
        }
        if self.obstacles.contains(&next) {
            self.end_session(Phase::Lost, Some(LossReason::Obstacle), now);
            outcome = HitObstacle;
        }

        outcome
    }

    /// Detects expiry of the countdown; call with the shell's clock before
    /// each render or query. Returns whether the session just timed out.
    pub fn check_timeout(&mut self, now: DateTime<Utc>) -> bool {
        if !matches!(self.phase, Phase::Playing) {
            return false;
        }
        let Some(started_at) = self.started_at else {
            return false;
        };
        if now - started_at < self.time_limit() {
            return false;
        }

        // Stamp the deadline itself, not `now`: reported elapsed time must
        // not depend on how late the poll arrived.
        let deadline = started_at + self.time_limit();
        self.end_session(Phase::Lost, Some(LossReason::Timeout), deadline);
        true
    }

    /// Replaces the whole session with a freshly placed board. Valid from
    /// any phase. Pass [`random_seed`] so replays differ.
    pub fn reset(&mut self, seed: u64) {
        log::debug!("reset with seed {}", seed);
        *self = Self::new(self.config, seed);
    }

    /// Whole seconds since start, frozen once the session ends; 0 before
    /// the session starts.
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u32 {
        if let Some(started_at) = self.started_at {
            (self.ended_at.unwrap_or(now) - started_at)
                .num_seconds()
                .max(0) as u32
        } else {
            0
        }
    }

    /// Seconds left on the countdown: the full limit before start, clamped
    /// to zero, frozen once the session ends.
    pub fn remaining_secs(&self, now: DateTime<Utc>) -> f64 {
        let Some(started_at) = self.started_at else {
            return f64::from(self.config.time_limit_secs);
        };

        let deadline = started_at + self.time_limit();
        let at = self.ended_at.unwrap_or(now);
        ((deadline - at).num_milliseconds() as f64 / 1000.0).max(0.0)
    }

    pub fn snapshot(&self, now: DateTime<Utc>) -> Snapshot {
        Snapshot {
            phase: self.phase,
            move_count: self.move_count,
            remaining_secs: self.remaining_secs(now),
            loss_reason: self.loss_reason,
        }
    }

    fn end_session(&mut self, phase: Phase, reason: Option<LossReason>, at: DateTime<Utc>) {
        self.phase = phase;
        self.loss_reason = reason;
        if self.ended_at.is_none() {
            self.ended_at = Some(at);
        }
        log::debug!("ended as {:?} at {}", phase, at);
    }

    fn time_limit(&self) -> TimeDelta {
        TimeDelta::seconds(i64::from(self.config.time_limit_secs))
    }
}
