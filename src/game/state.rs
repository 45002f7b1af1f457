//! Session state for one playthrough.

use super::scenarios::SCENARIO_COUNT;

/// Balance every session starts with (base units).
pub const STARTING_BALANCE: i64 = 1000;

/// Above this final balance the verdict is Master (strict `>`).
pub const HIGH_THRESHOLD: i64 = 1500;

/// Above this final balance the verdict is Stable (strict `>`).
pub const MID_THRESHOLD: i64 = 800;

/// Which top-level screen is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Title,
    Playing,
    GameOver,
}

/// Per-turn UI state: whether the current scenario still awaits a choice.
///
/// `Decided` locks the option buttons and reveals feedback plus the
/// Next/Undo controls; `Deciding` is the fresh-card state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    Deciding,
    Decided { choice: usize },
}

/// State captured immediately before a choice, for single-level undo.
///
/// Overwritten on every choice, consumed (cleared) by undo — at most one
/// pending snapshot exists at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub position: usize,
    pub balance: i64,
    pub log_len: usize,
}

/// End-of-game classification tiers, ordered best to worst.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Master,
    Stable,
    Risk,
}

impl Verdict {
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Master => "🌟 Financial Master! Outstanding Management.",
            Verdict::Stable => "✅ Good Job! You survived comfortably.",
            Verdict::Risk => "⚠️ Bankruptcy Risk. Try to save more next time.",
        }
    }
}

/// One full playthrough from start to verdict. Discarded on restart.
pub struct SessionState {
    /// Index into the scenario table; `SCENARIO_COUNT` means game over.
    pub position: usize,
    /// Running balance in base units. May go negative.
    pub balance: i64,
    /// Decision log, append-only except for single-step undo removal.
    pub log: Vec<String>,
    /// Pending undo snapshot, if the last action was a choice.
    pub snapshot: Option<Snapshot>,
    pub phase: TurnPhase,
    pub screen: Screen,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            position: 0,
            balance: STARTING_BALANCE,
            log: Vec::new(),
            snapshot: None,
            phase: TurnPhase::Deciding,
            screen: Screen::Title,
        }
    }

    /// True once the scenario table is exhausted.
    pub fn is_over(&self) -> bool {
        self.position >= SCENARIO_COUNT
    }

    /// True while the current scenario awaits a choice.
    pub fn is_deciding(&self) -> bool {
        self.phase == TurnPhase::Deciding
    }
}
