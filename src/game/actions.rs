//! Semantic action IDs for click targets.

// ── Title screen ─────────────────────────────────────────────
pub const START_GAME: u16 = 1;

// ── Play screen ──────────────────────────────────────────────
pub const OPTION_BASE: u16 = 10; // +index 0..1
pub const NEXT_TURN: u16 = 20;
pub const UNDO_TURN: u16 = 21;
pub const CURRENCY_BASE: u16 = 30; // +index into ALL_CURRENCIES

// ── Game-over screen ─────────────────────────────────────────
pub const RESTART: u16 = 40;
