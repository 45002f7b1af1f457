//! Pure state transitions for the decision game (no rendering / IO).
//!
//! Every operation runs synchronously and atomically; the undo contract
//! relies on `choose_option` capturing its snapshot before any mutation.

use thiserror::Error;

use super::scenarios::{Scenario, ScenarioOption, SCENARIOS, SCENARIO_COUNT};
use super::state::{
    Screen, SessionState, Snapshot, TurnPhase, Verdict, HIGH_THRESHOLD, MID_THRESHOLD,
    STARTING_BALANCE,
};

/// Rejected inputs to [`choose_option`]. State is never touched on `Err`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChoiceError {
    #[error("option index {0} is not a valid choice for the current scenario")]
    InvalidChoice(usize),
    #[error("the current scenario has already been decided")]
    AlreadyDecided,
    #[error("the session is over; no further choices are accepted")]
    GameOver,
}

/// Reset the session and present the first scenario.
pub fn start_session(state: &mut SessionState) {
    state.position = 0;
    state.balance = STARTING_BALANCE;
    state.log.clear();
    state.snapshot = None;
    present_current(state);
}

/// Show the scenario at the current position, or end the game if the
/// table is exhausted. Entering a turn clears any per-turn feedback state.
pub fn present_current(state: &mut SessionState) {
    if state.is_over() {
        state.screen = Screen::GameOver;
        return;
    }
    state.screen = Screen::Playing;
    state.phase = TurnPhase::Deciding;
}

/// The scenario currently on display, if the session is still running.
pub fn current_scenario(state: &SessionState) -> Option<&'static Scenario> {
    SCENARIOS.get(state.position)
}

/// The option chosen for the current turn, once decided.
pub fn decided_option(state: &SessionState) -> Option<&'static ScenarioOption> {
    match state.phase {
        TurnPhase::Decided { choice } => current_scenario(state).map(|s| &s.options[choice]),
        TurnPhase::Deciding => None,
    }
}

/// Apply the option at `index` for the current scenario.
///
/// Captures the undo snapshot *before* mutating the balance, then applies
/// the delta, appends one log entry and locks the turn.
pub fn choose_option(state: &mut SessionState, index: usize) -> Result<(), ChoiceError> {
    if state.is_over() {
        return Err(ChoiceError::GameOver);
    }
    if let TurnPhase::Decided { .. } = state.phase {
        return Err(ChoiceError::AlreadyDecided);
    }
    let scenario = &SCENARIOS[state.position];
    let option = scenario
        .options
        .get(index)
        .ok_or(ChoiceError::InvalidChoice(index))?;

    state.snapshot = Some(Snapshot {
        position: state.position,
        balance: state.balance,
        log_len: state.log.len(),
    });
    state.balance += option.delta;
    state.log.push(format!(
        "Q{}: {} ({})",
        scenario.quarter,
        option.label,
        format_delta(option.delta)
    ));
    state.phase = TurnPhase::Decided { choice: index };
    Ok(())
}

/// Move to the next scenario. Past the end this is a no-op that re-enters
/// the terminal state; it never reads out of bounds.
pub fn advance(state: &mut SessionState) {
    if state.position < SCENARIO_COUNT {
        state.position += 1;
    }
    present_current(state);
}

/// Revert exactly one `choose_option`, if there is one to revert.
///
/// Returns false (and does nothing) when no snapshot is pending, so
/// spurious calls are safe. The snapshot is consumed: a second undo in a
/// row is always a no-op.
pub fn undo(state: &mut SessionState) -> bool {
    let Some(snap) = state.snapshot.take() else {
        return false;
    };
    state.position = snap.position;
    state.balance = snap.balance;
    state.log.truncate(snap.log_len);
    present_current(state);
    true
}

/// Classify a final balance. Both comparisons are strict: a balance exactly
/// at a threshold falls to the lower tier.
pub fn verdict(balance: i64) -> Verdict {
    if balance > HIGH_THRESHOLD {
        Verdict::Master
    } else if balance > MID_THRESHOLD {
        Verdict::Stable
    } else {
        Verdict::Risk
    }
}

/// Base-unit delta with an explicit sign, e.g. `+50` / `-50`.
pub fn format_delta(delta: i64) -> String {
    if delta >= 0 {
        format!("+{delta}")
    } else {
        delta.to_string()
    }
}
