//! FamilyFin — steer a family budget through twelve quarterly decisions.

pub mod actions;
pub mod currency;
pub mod logic;
pub mod render;
pub mod scenarios;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};

use actions::*;
use currency::{Currency, ALL_CURRENCIES};
use state::{Screen, SessionState};

pub struct FinanceGame {
    pub session: SessionState,
    pub currency: Currency,
}

impl FinanceGame {
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            currency: Currency::Usd,
        }
    }

    /// Returns true when the event changed state (and a redraw is due).
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Click(id) => self.handle_click(*id),
        }
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        // Currency tabs are live on every screen past the title.
        if (CURRENCY_BASE..CURRENCY_BASE + ALL_CURRENCIES.len() as u16).contains(&action_id)
            && self.session.screen != Screen::Title
        {
            self.currency = ALL_CURRENCIES[(action_id - CURRENCY_BASE) as usize];
            return true;
        }

        match self.session.screen {
            Screen::Title => match action_id {
                START_GAME => {
                    logic::start_session(&mut self.session);
                    true
                }
                _ => false,
            },
            Screen::Playing => match action_id {
                id if (OPTION_BASE..OPTION_BASE + 2).contains(&id) => {
                    logic::choose_option(&mut self.session, (id - OPTION_BASE) as usize).is_ok()
                }
                NEXT_TURN if !self.session.is_deciding() => {
                    logic::advance(&mut self.session);
                    true
                }
                UNDO_TURN => logic::undo(&mut self.session),
                _ => false,
            },
            Screen::GameOver => match action_id {
                RESTART => {
                    logic::start_session(&mut self.session);
                    true
                }
                UNDO_TURN => logic::undo(&mut self.session),
                _ => false,
            },
        }
    }

    fn handle_key(&mut self, key: char) -> bool {
        // 'c' cycles the display currency wherever a balance is visible.
        if key == 'c' && self.session.screen != Screen::Title {
            self.currency = self.currency.toggled();
            return true;
        }

        match self.session.screen {
            Screen::Title => match key {
                's' | '\n' | ' ' => {
                    logic::start_session(&mut self.session);
                    true
                }
                _ => false,
            },
            Screen::Playing => match key {
                '1' if self.session.is_deciding() => {
                    logic::choose_option(&mut self.session, 0).is_ok()
                }
                '2' if self.session.is_deciding() => {
                    logic::choose_option(&mut self.session, 1).is_ok()
                }
                'n' | '\n' if !self.session.is_deciding() => {
                    logic::advance(&mut self.session);
                    true
                }
                'u' => logic::undo(&mut self.session),
                _ => false,
            },
            Screen::GameOver => match key {
                'r' => {
                    logic::start_session(&mut self.session);
                    true
                }
                // The last decision is still revertable from the verdict screen.
                'u' => logic::undo(&mut self.session),
                _ => false,
            },
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.session, self.currency, f, area, click_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::state::{TurnPhase, STARTING_BALANCE};

    fn playing_game() -> FinanceGame {
        let mut game = FinanceGame::new();
        game.handle_input(&InputEvent::Key('s'));
        game
    }

    #[test]
    fn title_screen_starts_on_key_or_click() {
        let mut game = FinanceGame::new();
        assert_eq!(game.session.screen, Screen::Title);
        assert!(game.handle_input(&InputEvent::Key('s')));
        assert_eq!(game.session.screen, Screen::Playing);

        let mut game = FinanceGame::new();
        assert!(game.handle_input(&InputEvent::Click(START_GAME)));
        assert_eq!(game.session.screen, Screen::Playing);
    }

    #[test]
    fn title_screen_ignores_play_keys() {
        let mut game = FinanceGame::new();
        assert!(!game.handle_input(&InputEvent::Key('1')));
        assert!(!game.handle_input(&InputEvent::Key('n')));
        assert!(!game.handle_input(&InputEvent::Key('c')));
        assert_eq!(game.session.screen, Screen::Title);
    }

    #[test]
    fn choose_via_key_then_advance() {
        let mut game = playing_game();
        assert!(game.handle_input(&InputEvent::Key('1')));
        assert_eq!(game.session.balance, 950);
        assert_eq!(game.session.phase, TurnPhase::Decided { choice: 0 });

        // Option keys are dead while the turn is decided
        assert!(!game.handle_input(&InputEvent::Key('2')));
        assert_eq!(game.session.balance, 950);

        assert!(game.handle_input(&InputEvent::Key('n')));
        assert_eq!(game.session.position, 1);
        assert_eq!(game.session.phase, TurnPhase::Deciding);
    }

    #[test]
    fn choose_via_click() {
        let mut game = playing_game();
        assert!(game.handle_input(&InputEvent::Click(OPTION_BASE + 1)));
        assert_eq!(game.session.balance, 1050);

        // A second click on either option is rejected
        assert!(!game.handle_input(&InputEvent::Click(OPTION_BASE)));
        assert_eq!(game.session.balance, 1050);
    }

    #[test]
    fn next_click_is_dead_while_deciding() {
        let mut game = playing_game();
        assert!(!game.handle_input(&InputEvent::Click(NEXT_TURN)));
        assert_eq!(game.session.position, 0);
    }

    #[test]
    fn undo_via_key_and_click() {
        let mut game = playing_game();
        game.handle_input(&InputEvent::Key('1'));
        assert!(game.handle_input(&InputEvent::Key('u')));
        assert_eq!(game.session.balance, STARTING_BALANCE);

        game.handle_input(&InputEvent::Click(OPTION_BASE));
        assert!(game.handle_input(&InputEvent::Click(UNDO_TURN)));
        assert_eq!(game.session.balance, STARTING_BALANCE);

        // Nothing left to undo
        assert!(!game.handle_input(&InputEvent::Key('u')));
    }

    #[test]
    fn currency_toggle_key_and_tabs() {
        let mut game = playing_game();
        assert_eq!(game.currency, Currency::Usd);
        assert!(game.handle_input(&InputEvent::Key('c')));
        assert_eq!(game.currency, Currency::Inr);
        assert!(game.handle_input(&InputEvent::Key('c')));
        assert_eq!(game.currency, Currency::Usd);

        assert!(game.handle_input(&InputEvent::Click(CURRENCY_BASE + 1)));
        assert_eq!(game.currency, Currency::Inr);
        assert!(game.handle_input(&InputEvent::Click(CURRENCY_BASE)));
        assert_eq!(game.currency, Currency::Usd);
    }

    #[test]
    fn currency_change_does_not_touch_the_session() {
        let mut game = playing_game();
        game.handle_input(&InputEvent::Key('1'));
        let balance = game.session.balance;
        let log = game.session.log.clone();
        game.handle_input(&InputEvent::Key('c'));
        assert_eq!(game.session.balance, balance);
        assert_eq!(game.session.log, log);
        assert_eq!(game.session.phase, TurnPhase::Decided { choice: 0 });
    }

    #[test]
    fn full_playthrough_reaches_game_over() {
        let mut game = playing_game();
        for _ in 0..scenarios::SCENARIO_COUNT {
            assert!(game.handle_input(&InputEvent::Key('2')));
            assert!(game.handle_input(&InputEvent::Key('n')));
        }
        assert_eq!(game.session.screen, Screen::GameOver);
        assert_eq!(game.session.balance, 350);
    }

    #[test]
    fn undo_from_game_over_returns_to_the_last_quarter() {
        let mut game = playing_game();
        for _ in 0..scenarios::SCENARIO_COUNT {
            game.handle_input(&InputEvent::Key('1'));
            game.handle_input(&InputEvent::Key('n'));
        }
        assert_eq!(game.session.screen, Screen::GameOver);

        assert!(game.handle_input(&InputEvent::Key('u')));
        assert_eq!(game.session.screen, Screen::Playing);
        assert_eq!(game.session.position, scenarios::SCENARIO_COUNT - 1);
        assert_eq!(game.session.log.len(), scenarios::SCENARIO_COUNT - 1);
    }

    #[test]
    fn undo_click_works_on_the_verdict_screen() {
        let mut game = playing_game();
        for _ in 0..scenarios::SCENARIO_COUNT {
            game.handle_input(&InputEvent::Click(OPTION_BASE + 1));
            game.handle_input(&InputEvent::Click(NEXT_TURN));
        }
        assert_eq!(game.session.screen, Screen::GameOver);
        assert!(game.session.snapshot.is_some());

        assert!(game.handle_input(&InputEvent::Click(UNDO_TURN)));
        assert_eq!(game.session.screen, Screen::Playing);
        assert_eq!(game.session.position, scenarios::SCENARIO_COUNT - 1);

        // Snapshot consumed: a second undo click is dead
        assert!(!game.handle_input(&InputEvent::Click(UNDO_TURN)));
    }

    #[test]
    fn restart_resets_the_session() {
        let mut game = playing_game();
        for _ in 0..scenarios::SCENARIO_COUNT {
            game.handle_input(&InputEvent::Key('2'));
            game.handle_input(&InputEvent::Key('n'));
        }
        game.handle_input(&InputEvent::Key('c')); // INR
        assert!(game.handle_input(&InputEvent::Key('r')));

        assert_eq!(game.session.screen, Screen::Playing);
        assert_eq!(game.session.balance, STARTING_BALANCE);
        assert_eq!(game.session.position, 0);
        assert!(game.session.log.is_empty());
        // Display currency is a preference, not session state
        assert_eq!(game.currency, Currency::Inr);
    }

    #[test]
    fn restart_via_click() {
        let mut game = playing_game();
        for _ in 0..scenarios::SCENARIO_COUNT {
            game.handle_input(&InputEvent::Click(OPTION_BASE));
            game.handle_input(&InputEvent::Click(NEXT_TURN));
        }
        assert!(game.handle_input(&InputEvent::Click(RESTART)));
        assert_eq!(game.session.screen, Screen::Playing);
        assert_eq!(game.session.balance, STARTING_BALANCE);
    }

    #[test]
    fn unknown_input_is_not_consumed() {
        let mut game = playing_game();
        assert!(!game.handle_input(&InputEvent::Key('x')));
        assert!(!game.handle_input(&InputEvent::Click(999)));
        assert_eq!(game.session.balance, STARTING_BALANCE);
    }
}
