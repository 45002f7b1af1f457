//! Screen rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{ClickableList, TabBar};

use super::actions::*;

use super::currency::{format_money, format_money_signed, Currency, ALL_CURRENCIES};
use super::logic::{current_scenario, verdict};
use super::scenarios::SCENARIO_COUNT;
use super::state::{Screen, SessionState, TurnPhase, Verdict};

pub fn render(
    state: &SessionState,
    currency: Currency,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    match state.screen {
        Screen::Title => render_title(f, area, click_state),
        Screen::Playing => render_play(state, currency, f, area, click_state),
        Screen::GameOver => render_game_over(state, currency, f, area, click_state),
    }
}

fn screen_borders(area: Rect) -> Borders {
    if is_narrow_layout(area.width) {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    }
}

// ── Title Screen ───────────────────────────────────────────────────────

fn render_title(f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let borders = screen_borders(area);
    let mut cs = click_state.borrow_mut();

    let mut list = ClickableList::new();
    list.push(Line::from(""));
    list.push(
        Line::from(Span::styled(
            "FamilyFin",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
    );
    list.push(
        Line::from(Span::styled(
            "A year of family finances, one quarter at a time",
            Style::default().fg(Color::Gray),
        ))
        .centered(),
    );
    list.push(Line::from(""));
    list.push(
        Line::from(Span::styled(
            format!(
                "Start with {} and steer your family through {} decisions.",
                format_money(super::state::STARTING_BALANCE, Currency::Usd),
                SCENARIO_COUNT
            ),
            Style::default().fg(Color::White),
        ))
        .centered(),
    );
    list.push(Line::from(""));
    list.push_clickable(
        Line::from(Span::styled(
            "[s] Start Game",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        START_GAME,
    );
    list.push(Line::from(""));
    list.push(
        Line::from(Span::styled(
            "tap or use the keyboard",
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    );

    list.register_targets(area, &mut cs, 1, 1);

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" FamilyFin ");
    f.render_widget(Paragraph::new(list.into_lines()).block(block), area);
}

// ── Play Screen ────────────────────────────────────────────────────────

fn render_play(
    state: &SessionState,
    currency: Currency,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let is_narrow = is_narrow_layout(area.width);
    let borders = screen_borders(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),                             // Header
            Constraint::Length(1),                             // Currency tabs
            Constraint::Length(if is_narrow { 5 } else { 4 }), // Scenario prompt
            Constraint::Length(7),                             // Options / feedback
            Constraint::Min(3),                                // Decision log
        ])
        .split(area);

    render_header(state, currency, f, chunks[0], borders, is_narrow);
    render_currency_tabs(currency, f, chunks[1], click_state);
    render_prompt(state, f, chunks[2], borders);
    render_choices(state, currency, f, chunks[3], borders, click_state);
    render_log(state, f, chunks[4], borders);
}

fn render_header(
    state: &SessionState,
    currency: Currency,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    is_narrow: bool,
) {
    let title = if is_narrow {
        " FamilyFin "
    } else {
        " FamilyFin - Family Finance Simulator "
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(" Quarter: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}/{}", state.position + 1, SCENARIO_COUNT),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Balance: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format_money(state.balance, currency),
                Style::default()
                    .fg(balance_color(state.balance))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn balance_color(balance: i64) -> Color {
    if balance < 0 {
        Color::Red
    } else {
        Color::Yellow
    }
}

fn render_currency_tabs(
    currency: Currency,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cs = click_state.borrow_mut();

    let mut tabs = TabBar::new("│");
    for (i, c) in ALL_CURRENCIES.iter().enumerate() {
        let style = if *c == currency {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        tabs = tabs.tab(c.code(), style, CURRENCY_BASE + i as u16);
    }
    tabs.render(f, area, &mut cs);
}

fn render_prompt(state: &SessionState, f: &mut Frame, area: Rect, borders: Borders) {
    let Some(scenario) = current_scenario(state) else {
        return;
    };

    let lines = vec![Line::from(Span::styled(
        format!(" {}", scenario.prompt),
        Style::default().fg(Color::White),
    ))];

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Green))
        .title(format!(" {} ", scenario.title));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_choices(
    state: &SessionState,
    currency: Currency,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let Some(scenario) = current_scenario(state) else {
        return;
    };
    let mut cs = click_state.borrow_mut();
    let mut list = ClickableList::new();

    match state.phase {
        TurnPhase::Deciding => {
            for (i, opt) in scenario.options.iter().enumerate() {
                let key = (b'1' + i as u8) as char;
                let delta_color = if opt.delta >= 0 { Color::Green } else { Color::Red };
                list.push_clickable(
                    Line::from(vec![
                        Span::styled(
                            format!(" [{}] ", key),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(opt.label, Style::default().fg(Color::White)),
                        Span::styled(
                            format!("  {}", format_money_signed(opt.delta, currency)),
                            Style::default().fg(delta_color),
                        ),
                    ]),
                    OPTION_BASE + i as u16,
                );
            }
            list.push(Line::from(""));
            list.push(Line::from(Span::styled(
                " Choose an option",
                Style::default().fg(Color::DarkGray),
            )));
        }
        TurnPhase::Decided { choice } => {
            let opt = &scenario.options[choice];
            let delta_color = if opt.delta >= 0 { Color::Green } else { Color::Red };
            list.push(Line::from(vec![
                Span::styled(format!(" {}", opt.message), Style::default().fg(delta_color)),
                Span::styled(
                    format!("  ({})", format_money_signed(opt.delta, currency)),
                    Style::default().fg(delta_color),
                ),
            ]));
            list.push(Line::from(""));
            list.push_clickable(
                Line::from(vec![
                    Span::styled(
                        " [n] ",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("Next Quarter", Style::default().fg(Color::White)),
                ]),
                NEXT_TURN,
            );
            list.push_clickable(
                Line::from(vec![
                    Span::styled(
                        " [u] ",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("Undo", Style::default().fg(Color::White)),
                ]),
                UNDO_TURN,
            );
        }
    }

    list.register_targets(area, &mut cs, 1, 1);

    let title = match state.phase {
        TurnPhase::Deciding => " Your Move ",
        TurnPhase::Decided { .. } => " Outcome ",
    };
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Yellow))
        .title(title);
    f.render_widget(Paragraph::new(list.into_lines()).block(block), area);
}

fn render_log(state: &SessionState, f: &mut Frame, area: Rect, borders: Borders) {
    let max_lines = area.height.saturating_sub(2) as usize;
    let start = state.log.len().saturating_sub(max_lines);
    let lines: Vec<Line> = state.log[start..]
        .iter()
        .map(|entry| {
            Line::from(Span::styled(
                format!(" > {}", entry),
                Style::default().fg(Color::DarkGray),
            ))
        })
        .collect();

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Decisions ");
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

// ── Game Over Screen ───────────────────────────────────────────────────

fn render_game_over(
    state: &SessionState,
    currency: Currency,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let borders = screen_borders(area);
    let mut cs = click_state.borrow_mut();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Verdict
            Constraint::Min(5),    // Full decision log
        ])
        .split(area);

    let tier = verdict(state.balance);
    let accent = verdict_color(tier);

    let mut list = ClickableList::new();
    list.push(Line::from(vec![
        Span::styled(" Final Balance: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format_money(state.balance, currency),
            Style::default()
                .fg(balance_color(state.balance))
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    list.push(Line::from(Span::styled(
        format!(" {}", tier.message()),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    )));
    list.push(Line::from(""));
    if state.snapshot.is_some() {
        list.push_clickable(
            Line::from(vec![
                Span::styled(
                    " [u] ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("Undo Last Quarter", Style::default().fg(Color::White)),
            ]),
            UNDO_TURN,
        );
    }
    list.push_clickable(
        Line::from(vec![
            Span::styled(
                " [r] ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("Play Again", Style::default().fg(Color::White)),
        ]),
        RESTART,
    );

    list.register_targets(chunks[0], &mut cs, 1, 1);

    let verdict_block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(accent))
        .title(" Year Complete ");
    f.render_widget(
        Paragraph::new(list.into_lines()).block(verdict_block),
        chunks[0],
    );

    let log_lines: Vec<Line> = state
        .log
        .iter()
        .map(|entry| {
            Line::from(Span::styled(
                format!(" {}", entry),
                Style::default().fg(Color::Gray),
            ))
        })
        .collect();
    let log_block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Your Year ");
    f.render_widget(
        Paragraph::new(log_lines)
            .block(log_block)
            .wrap(Wrap { trim: false }),
        chunks[1],
    );
}

fn verdict_color(tier: Verdict) -> Color {
    match tier {
        Verdict::Master => Color::Yellow,
        Verdict::Stable => Color::Green,
        Verdict::Risk => Color::Red,
    }
}
