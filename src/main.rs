mod game;
mod input;
mod offline;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use game::FinanceGame;
use input::{pixel_to_cell, ClickState, InputEvent};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

/// Query the grid container's bounding rect and convert pixel coordinates to
/// a terminal cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let click_x = mouse_x as f64 - rect.left();
    let click_y = mouse_y as f64 - rect.top();

    pixel_to_cell(
        click_x,
        click_y,
        rect.width(),
        rect.height(),
        cs.terminal_cols,
        cs.terminal_rows,
    )
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    offline::register_service_worker();

    let game = Rc::new(RefCell::new(FinanceGame::new()));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let game = game.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.kind != MouseEventKind::ButtonDown(MouseButton::Left) {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }

            let (col, row) = (mouse_event.col, mouse_event.row);
            let action_id = cs.hit_test(col, row);
            drop(cs);

            if let Some(id) = action_id {
                game.borrow_mut().handle_input(&InputEvent::Click(id));
            }
        }
    })?;

    // Keyboard handler
    terminal.on_key_event({
        let game = game.clone();
        move |key_event| {
            let event = match key_event.code {
                KeyCode::Char(c) => InputEvent::Key(c),
                KeyCode::Enter => InputEvent::Key('\n'),
                _ => return,
            };
            game.borrow_mut().handle_input(&event);
        }
    })?;

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let g = game.borrow();
            let size = f.area();

            // Update terminal dimensions and clear click targets
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            g.render(f, size, &click_state);
        }
    });

    Ok(())
}
