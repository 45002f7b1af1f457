//! Shared input plumbing: normalized events, click targets, hit testing.
//!
//! Rendering registers a rectangular click target per interactive element
//! each frame; the mouse handler converts pixel coordinates to terminal
//! cells and hit-tests against the registered targets.

use ratzilla::ratatui::layout::Rect;

/// All input the game reacts to, normalized from keyboard, mouse and touch.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key press.
    Key(char),
    /// A click/tap on a registered target, identified by a semantic action ID
    /// (see `game::actions`).
    Click(u16),
}

/// A screen region that triggers an action when tapped.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    /// Hit region in terminal cell coordinates.
    pub rect: Rect,
    pub action_id: u16,
}

/// Shared state between the render loop and the click handler.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    /// Called at the start of every frame; targets are re-registered during render.
    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Register a full-width, one-row target at `row`, clipped to `area`.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.targets.push(ClickTarget {
                rect: Rect::new(area.x, row, area.width, 1),
                action_id,
            });
        }
    }

    /// Hit-test a terminal cell against all registered targets. When targets
    /// overlap, the last registered one wins (later elements render on top).
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            if col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height {
                Some(t.action_id)
            } else {
                None
            }
        })
    }
}

/// Whether a screen width (in columns) should use the compact layout.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}

/// Convert pixel coordinates (relative to the grid container's top-left
/// corner) into a terminal cell. Returns `None` outside the grid.
pub fn pixel_to_cell(
    x: f64,
    y: f64,
    grid_width: f64,
    grid_height: f64,
    cols: u16,
    rows: u16,
) -> Option<(u16, u16)> {
    if grid_width <= 0.0 || grid_height <= 0.0 || cols == 0 || rows == 0 {
        return None;
    }
    if x < 0.0 || y < 0.0 {
        return None;
    }

    let col = (x / (grid_width / cols as f64)) as u16;
    let row = (y / (grid_height / rows as f64)) as u16;

    if col >= cols || row >= rows {
        return None;
    }
    Some((col, row))
}
