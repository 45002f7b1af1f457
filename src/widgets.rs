//! Reusable clickable UI components.
//!
//! Each component co-locates rendering and click-target registration so a
//! button can never be drawn without also being tappable.
//!
//! - [`ClickableList`] — vertical list with per-row click targets.
//! - [`TabBar`] — one-row tab selector (used for the currency switch).

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

// ── ClickableList ──────────────────────────────────────────────

/// A builder that pairs rendered [`Line`]s with click actions.
///
/// Lines are added in display order; clickable lines remember their index,
/// and [`register_targets`](ClickableList::register_targets) turns those
/// indices into row targets after layout is known. Inserting or removing
/// header lines therefore moves the targets automatically.
///
/// Lines are assumed not to wrap (one logical line per visual row).
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)` pairs.
    actions: Vec<(u16, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a non-clickable line.
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Add a clickable line bound to a semantic action ID.
    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        let idx = self.lines.len() as u16;
        self.actions.push((idx, action_id));
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Consume the builder, returning the lines for rendering.
    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register row targets for all clickable lines.
    ///
    /// * `top_offset` — rows before content (1 for a top border).
    /// * `bottom_offset` — rows after content (1 for a bottom border).
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);

        for &(line_idx, action_id) in &self.actions {
            let row = content_y + line_idx;
            if row >= content_end {
                continue;
            }
            cs.add_row_target(area, row, action_id);
        }
    }
}

// ── TabBar ─────────────────────────────────────────────────────

/// A one-row tab selector.
///
/// Renders tabs as padded labels separated by a separator string and
/// registers one click target per tab. Each target covers the padded label
/// plus half of the adjacent separator(s); the first and last tab extend to
/// the edges of the area so there are no dead gaps.
pub struct TabBar<'a> {
    tabs: Vec<(String, Style, u16)>,
    separator: &'a str,
    block: Option<Block<'a>>,
}

impl<'a> TabBar<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self {
            tabs: Vec::new(),
            separator,
            block: None,
        }
    }

    /// Add a tab with its label, style, and action ID.
    pub fn tab(mut self, label: impl Into<String>, style: Style, action_id: u16) -> Self {
        self.tabs.push((label.into(), style, action_id));
        self
    }

    /// Wrap the tab bar in a [`Block`]; bordered blocks shift the targets
    /// via `Block::inner()`.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Render the tab bar and register its click targets.
    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let sep_width = Line::from(self.separator).width() as u16;
        let mut spans: Vec<Span> = Vec::new();
        let mut widths: Vec<(u16, u16)> = Vec::new();

        for (i, (label, style, action_id)) in self.tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    self.separator,
                    Style::default().fg(Color::DarkGray),
                ));
            }
            let padded = format!(" {} ", label);
            widths.push((Line::from(padded.as_str()).width() as u16, *action_id));
            spans.push(Span::styled(padded, *style));
        }

        let inner = match &self.block {
            Some(block) => block.inner(area),
            None => area,
        };

        let line = Line::from(spans);
        let paragraph = match self.block {
            Some(block) => Paragraph::new(line).block(block),
            None => Paragraph::new(line),
        };
        f.render_widget(paragraph, area);

        register_tab_targets(cs, &widths, sep_width, inner.x, area.y, inner.width, area.height.max(1));
    }
}

/// Target math for [`TabBar`]: split separator columns between neighbours,
/// stretch the outer tabs to the area edges.
fn register_tab_targets(
    cs: &mut ClickState,
    tab_widths: &[(u16, u16)],
    separator_width: u16,
    x: u16,
    y: u16,
    total_width: u16,
    height: u16,
) {
    let n = tab_widths.len();
    if n == 0 || total_width == 0 {
        return;
    }

    // Starting column of each tab label
    let mut starts: Vec<u16> = Vec::with_capacity(n);
    let mut cursor: u16 = 0;
    for (i, &(w, _)) in tab_widths.iter().enumerate() {
        if i > 0 {
            cursor += separator_width;
        }
        starts.push(cursor);
        cursor += w;
    }

    for i in 0..n {
        let (_, action_id) = tab_widths[i];

        let left = if i == 0 {
            0
        } else {
            let prev_end = starts[i - 1] + tab_widths[i - 1].0;
            prev_end + (starts[i] - prev_end) / 2
        };

        let right = if i == n - 1 {
            total_width
        } else {
            let cur_end = starts[i] + tab_widths[i].0;
            let next_start = starts[i + 1];
            cur_end + (next_start - cur_end) / 2
        };

        let w = right.saturating_sub(left);
        if w > 0 {
            cs.add_click_target(Rect::new(x + left, y, w, height), action_id);
        }
    }
}
