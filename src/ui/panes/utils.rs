//! Helpers shared by the panes

use crate::memory::Element;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, ListItem},
};

/// Bordered block with the focus-dependent border style
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp `scroll_offset` and keep only the rows that fit inside the borders
pub(crate) fn visible_items<'a>(
    all_items: Vec<ListItem<'a>>,
    area: Rect,
    scroll_offset: &mut usize,
) -> Vec<ListItem<'a>> {
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect()
}

/// In-memory bytes of an element, lowest address first
pub(crate) fn hex_bytes(value: Element) -> String {
    value
        .to_ne_bytes()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
