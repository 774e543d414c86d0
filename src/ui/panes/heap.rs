//! Heap pane rendering with the block header and a hex dump per element
//!
//! The block was released before the viewer started, so it is drawn as a
//! tombstone: its header is marked freed and the bytes are the values that
//! were written while it was live.

use super::utils::{hex_bytes, pane_block, visible_items};
use crate::snapshot::RegionView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Render the heap pane
pub fn render_heap_pane(
    frame: &mut Frame,
    area: Rect,
    region: &RegionView,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Heap Memory ", is_focused);
    let mut all_items = Vec::new();

    all_items.push(ListItem::new(Line::from(vec![
        Span::styled(
            format!("0x{:08x}", region.base_address()),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("{} bytes", region.range.len_bytes),
            Style::default().fg(DEFAULT_THEME.primary),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("int[{}]", region.elements.len()),
            Style::default().fg(DEFAULT_THEME.type_name),
        ),
        Span::styled(
            " freed ",
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        ),
    ])));

    for element in &region.elements {
        all_items.push(ListItem::new(Line::from(vec![
            Span::styled(
                format!("  0x{:08x}: ", element.address),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                hex_bytes(element.value),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
            Span::styled(
                format!("  {}[{}] = ", region.label, element.index),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                element.value.to_string(),
                Style::default().fg(DEFAULT_THEME.number),
            ),
        ])));
    }

    let list = List::new(visible_items(all_items, area, scroll_offset)).block(block);
    frame.render_widget(list, area);
}
