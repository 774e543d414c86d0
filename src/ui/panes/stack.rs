//! Stack pane rendering
//!
//! Shows the frame that owned the fixed buffer, then one row per element with
//! its value and address. Rows are addressed from the base so the 4-byte
//! stride between neighbours is visible.

use super::utils::{pane_block, visible_items};
use crate::snapshot::RegionView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Header for the frame that holds the fixed buffer
const FRAME_LABEL: &str = "automatic storage";

/// Render the stack pane
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    region: &RegionView,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Stack ", is_focused);
    let mut all_items = Vec::new();

    all_items.push(ListItem::new(Line::from(vec![
        Span::styled("▸ ", Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled("Frame 0 ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled("│ ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            FRAME_LABEL,
            Style::default()
                .fg(DEFAULT_THEME.function)
                .add_modifier(Modifier::BOLD),
        ),
    ])));

    all_items.push(ListItem::new(Line::from(vec![
        Span::raw("  "),
        Span::styled(region.label, Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled(
            format!(": int[{}]", region.elements.len()),
            Style::default().fg(DEFAULT_THEME.type_name),
        ),
        Span::styled(
            format!(" @ 0x{:x}", region.base_address()),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ])));

    if region.elements.is_empty() {
        all_items.push(
            ListItem::new("    (empty)").style(Style::default().fg(DEFAULT_THEME.comment)),
        );
    }

    for element in &region.elements {
        all_items.push(ListItem::new(Line::from(vec![
            Span::styled(
                format!("    [{}] ", element.index),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                format!("{:>4}", element.value),
                Style::default().fg(DEFAULT_THEME.number),
            ),
            Span::styled(
                format!("  0x{:x}", element.address),
                Style::default().fg(DEFAULT_THEME.primary),
            ),
        ])));
    }

    let list = List::new(visible_items(all_items, area, scroll_offset)).block(block);
    frame.render_widget(list, area);
}
