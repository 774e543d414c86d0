//! Terminal output pane rendering

use super::utils::{pane_block, visible_items};
use crate::snapshot::Transcript;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the captured report
pub fn render_terminal_pane(
    frame: &mut Frame,
    area: Rect,
    terminal: &Transcript,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Terminal Output ", is_focused);
    let lines = terminal.get_output();

    if lines.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
    } else {
        let block = block.padding(Padding::new(1, 0, 0, 0));
        let all_items: Vec<ListItem> = lines
            .into_iter()
            .map(|line| {
                // Tabs would be drawn as a single cell
                ListItem::new(line.replace('\t', "  ")).style(Style::default().fg(DEFAULT_THEME.fg))
            })
            .collect();

        let list = List::new(visible_items(all_items, area, scroll_offset)).block(block);
        frame.render_widget(list, area);
    }
}
