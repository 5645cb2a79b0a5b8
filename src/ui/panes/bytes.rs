//! Bytes pane rendering with a hex dump of the selected local

use super::utils::{ascii_column, border_style, hex_dump_lines, BYTES_PER_ROW};
use crate::memory::frame::LocalVar;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the bytes pane for one local
pub fn render_bytes_pane(
    frame: &mut Frame,
    area: Rect,
    selected: Option<(&str, &LocalVar)>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Bytes ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let Some((name, var)) = selected else {
        let paragraph = Paragraph::new("(nothing selected)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let data = var.value.to_le_bytes();
    let prim = var.prim_type();

    let mut items = vec![ListItem::new(Line::from(vec![
        Span::styled(
            format!("{} ", prim.keyword()),
            Style::default().fg(DEFAULT_THEME.type_name),
        ),
        Span::styled(
            name.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  sizeof = {}", var.size()),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]))];

    if !prim.is_fixed_width() {
        // The header is what sizeof counts; the dump below is the text itself
        items.push(ListItem::new(Span::styled(
            format!("{} bytes of text, stored outside the header", data.len()),
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    for (row, line) in hex_dump_lines(var.address, &data).into_iter().enumerate() {
        let start = row * BYTES_PER_ROW;
        let end = (start + BYTES_PER_ROW).min(data.len());
        let padding = " ".repeat((BYTES_PER_ROW - (end - start)) * 3);
        items.push(ListItem::new(Line::from(vec![
            Span::styled(line, Style::default().fg(DEFAULT_THEME.number)),
            Span::raw(padding),
            Span::styled(
                format!("  |{}|", ascii_column(&data[start..end])),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ])));
    }

    let total_items = items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible: Vec<ListItem> = items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible).block(block), area);
}
