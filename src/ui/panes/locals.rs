//! Locals pane rendering
//!
//! Shows the demonstration's frame: a header with the function name, then one
//! row per local in declaration order with its address, type, name, value and
//! size. The selected row is highlighted and drives the bytes pane.

use super::utils::border_style;
use crate::formatting::format_literal;
use crate::memory::frame::Frame;
use crate::memory::value::Value;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame as TuiFrame,
};

/// Render the locals pane
pub fn render_locals_pane(
    frame: &mut TuiFrame,
    area: Rect,
    locals: &Frame,
    selected: usize,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Locals ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let header = Line::from(vec![
        Span::styled("▸ ", Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(
            format!("{}()", locals.function_name),
            Style::default()
                .fg(DEFAULT_THEME.function)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} bytes", locals.total_size()),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]);

    let mut items = vec![ListItem::new(header)];

    if locals.is_empty() {
        items.push(ListItem::new("(empty)").style(Style::default().fg(DEFAULT_THEME.comment)));
    }

    for (idx, (name, var)) in locals.locals().enumerate() {
        let value_style = match var.value {
            Value::Char(_) | Value::Str(_) => Style::default().fg(DEFAULT_THEME.string),
            _ => Style::default().fg(DEFAULT_THEME.number),
        };

        let line = Line::from(vec![
            Span::styled(
                format!("0x{:08x} ", var.address),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                format!("{} ", var.prim_type().keyword()),
                Style::default().fg(DEFAULT_THEME.type_name),
            ),
            Span::styled(name.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(format_literal(&var.value), value_style),
            Span::styled(
                format!("  ({} bytes)", var.size()),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]);

        let item = if idx == selected {
            ListItem::new(line).style(
                Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ListItem::new(line)
        };
        items.push(item);
    }

    // Keep the selected row visible; +1 for the header row
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let skip = (selected + 2).saturating_sub(visible_height);
    let visible: Vec<ListItem> = items.into_iter().skip(skip).take(visible_height).collect();

    frame.render_widget(List::new(visible).block(block), area);
}
