use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Number of bytes shown per hex dump row
pub(crate) const BYTES_PER_ROW: usize = 8;

/// Border style for a pane, highlighted when focused
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Hex dump rows of the form `0x00000004: 04 00 00 00`
pub fn hex_dump_lines(base_address: u64, data: &[u8]) -> Vec<String> {
    data.chunks(BYTES_PER_ROW)
        .enumerate()
        .map(|(row, chunk)| {
            let addr = base_address + (row * BYTES_PER_ROW) as u64;
            let hex: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
            format!("0x{:08x}: {}", addr, hex.join(" "))
        })
        .collect()
}

/// Printable ASCII rendering of a byte slice, `.` for everything else
pub(crate) fn ascii_column(data: &[u8]) -> String {
    data.iter()
        .map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        })
        .collect()
}
