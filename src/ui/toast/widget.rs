use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::theme::{HEADER_TEXT, STATUS_ERROR, STATUS_OK};

use super::state::{ToastKind, ToastState};

const MAX_WIDTH: u16 = 40;

/// Render the toast in the top-right corner of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, state: &ToastState) {
    let (Some(kind), Some(message)) = (state.kind(), state.message()) else {
        return;
    };

    let (icon, color) = match kind {
        ToastKind::Success => ("✓", STATUS_OK),
        ToastKind::Error => ("✗", STATUS_ERROR),
    };

    let width = (message.chars().count() as u16 + 6)
        .min(MAX_WIDTH)
        .min(area.width);
    let height = 3.min(area.height);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1.min(area.height.saturating_sub(height)),
        width,
        height,
    };

    let line = Line::from(vec![
        Span::styled(format!(" {} ", icon), Style::default().fg(color)),
        Span::styled(message.to_string(), Style::default().fg(HEADER_TEXT)),
    ]);

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        ),
        rect,
    );
}
