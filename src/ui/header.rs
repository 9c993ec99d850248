use crate::store::LoadStatus;
use crate::ui::app::Tab;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    tab: Tab,
    favorites: usize,
    breeds_status: LoadStatus,
}

impl Header {
    pub fn new(tab: Tab, favorites: usize, breeds_status: LoadStatus) -> Self {
        Self {
            tab,
            favorites,
            breeds_status,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let tab_style = |active: bool| {
            if active {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(MUTED_TEXT)
            }
        };
        let (status_icon, status_style) = match self.breeds_status {
            LoadStatus::Succeeded => ("●", Style::default().fg(STATUS_OK)),
            LoadStatus::Failed => ("●", Style::default().fg(STATUS_ERROR)),
            LoadStatus::Idle | LoadStatus::Loading => ("○", Style::default().fg(MUTED_TEXT)),
        };

        let line = Line::from(vec![
            Span::styled("  🐾 ", text_style),
            Span::styled("Dog Gallery", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled("1 Gallery", tab_style(self.tab == Tab::Gallery)),
            Span::styled("   ", text_style),
            Span::styled(
                format!("2 Favorites ({})", self.favorites),
                tab_style(self.tab == Tab::Favorites),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(status_icon, status_style),
            Span::styled(format!(" breeds {}", self.breeds_status), Style::default().fg(MUTED_TEXT)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
