//! Favorites tab.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::api::DogApi;
use crate::ui::app::App;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, MUTED_TEXT};
use crate::ui::widgets::image_line;

pub fn render_favorites<A: DogApi>(frame: &mut Frame, area: Rect, app: &App<A>) {
    let favorites = app.store().favorites();
    if favorites.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " Your favorites list is empty.",
                Style::default().fg(MUTED_TEXT),
            ))),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = favorites
        .iter()
        .map(|image| ListItem::new(image_line(image, true, area.width)))
        .collect();
    let list = List::new(items).highlight_style(
        Style::default()
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD),
    );
    let mut state = ListState::default().with_selected(Some(app.favorites_selection()));
    frame.render_stateful_widget(list, area, &mut state);
}
