//! Gallery tab: breed line, load status and the current image list.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::api::DogApi;
use crate::store::LoadStatus;
use crate::ui::app::{App, ShownBreed};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};
use crate::ui::widgets::{image_line, spinner, truncate};

pub fn render_gallery<A: DogApi>(frame: &mut Frame, area: Rect, app: &App<A>) {
    let [breed_area, status_area, list_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

    frame.render_widget(Paragraph::new(breed_lines(app, area.width)), breed_area);

    let store = app.store();
    let status = match store.images_status() {
        LoadStatus::Loading => Some(Line::from(vec![
            Span::styled(format!(" {} ", spinner(app.animation_tick())), Style::default().fg(ACCENT)),
            Span::styled("Loading images...", Style::default().fg(MUTED_TEXT)),
        ])),
        // a stale error from an earlier failure is only shown while failed
        LoadStatus::Failed => Some(Line::from(Span::styled(
            format!(
                " Failed to load images: {}",
                store.images_error().unwrap_or("unknown error")
            ),
            Style::default().fg(STATUS_ERROR),
        ))),
        LoadStatus::Succeeded if store.images().is_empty() => Some(Line::from(Span::styled(
            " No images.",
            Style::default().fg(MUTED_TEXT),
        ))),
        LoadStatus::Succeeded => Some(Line::from(Span::styled(
            format!(" {} images", store.images().len()),
            Style::default().fg(MUTED_TEXT),
        ))),
        LoadStatus::Idle => None,
    };
    if let Some(status) = status {
        frame.render_widget(Paragraph::new(status), status_area);
    }

    let items: Vec<ListItem> = store
        .images()
        .iter()
        .map(|image| {
            ListItem::new(image_line(
                image,
                store.is_favorite(&image.id),
                list_area.width.saturating_sub(2),
            ))
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        );
    let mut state = ListState::default();
    if !store.images().is_empty() {
        state.select(Some(app.gallery_selection()));
    }
    frame.render_stateful_widget(list, list_area, &mut state);
}

/// Labels the images on screen, which under `latest_settled` may differ
/// from the breed last chosen.
fn breed_lines<A: DogApi>(app: &App<A>, width: u16) -> Vec<Line<'static>> {
    let label = Style::default().fg(MUTED_TEXT);
    let breed = match app.shown_breed() {
        Some(ShownBreed::Known(breed)) => breed,
        Some(ShownBreed::Unlisted(id)) => {
            return vec![Line::from(vec![
                Span::styled(" Breed: ", label),
                Span::styled(format!("id {}", id), Style::default().fg(ACCENT)),
            ])];
        }
        None => {
            return vec![Line::from(vec![
                Span::styled(" Breed: ", label),
                Span::styled("All breeds", Style::default().fg(HEADER_TEXT)),
                Span::styled("  (b to choose)", label),
            ])];
        }
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(" Breed: ", label),
        Span::styled(
            breed.name.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            breed
                .detail("life_span")
                .map(|life| format!("  ·  {}", life))
                .unwrap_or_default(),
            label,
        ),
    ])];
    if let Some(temperament) = breed.detail("temperament") {
        lines.push(Line::from(Span::styled(
            format!(" {}", truncate(temperament, width.saturating_sub(2) as usize)),
            label,
        )));
    }
    lines
}
