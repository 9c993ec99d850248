use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::api::Breed;
use crate::store::LoadStatus;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR};
use crate::ui::widgets::spinner;

use super::state::{picker_entries, BreedPickerState, PickerEntry};

const POPUP_WIDTH: u16 = 48;
const POPUP_HEIGHT: u16 = 20;

/// Everything the popup needs from the breed slice.
pub struct BreedSource<'a> {
    pub breeds: &'a [Breed],
    pub status: LoadStatus,
    pub error: Option<&'a str>,
}

pub fn render_breed_picker(
    frame: &mut Frame,
    state: &BreedPickerState,
    source: BreedSource<'_>,
    animation_tick: u8,
) {
    if !state.is_visible() {
        return;
    }

    let area = centered_rect_by_size(POPUP_WIDTH, POPUP_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Choose a breed ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [search_area, list_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .areas(inner);

    let search = Line::from(vec![
        Span::styled(" Search: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(state.query().to_string(), Style::default().fg(HEADER_TEXT)),
        Span::styled("▏", Style::default().fg(ACCENT)),
    ]);
    frame.render_widget(Paragraph::new(search), search_area);

    match source.status {
        LoadStatus::Idle | LoadStatus::Loading => {
            let line = Line::from(vec![
                Span::styled(format!(" {} ", spinner(animation_tick)), Style::default().fg(ACCENT)),
                Span::styled("Loading breeds...", Style::default().fg(MUTED_TEXT)),
            ]);
            frame.render_widget(Paragraph::new(line), list_area);
            return;
        }
        LoadStatus::Failed => {
            let message = source.error.unwrap_or("unknown error");
            let line = Line::from(Span::styled(
                format!(" ⚠ Failed to load breeds: {}", message),
                Style::default().fg(STATUS_ERROR),
            ));
            frame.render_widget(Paragraph::new(line), list_area);
            return;
        }
        LoadStatus::Succeeded => {}
    }

    let entries = picker_entries(source.breeds, state.query());
    if entries.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " No matching breeds",
                Style::default().fg(MUTED_TEXT),
            ))),
            list_area,
        );
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| match entry {
            PickerEntry::AllBreeds => ListItem::new(Line::from(Span::styled(
                " All breeds (random)",
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
            ))),
            PickerEntry::Breed(breed) => ListItem::new(Line::from(Span::styled(
                format!(" {}", breed.name),
                Style::default().fg(HEADER_TEXT),
            ))),
        })
        .collect();

    let list = List::new(items).highlight_style(
        Style::default()
            .bg(ACTIVE_HIGHLIGHT)
            .fg(ACCENT)
            .add_modifier(Modifier::BOLD),
    );
    let mut list_state = ListState::default().with_selected(Some(state.selected()));
    frame.render_stateful_widget(list, list_area, &mut list_state);
}
