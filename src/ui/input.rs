use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::api::DogApi;
use crate::ui::app::{App, Tab};

pub fn handle_key<A: DogApi>(app: &mut App<A>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.breed_picker().is_visible() {
        handle_picker_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Tab | KeyCode::BackTab => app.switch_tab(),
        KeyCode::Char('1') => app.set_tab(Tab::Gallery),
        KeyCode::Char('2') => app.set_tab(Tab::Favorites),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-10),
        KeyCode::PageDown => app.move_selection(10),
        KeyCode::Char('y') => app.copy_selected_url(),
        _ => match app.tab() {
            Tab::Gallery => handle_gallery_key(app, key),
            Tab::Favorites => handle_favorites_key(app, key),
        },
    }
}

fn handle_gallery_key<A: DogApi>(app: &mut App<A>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('b') | KeyCode::Char('/') => app.open_breed_picker(),
        KeyCode::Char('r') => app.fetch_random_images(),
        KeyCode::Enter | KeyCode::Char('f') | KeyCode::Char(' ') => app.toggle_selected_favorite(),
        _ => {}
    }
}

fn handle_favorites_key<A: DogApi>(app: &mut App<A>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Enter | KeyCode::Char('f') => {
            app.remove_selected_favorite()
        }
        _ => {}
    }
}

fn handle_picker_key<A: DogApi>(app: &mut App<A>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_breed_picker(),
        KeyCode::Enter => app.confirm_breed_picker(),
        KeyCode::Up => app.picker_move(-1),
        KeyCode::Down => app.picker_move(1),
        KeyCode::Backspace => app.picker_backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.picker_input(ch)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
