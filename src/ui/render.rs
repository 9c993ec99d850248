use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear};
use ratatui::Frame;

use crate::api::DogApi;
use crate::ui::app::{App, Tab};
use crate::ui::breed_picker::{render_breed_picker, BreedSource};
use crate::ui::favorites::render_favorites;
use crate::ui::footer::Footer;
use crate::ui::gallery::render_gallery;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::GLOBAL_BORDER;
use crate::ui::toast::render_toast;

pub fn draw<A: DogApi>(frame: &mut Frame<'_>, app: &App<A>) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let store = app.store();

    let header_widget = Header::new(app.tab(), store.favorites().len(), store.breeds_status());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(body);
    frame.render_widget(block, body);
    render_body(frame, inner, app);

    let footer_widget = Footer::new(app.tab(), app.breed_picker().is_visible());
    frame.render_widget(footer_widget.widget(footer), footer);

    render_breed_picker(
        frame,
        app.breed_picker(),
        BreedSource {
            breeds: store.all_breeds(),
            status: store.breeds_status(),
            error: store.breeds_error(),
        },
        app.animation_tick(),
    );
    render_toast(frame, area, app.toast());
}

fn render_body<A: DogApi>(frame: &mut Frame<'_>, area: Rect, app: &App<A>) {
    match app.tab() {
        Tab::Gallery => render_gallery(frame, area, app),
        Tab::Favorites => render_favorites(frame, area, app),
    }
}
