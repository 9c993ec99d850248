//! Small rendering helpers shared by the views.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::api::DogImage;
use crate::ui::theme::{FAVORITE, HEADER_TEXT, MUTED_TEXT};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(animation_tick: u8) -> &'static str {
    SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()]
}

/// Truncate to `max_chars` characters, marking the cut with "...".
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// One list row: heart, id, dimensions, breed name and URL.
pub fn image_line(image: &DogImage, is_favorite: bool, width: u16) -> Line<'static> {
    let heart = if is_favorite { "♥" } else { "♡" };
    let dimensions = image
        .dimensions()
        .map(|(w, h)| format!("{}x{}", w, h))
        .unwrap_or_else(|| "-".to_string());
    let breed = image.breed_name().unwrap_or("-");
    let prefix = format!(
        " {:<12} {:>9}  {:<20} ",
        truncate(&image.id.to_string(), 12),
        dimensions,
        truncate(breed, 20)
    );
    let used = prefix.chars().count() + 3;
    let url_width = (width as usize).saturating_sub(used).max(8);

    Line::from(vec![
        Span::styled(format!(" {}", heart), Style::default().fg(FAVORITE)),
        Span::styled(prefix, Style::default().fg(HEADER_TEXT)),
        Span::styled(truncate(&image.url, url_width), Style::default().fg(MUTED_TEXT)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_line_marks_favorites() {
        let image = DogImage::new("abc", "https://cdn2.thedogapi.com/images/abc.jpg");
        let text: String = image_line(&image, true, 120)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert!(text.starts_with(" ♥"));
        assert!(text.contains("abc"));
        assert!(text.ends_with("abc.jpg"));
    }

    #[test]
    fn spinner_wraps() {
        assert_eq!(spinner(0), spinner(10));
    }

    #[test]
    fn truncate_works() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(
            truncate("this is a very long error message", 15),
            "this is a ve..."
        );
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("♥♥♥♥♥", 5), "♥♥♥♥♥");
        assert_eq!(truncate("♥♥♥♥♥♥", 5), "♥♥...");
    }
}
