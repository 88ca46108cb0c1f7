//! Single-line text field rendering shared by every form.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::domain::text_input_state::TextInputState;

use super::styles;

/// Prompt symbol shown before the input text.
const PROMPT_SYMBOL: &str = "> ";

pub struct TextField<'a> {
    pub title: &'a str,
    pub input: &'a TextInputState,
    pub focused: bool,
    pub placeholder: &'a str,
    /// Replaces the shown text, e.g. a masked password.
    pub display: Option<String>,
}

pub fn render_text_field(frame: &mut Frame<'_>, area: Rect, field: TextField<'_>) {
    let border_style = if field.focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let shown = field
        .display
        .clone()
        .unwrap_or_else(|| field.input.text().to_owned());
    let line = build_input_line(&shown, field.placeholder, field.focused);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(field.title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);

    if field.focused {
        let offset = cursor_offset(&shown, field.input.cursor_position());
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(PROMPT_SYMBOL.len() as u16)
            .saturating_add(u16::try_from(offset).unwrap_or(u16::MAX));
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Terminal cells between the prompt and the cursor.
fn cursor_offset(shown: &str, cursor_chars: usize) -> usize {
    let before: String = shown.chars().take(cursor_chars).collect();
    before.width()
}

fn build_input_line(shown: &str, placeholder: &str, focused: bool) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style());

    if shown.is_empty() && !focused {
        Line::from(vec![
            prompt,
            Span::styled(placeholder.to_owned(), styles::input_placeholder_style()),
        ])
    } else {
        Line::from(vec![
            prompt,
            Span::styled(shown.to_owned(), styles::input_text_style()),
        ])
    }
}
