//! Settings dialog widget
//!
//! Centered modal with three minute fields. The backdrop is drawn by the
//! caller; this widget only draws the box, its shadow and its content.

use pomo_app::settings_dialog::{SettingsDialogState, SettingsField, TextField};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay;
use crate::theme::styles;

pub const DIALOG_TITLE: &str = "Configure Pomodoro Times";
pub const DIALOG_HELP: &str = "Tab / Shift+Tab = move • Enter = save • Esc = cancel";

/// Total size including border and padding
pub const DIALOG_WIDTH: u16 = 60;
pub const DIALOG_HEIGHT: u16 = 13;

/// Width of the "Short rest:" column
const LABEL_WIDTH: usize = 12;

pub struct SettingsDialog<'a> {
    state: &'a SettingsDialogState,
}

impl<'a> SettingsDialog<'a> {
    pub fn new(state: &'a SettingsDialogState) -> Self {
        Self { state }
    }

    fn field_line(&self, field: SettingsField) -> Line<'static> {
        let focused = self.state.focused_field() == field;
        let text = self.state.field(field);
        let style = styles::dialog_field(focused);

        let marker = if focused { "> " } else { "  " };
        let label = format!("{:<LABEL_WIDTH$}", format!("{}:", field.label()));

        let mut spans = vec![
            Span::styled(marker, style),
            Span::styled(label, style),
        ];
        spans.extend(value_spans(text, field, focused));
        spans.push(Span::styled(" min", style));
        Line::from(spans)
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::styled(DIALOG_TITLE, styles::dialog_title()),
            Line::default(),
        ];
        for field in SettingsField::ALL {
            lines.push(self.field_line(field));
            lines.push(Line::default());
        }
        lines.push(Line::styled(DIALOG_HELP, styles::dialog_help()));
        lines
    }
}

/// Field value with a cursor when focused; placeholder when empty
fn value_spans(text: &TextField, field: SettingsField, focused: bool) -> Vec<Span<'static>> {
    let style = styles::dialog_field(focused);
    match (text.is_empty(), focused) {
        (true, true) => vec![
            Span::styled(" ", styles::cursor()),
            Span::styled(field.placeholder(), styles::placeholder()),
        ],
        (true, false) => vec![Span::styled(field.placeholder(), styles::placeholder())],
        (false, true) => vec![
            Span::styled(text.value().to_string(), style),
            Span::styled(" ", styles::cursor()),
        ],
        (false, false) => vec![Span::styled(text.value().to_string(), style)],
    }
}

impl Widget for SettingsDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let modal = modal_overlay::centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        modal_overlay::render_shadow(buf, modal);
        modal_overlay::clear_area(buf, modal);

        let block = styles::dialog_block();
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }
        Paragraph::new(self.lines()).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use pomo_app::{Durations, InputKey};

    fn dialog() -> SettingsDialogState {
        SettingsDialogState::new(&Durations::default())
    }

    #[test]
    fn test_renders_title_fields_and_help() {
        let state = dialog();
        let mut term = TestTerminal::new();
        term.render_widget(SettingsDialog::new(&state), term.area());

        assert!(term.buffer_contains(DIALOG_TITLE));
        assert!(term.buffer_contains("Work:"));
        assert!(term.buffer_contains("Short rest:"));
        assert!(term.buffer_contains("Long rest:"));
        assert!(term.buffer_contains("25"));
        assert!(term.buffer_contains("15"));
        assert!(term.buffer_contains("min"));
        assert!(term.buffer_contains(DIALOG_HELP));
    }

    #[test]
    fn test_focused_field_has_marker() {
        let mut state = dialog();
        state.focus_next();
        let line = SettingsDialog::new(&state).field_line(SettingsField::ShortRest);
        assert_eq!(line.spans[0].content, "> ");

        let other = SettingsDialog::new(&state).field_line(SettingsField::Work);
        assert_eq!(other.spans[0].content, "  ");
    }

    #[test]
    fn test_empty_field_shows_placeholder() {
        let mut state = dialog();
        state.handle_key(&InputKey::CharCtrl('u'));

        let mut term = TestTerminal::new();
        term.render_widget(SettingsDialog::new(&state), term.area());
        assert!(term.buffer_contains("Work (minutes)"));
    }

    #[test]
    fn test_dialog_has_rounded_border() {
        let state = dialog();
        let mut term = TestTerminal::new();
        term.render_widget(SettingsDialog::new(&state), term.area());
        // 80x24 -> modal at (10, 5)
        assert_eq!(term.cell_at(10, 5), Some("╭"));
    }

    #[test]
    fn test_small_area_does_not_panic() {
        let state = dialog();
        let mut term = TestTerminal::with_size(10, 4);
        term.render_widget(SettingsDialog::new(&state), term.area());
        let mut term = TestTerminal::with_size(1, 1);
        term.render_widget(SettingsDialog::new(&state), term.area());
    }
}
