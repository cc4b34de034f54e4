//! Help footer listing the main key bindings

use pomo_app::KeyMap;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const SEPARATOR: &str = " • ";

/// One-line "key desc • key desc" footer
pub struct HelpBar<'a> {
    keymap: &'a KeyMap,
}

impl<'a> HelpBar<'a> {
    pub fn new(keymap: &'a KeyMap) -> Self {
        Self { keymap }
    }

    fn line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, binding) in self.keymap.short_help().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, styles::help_separator()));
            }
            spans.push(Span::styled(binding.help_key(), styles::help_key()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(binding.help_desc(), styles::help_desc()));
        }
        Line::from(spans)
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        Paragraph::new(self.line()).centered().render(area, buf);
    }
}
