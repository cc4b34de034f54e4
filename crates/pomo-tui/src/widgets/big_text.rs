//! Block-font text widget for the countdown clock and the title banner
//!
//! Renders text in a 5-row block font when the area allows it, and as plain
//! centered text otherwise.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::layout::BIG_TEXT_HEIGHT;

/// Screen columns per font pixel
const PIXEL_WIDTH: u16 = 2;

/// Blank columns between glyphs
const GLYPH_GAP: u16 = 1;

const FILLED: &str = "█";

/// 3x5 pixel glyphs, `#` marks a filled pixel
fn glyph(c: char) -> Option<[&'static str; 5]> {
    let rows = match c {
        '0' => ["###", "# #", "# #", "# #", "###"],
        '1' => [" # ", "## ", " # ", " # ", "###"],
        '2' => ["###", "  #", "###", "#  ", "###"],
        '3' => ["###", "  #", " ##", "  #", "###"],
        '4' => ["# #", "# #", "###", "  #", "  #"],
        '5' => ["###", "#  ", "###", "  #", "###"],
        '6' => ["###", "#  ", "###", "# #", "###"],
        '7' => ["###", "  #", "  #", "  #", "  #"],
        '8' => ["###", "# #", "###", "# #", "###"],
        '9' => ["###", "# #", "###", "  #", "###"],
        ':' => [" ", "#", " ", "#", " "],
        'D' => ["## ", "# #", "# #", "# #", "## "],
        'G' => ["###", "#  ", "# #", "# #", "###"],
        'M' => ["# #", "###", "###", "# #", "# #"],
        'O' => ["###", "# #", "# #", "# #", "###"],
        'P' => ["###", "# #", "###", "#  ", "#  "],
        _ => return None,
    };
    Some(rows)
}

fn glyph_width(c: char) -> u16 {
    glyph(c).map_or(0, |rows| rows[0].len() as u16 * PIXEL_WIDTH)
}

/// Columns the block-font rendering of `text` needs
pub fn big_width(text: &str) -> u16 {
    let glyphs: u16 = text.chars().map(glyph_width).sum();
    let gaps = (text.chars().count() as u16).saturating_sub(1) * GLYPH_GAP;
    glyphs + gaps
}

/// Text in the block font, or plain when it does not fit
pub struct BigText<'a> {
    text: &'a str,
    big: bool,
    style: Style,
}

impl<'a> BigText<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            big: true,
            style: Style::default(),
        }
    }

    /// Request the block font; it is still skipped if the area is too small
    pub fn big(mut self, big: bool) -> Self {
        self.big = big;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for BigText<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = big_width(self.text);
        if self.big && area.height >= BIG_TEXT_HEIGHT && area.width >= width {
            render_big(self.text, width, self.style, area, buf);
        } else {
            Paragraph::new(Line::styled(self.text, self.style))
                .centered()
                .render(area, buf);
        }
    }
}

fn render_big(text: &str, width: u16, style: Style, area: Rect, buf: &mut Buffer) {
    let mut x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - BIG_TEXT_HEIGHT) / 2;

    for c in text.chars() {
        let Some(rows) = glyph(c) else {
            continue;
        };
        for (dy, row) in rows.iter().enumerate() {
            for (dx, pixel) in row.chars().enumerate() {
                if pixel != '#' {
                    continue;
                }
                let px = x + dx as u16 * PIXEL_WIDTH;
                for offset in 0..PIXEL_WIDTH {
                    if let Some(cell) = buf.cell_mut((px + offset, y + dy as u16)) {
                        cell.set_symbol(FILLED).set_style(style);
                    }
                }
            }
        }
        x += glyph_width(c) + GLYPH_GAP;
    }
}
