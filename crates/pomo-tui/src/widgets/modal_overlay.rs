//! Shared modal overlay utilities.
//!
//! Centering, backdrop fill and drop shadow for the settings dialog.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Character used to fill the backdrop behind a modal
pub const BACKDROP_CHAR: &str = "·";

/// Center a fixed-size rect within an area.
///
/// If the requested size exceeds the area, clamps to the area dimensions.
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use pomo_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// assert_eq!(centered_rect(60, 13, area), Rect::new(10, 5, 60, 13));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Replace everything in `area` with a dim dotted backdrop.
///
/// The timer screen underneath is hidden entirely while a modal is open.
pub fn fill_backdrop(buf: &mut Buffer, area: Rect) {
    let style = Style::default()
        .fg(palette::BACKDROP_FG)
        .bg(palette::BACKDROP_BG);

    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.reset();
                cell.set_symbol(BACKDROP_CHAR).set_style(style);
            }
        }
    }
}

/// Render a 1-cell shadow offset to the right and bottom of a modal rect.
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);

    // Right edge
    let right_x = modal_rect.right();
    for y in modal_rect.y.saturating_add(1)..modal_rect.bottom().saturating_add(1) {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ').set_style(shadow_style);
        }
    }

    // Bottom edge
    let bottom_y = modal_rect.bottom();
    for x in modal_rect.x.saturating_add(1)..modal_rect.right().saturating_add(1) {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ').set_style(shadow_style);
        }
    }
}

/// Reset a rect before drawing modal content into it
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_within_area() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let result = centered_rect(60, 13, area);
        assert_eq!(result, Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn test_centered_rect_with_offset_area() {
        let area = Rect::new(10, 5, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(30, 12, 40, 10));
    }

    #[test]
    fn test_fill_backdrop_covers_area() {
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        fill_backdrop(&mut buf, area);
        for y in 0..5 {
            for x in 0..10 {
                let cell = &buf[(x, y)];
                assert_eq!(cell.symbol(), BACKDROP_CHAR);
                assert_eq!(cell.fg, palette::BACKDROP_FG);
                assert_eq!(cell.bg, palette::BACKDROP_BG);
            }
        }
    }

    #[test]
    fn test_fill_backdrop_replaces_content() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::with_lines(["abcd"]);
        fill_backdrop(&mut buf, area);
        assert_eq!(buf[(0, 0)].symbol(), BACKDROP_CHAR);
    }

    #[test]
    fn test_fill_backdrop_outside_buffer_is_ignored() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 5));
        fill_backdrop(&mut buf, Rect::new(3, 3, 10, 10));
        assert_eq!(buf[(4, 4)].symbol(), BACKDROP_CHAR);
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }

    #[test]
    fn test_render_shadow_offset() {
        let area = Rect::new(0, 0, 20, 10);
        let modal = Rect::new(5, 2, 10, 6);
        let mut buf = Buffer::empty(area);
        render_shadow(&mut buf, modal);

        let right_shadow = &buf[(15, 3)];
        assert_eq!(right_shadow.bg, palette::SHADOW);
        assert_eq!(right_shadow.symbol(), " ");

        let bottom_shadow = &buf[(6, 8)];
        assert_eq!(bottom_shadow.bg, palette::SHADOW);
    }

    #[test]
    fn test_render_shadow_no_overflow() {
        let area = Rect::new(0, 0, 10, 10);
        let mut buf = Buffer::empty(area);
        render_shadow(&mut buf, Rect::new(8, 8, 2, 2));
    }

    #[test]
    fn test_clear_area() {
        let mut buf = Buffer::with_lines(["XXXXX", "XXXXX"]);
        clear_area(&mut buf, Rect::new(1, 0, 3, 2));
        assert_eq!(buf[(0, 0)].symbol(), "X");
        assert_eq!(buf[(1, 0)].symbol(), " ");
        assert_eq!(buf[(3, 1)].symbol(), " ");
        assert_eq!(buf[(4, 1)].symbol(), "X");
    }
}
