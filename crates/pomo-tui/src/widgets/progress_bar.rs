//! Horizontal progress bar showing the fraction of the interval remaining

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// Progress bar at half the width of its area, centered, with a percentage
pub struct ProgressBar {
    ratio: f64,
}

impl ProgressBar {
    /// `ratio` is clamped to `[0.0, 1.0]`; NaN counts as 0
    pub fn new(ratio: f64) -> Self {
        let ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        Self { ratio }
    }
}

/// Filled cells for `ratio` of a `width`-cell bar, rounded to nearest
pub fn filled_cells(ratio: f64, width: u16) -> u16 {
    ((ratio * f64::from(width)).round() as u16).min(width)
}

/// Whole percent, rounded down so 100% only shows for a fresh interval
pub fn percent(ratio: f64) -> u8 {
    (ratio * 100.0).floor().clamp(0.0, 100.0) as u8
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label = format!(" {:>3}%", percent(self.ratio));
        let bar_width = area.width / 2;
        if bar_width == 0 {
            return;
        }

        // Drop the percentage before squeezing the bar
        let show_label = bar_width + label.len() as u16 <= area.width;
        let total = if show_label {
            bar_width + label.len() as u16
        } else {
            bar_width
        };

        let filled = filled_cells(self.ratio, bar_width);
        let mut spans = vec![
            Span::styled(FILLED.repeat(filled as usize), styles::progress_filled()),
            Span::styled(
                EMPTY.repeat((bar_width - filled) as usize),
                styles::progress_empty(),
            ),
        ];
        if show_label {
            spans.push(Span::styled(label, styles::phase_label()));
        }

        let x = area.x + (area.width - total) / 2;
        let row = Rect::new(x, area.y, total, 1);
        Line::from(spans).render(row, buf);
    }
}
