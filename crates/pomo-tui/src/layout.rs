//! Screen layout for the timer view
//!
//! The help footer owns the bottom row. The remaining body is filled with the
//! richest stack of sections that fits, centered vertically. As the terminal
//! shrinks, sections are dropped in a fixed order: big title (replaced by a
//! one-line title), title, spacing, big clock (replaced by a one-line clock),
//! progress bar, phase label.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Rows used by block-font text (clock and title)
pub const BIG_TEXT_HEIGHT: u16 = 5;

/// Screen areas for the timer view. Absent sections did not fit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenAreas {
    pub title: Option<Rect>,
    /// Whether `title` is tall enough for the block font
    pub big_title: bool,
    pub clock: Option<Rect>,
    /// Whether `clock` is tall enough for big digits
    pub big_clock: bool,
    pub phase: Option<Rect>,
    pub progress: Option<Rect>,
    pub help: Option<Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    BigTitle,
    Title,
    Gap,
    BigClock,
    Clock,
    Phase,
    Progress,
}

impl Slot {
    fn height(self) -> u16 {
        match self {
            Slot::BigTitle | Slot::BigClock => BIG_TEXT_HEIGHT,
            _ => 1,
        }
    }
}

/// Create the timer screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `show_title` - Whether the title banner is wanted
/// * `big_title_width` - Columns needed for the block-font title
/// * `big_clock_width` - Columns needed for the block-font clock
pub fn create(
    area: Rect,
    show_title: bool,
    big_title_width: u16,
    big_clock_width: u16,
) -> ScreenAreas {
    if area.width == 0 || area.height == 0 {
        return ScreenAreas::default();
    }

    // Footer only when something else still fits above it
    let (body, help) = if area.height >= 2 {
        let [body, help] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
        (body, Some(help))
    } else {
        (area, None)
    };

    let big_fits = body.width >= big_clock_width;
    let big_title_fits = show_title && big_fits && body.width >= big_title_width;
    let slots = candidates(show_title, big_title_fits, big_fits)
        .into_iter()
        .find(|slots| slots.iter().map(|s| s.height()).sum::<u16>() <= body.height)
        .unwrap_or_default();

    let chunks = Layout::vertical(slots.iter().map(|s| Constraint::Length(s.height())))
        .flex(Flex::Center)
        .split(body);

    let mut areas = ScreenAreas {
        help,
        ..ScreenAreas::default()
    };
    for (slot, rect) in slots.iter().zip(chunks.iter()) {
        match slot {
            Slot::BigTitle => {
                areas.title = Some(*rect);
                areas.big_title = true;
            }
            Slot::Title => areas.title = Some(*rect),
            Slot::BigClock => {
                areas.clock = Some(*rect);
                areas.big_clock = true;
            }
            Slot::Clock => areas.clock = Some(*rect),
            Slot::Phase => areas.phase = Some(*rect),
            Slot::Progress => areas.progress = Some(*rect),
            Slot::Gap => {}
        }
    }
    areas
}

/// Section stacks from richest to leanest
fn candidates(show_title: bool, big_title_fits: bool, big_fits: bool) -> Vec<Vec<Slot>> {
    use Slot::*;

    let mut out = Vec::new();
    if big_title_fits {
        out.push(vec![BigTitle, Gap, BigClock, Gap, Phase, Gap, Progress]);
    }
    if big_fits {
        if show_title {
            out.push(vec![Title, Gap, BigClock, Gap, Phase, Gap, Progress]);
        }
        out.push(vec![BigClock, Gap, Phase, Gap, Progress]);
        out.push(vec![BigClock, Phase, Progress]);
    }
    if show_title {
        out.push(vec![Title, Gap, Clock, Phase, Gap, Progress]);
    }
    out.push(vec![Clock, Phase, Gap, Progress]);
    out.push(vec![Clock, Phase, Progress]);
    out.push(vec![Clock, Phase]);
    out.push(vec![Clock]);
    out
}
