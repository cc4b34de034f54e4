//! Main render/view function (View in TEA pattern)


use pomo_app::cycle::LONG_REST_EVERY;
use pomo_app::state::AppState;
use pomo_core::Phase;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::styles;
use crate::widgets::big_text::big_width;
use crate::widgets::modal_overlay;

pub const TITLE: &str = "POMODOGO";

/// Render the complete UI (View function in TEA)
///
/// Pure function of the state and the frame size; nothing is mutated.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let phase = state.current_phase();
    let running = state.timer.is_running();
    frame.render_widget(Block::default().style(styles::screen(phase, running)), area);

    let clock_text = state.timer.display();
    let areas = layout::create(
        area,
        state.show_title,
        big_width(TITLE),
        big_width(&clock_text),
    );

    if let Some(title_area) = areas.title {
        frame.render_widget(
            widgets::BigText::new(TITLE)
                .big(areas.big_title)
                .style(styles::title()),
            title_area,
        );
    }

    if let Some(clock_area) = areas.clock {
        frame.render_widget(
            widgets::BigText::new(&clock_text)
                .big(areas.big_clock)
                .style(styles::clock()),
            clock_area,
        );
    }

    if let Some(phase_area) = areas.phase {
        frame.render_widget(
            Paragraph::new(Line::styled(phase_line(state), styles::phase_label())).centered(),
            phase_area,
        );
    }

    if let Some(progress_area) = areas.progress {
        frame.render_widget(widgets::ProgressBar::new(state.timer.progress()), progress_area);
    }

    if let Some(help_area) = areas.help {
        frame.render_widget(widgets::HelpBar::new(&state.keymap), help_area);
    }

    if let Some(dialog) = state.settings_dialog() {
        modal_overlay::fill_backdrop(frame.buffer_mut(), area);
        frame.render_widget(widgets::SettingsDialog::new(dialog), area);
    }
}

/// "Work 2/4 · 1 done" style status under the clock
pub fn phase_line(state: &AppState) -> String {
    let cycle = &state.cycle;
    let status = if state.timer.is_running() {
        ""
    } else {
        " (paused)"
    };
    match cycle.phase {
        Phase::Work => format!(
            "{} {}/{}{} · {} done",
            Phase::Work.label(),
            cycle.set_position(),
            LONG_REST_EVERY,
            status,
            cycle.work_count
        ),
        rest => format!("{}{} · {} done", rest.label(), status, cycle.work_count),
    }
}
