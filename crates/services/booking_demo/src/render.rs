// Plain-text month view for the terminal.

use booking_calendar::date_utils::{calendar_rows, is_in_month, is_same_day};
use booking_calendar::{BookingState, CalendarError};
use chrono::Datelike;

const WEEKDAY_HEADER: &str = "  Su  Mo  Tu  We  Th  Fr  Sa";

/// Renders the month currently shown by `state`.
///
/// Selectable days are marked `*`, the selected day `[ ]`, today `.` and days
/// of neighbouring months are left blank.
pub fn render_month(state: &BookingState) -> Result<String, CalendarError> {
    let month = state.current_month();
    let today = state.clock().today();
    let grid = state.calendar_dates()?;

    let mut out = format!("{:^28}\n{}\n", state.formatted_current_month(), WEEKDAY_HEADER);
    for week in calendar_rows(&grid) {
        for day in week {
            let cell = if !is_in_month(&day, month.month0(), month.year()) {
                "    ".to_string()
            } else if state.is_date_selected(&day) {
                format!("[{:>2}]", day.day())
            } else if state.is_date_selectable(&day) {
                format!(" {:>2}*", day.day())
            } else if is_same_day(&day, &today) {
                format!(" {:>2}.", day.day())
            } else {
                format!(" {:>2} ", day.day())
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    Ok(out)
}

/// One line per slot of the selected date, the selected one marked.
pub fn render_slots(state: &BookingState) -> String {
    state
        .time_slots_for_selected_date()
        .iter()
        .map(|slot| {
            let marker = if state.is_time_selected(slot) { ">" } else { " " };
            format!("{} {}\n", marker, slot.time)
        })
        .collect()
}
