// File: services/booking_demo/src/main.rs
mod render;

use booking_calendar::{BookingFlow, InMemoryBookingApi};
use booking_common::logging;
use booking_config::get_config;
use std::error::Error;
use tracing::warn;

// How far ahead to look for a month with bookable days.
const MONTHS_TO_SEARCH: usize = 12;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = get_config()?;
    logging::init_from_str(&config.logging.level);

    let api = InMemoryBookingApi::from_config(config)?;
    let mut flow = BookingFlow::from_config(api, config)?;

    flow.load_session().await?;
    flow.load_availabilities().await?;

    let mut searched = 0;
    while flow.state().available_dates().iter().all(|d| !flow.state().is_date_selectable(d)) {
        if searched == MONTHS_TO_SEARCH {
            warn!("No bookable day in the next {} months", MONTHS_TO_SEARCH);
            println!("{}", render::render_month(flow.state())?);
            return Ok(());
        }
        flow.next_month().await?;
        searched += 1;
    }

    if let Some(session) = flow.state().session_data() {
        println!(
            "{} with {} ({} min, {})\n",
            session.session_title, session.host.name, session.duration, session.meeting_platform
        );
    }

    let date = flow
        .state()
        .available_dates()
        .into_iter()
        .find(|d| flow.state().is_date_selectable(d));
    if let Some(date) = date {
        flow.select_date(date);
    }
    println!("{}", render::render_month(flow.state())?);

    if let Some(slot) = flow.state().time_slots_for_selected_date().first().cloned() {
        flow.select_time(&slot);
    }
    print!("{}", render::render_slots(flow.state()));
    println!(
        "\n{}\n{}\n",
        flow.state().formatted_selected_date(),
        flow.state().formatted_time_range()
    );

    let booking = logging::log_result(
        flow.confirm().await,
        "Booking confirmed",
        "Error confirming booking",
    )?;
    println!("Booking {} is {:?}", booking.id, booking.status);
    if let Some(link) = &booking.meeting_link {
        println!("Join at {}", link);
    }

    Ok(())
}
