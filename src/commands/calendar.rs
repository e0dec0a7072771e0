use anyhow::Result;
use chrono::Local;
use estacion_core::AppointmentStatus;
use estacion_core::projection::{CalendarFilter, Week, project};
use estacion_core::schedule::DropOutcome;
use estacion_core::time::format_hour;
use owo_colors::OwoColorize;

use super::AppStore;
use crate::render::{Render, render_week};

fn current_week(offset: i64) -> Week {
    Week::containing(Local::now().date_naive(), offset)
}

pub fn run(
    store: &AppStore,
    week_offset: i64,
    statuses: Vec<AppointmentStatus>,
    query: Option<String>,
) -> Result<()> {
    let week = current_week(week_offset);
    let filter = CalendarFilter {
        statuses: statuses.into_iter().collect(),
        query: query.unwrap_or_default(),
    };

    let entries = project(store.appointments(), &filter, &week);
    println!("{}", render_week(&week, &entries));

    let settings = store.settings();
    println!();
    println!(
        "{}",
        format!(
            "Open {} – {} · {} shown",
            settings.open_time,
            settings.close_time,
            entries.len()
        )
        .dimmed()
    );

    Ok(())
}

pub fn move_appointment(
    store: &mut AppStore,
    id: u32,
    day: u8,
    hour: f64,
    week_offset: i64,
) -> Result<()> {
    let week = current_week(week_offset);

    match store.move_appointment(id, day, hour, &week) {
        DropOutcome::Moved(placement) => {
            println!(
                "{} #{} to {} at {}",
                "Moved".green(),
                id,
                placement.date.format("%a %d %b"),
                format_hour(placement.start_hour)
            );
        }
        DropOutcome::Rejected(reason) => {
            println!("{}", reason.render());
        }
    }

    Ok(())
}
