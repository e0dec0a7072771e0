use anyhow::Result;
use chrono::Local;
use estacion_core::stats::{daily, popular_services};
use estacion_core::time::parse_date;
use owo_colors::OwoColorize;

use super::AppStore;
use crate::render::Render;

pub fn run(store: &AppStore, date: Option<&str>) -> Result<()> {
    let date = match date {
        Some(d) => parse_date(d)?,
        None => Local::now().date_naive(),
    };

    let stats = daily(store.appointments(), store.employees(), date);
    println!("{}", stats.render());

    println!();
    println!(
        "{}",
        format!(
            "{} services in the catalog, {} popular",
            store.services().len(),
            popular_services(store.services())
        )
        .dimmed()
    );

    Ok(())
}
