use anyhow::Result;
use owo_colors::OwoColorize;

use super::AppStore;
use crate::utils::prompt;

pub fn run(store: &mut AppStore, force: bool) -> Result<()> {
    if !force {
        let confirmed = prompt::confirm(&format!(
            "Delete all data in {} and reload the sample data?",
            store.backend().dir().display()
        ))?;
        if !confirmed {
            println!("{}", "Reset cancelled".dimmed());
            return Ok(());
        }
    }

    store.reset();
    println!(
        "{}",
        format!(
            "Reset done: {} appointments, {} employees, {} services",
            store.appointments().len(),
            store.employees().len(),
            store.services().len()
        )
        .green()
    );

    Ok(())
}
