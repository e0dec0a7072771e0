use std::collections::HashSet;

use anyhow::{Result, bail};
use chrono::Local;
use estacion_core::projection::CalendarFilter;
use estacion_core::status::allowed_actions;
use estacion_core::time::{parse_date, parse_hhmm};
use estacion_core::{
    Action, AppointmentPatch, AppointmentStatus, EmployeeStatus, NewAppointment,
};
use owo_colors::OwoColorize;

use super::AppStore;
use crate::AppointmentCommand;
use crate::render::Render;
use crate::utils::prompt;

pub fn run(store: &mut AppStore, command: AppointmentCommand) -> Result<()> {
    match command {
        AppointmentCommand::List {
            status,
            query,
            date,
        } => list(store, status, query, date),
        AppointmentCommand::Show { id } => show(store, id),
        AppointmentCommand::Add {
            client,
            email,
            service,
            employee,
            date,
            time,
            duration,
            price,
            status,
        } => {
            let interactive = prompt::is_interactive()
                && [&client, &service, &employee, &date, &time]
                    .iter()
                    .any(|v| v.is_none());

            let services: Vec<String> = store.services().iter().map(|s| s.name.clone()).collect();
            let employees: Vec<String> = store
                .employees()
                .iter()
                .filter(|e| e.status == EmployeeStatus::Active)
                .map(|e| e.name.clone())
                .collect();
            let today = Local::now().date_naive().format("%Y-%m-%d").to_string();

            let draft = NewAppointment {
                client: prompt::text_or_prompt(client, "Client", "client")?,
                email: prompt::optional_or_prompt(email, "Email", interactive)?
                    .unwrap_or_default(),
                service: prompt::choice_or_prompt(service, "Service", "service", &services)?,
                employee: prompt::choice_or_prompt(employee, "Employee", "employee", &employees)?,
                date: prompt::checked_or_prompt(
                    date,
                    &format!("Date (YYYY-MM-DD, today is {})", today),
                    "date",
                    |s| parse_date(s).map(|_| ()).map_err(Into::into),
                )?,
                time: prompt::checked_or_prompt(time, "Time (HH:MM)", "time", check_time)?,
                duration,
                price,
                status,
            };

            add(store, draft, interactive)
        }
        AppointmentCommand::Edit {
            id,
            client,
            email,
            service,
            employee,
            date,
            time,
            duration,
            price,
        } => {
            if let Some(t) = &time {
                check_time(t)?;
            }
            let patch = AppointmentPatch {
                client,
                email,
                service,
                employee,
                date: date.as_deref().map(parse_date).transpose()?,
                time,
                duration,
                price,
                ..Default::default()
            };
            edit(store, id, patch)
        }
        AppointmentCommand::Delete { id } => delete(store, id),
        AppointmentCommand::Action { id, action } => act(store, id, action),
    }
}

fn check_time(s: &str) -> Result<()> {
    if parse_hhmm(s).is_none() {
        bail!("Invalid time '{}', expected HH:MM", s);
    }
    Ok(())
}

fn list(
    store: &AppStore,
    statuses: Vec<AppointmentStatus>,
    query: Option<String>,
    date: Option<String>,
) -> Result<()> {
    let filter = CalendarFilter {
        statuses: statuses.into_iter().collect::<HashSet<_>>(),
        query: query.unwrap_or_default(),
    };
    let date = date.as_deref().map(parse_date).transpose()?;

    let mut matching: Vec<_> = store
        .appointments()
        .iter()
        .filter(|a| filter.matches(a))
        .filter(|a| date.is_none_or(|d| a.date == d))
        .collect();
    matching.sort_by(|a, b| (a.date, &a.time).cmp(&(b.date, &b.time)));

    if matching.is_empty() {
        println!("{}", "No appointments found".dimmed());
        return Ok(());
    }

    for appointment in matching {
        println!("{}", appointment.render());
    }

    Ok(())
}

fn show(store: &AppStore, id: u32) -> Result<()> {
    let Some(appointment) = store.appointment(id) else {
        println!("{}", format!("Appointment #{} not found", id).dimmed());
        return Ok(());
    };

    println!("{}", appointment.render());
    if !appointment.email.is_empty() {
        println!("      {}", appointment.email.dimmed());
    }

    let actions: Vec<&str> = allowed_actions(appointment.status)
        .iter()
        .map(|a| a.as_str())
        .collect();
    if actions.is_empty() {
        println!("      {}", "No actions available".dimmed());
    } else {
        println!("      {} {}", "Actions:".dimmed(), actions.join(", "));
    }

    Ok(())
}

fn add(store: &mut AppStore, draft: NewAppointment, interactive: bool) -> Result<()> {
    let id = store.add_appointment(draft)?;

    if interactive {
        println!();
    }
    if let Some(appointment) = store.appointment(id) {
        println!("{} {}", "Booked".green(), appointment.render());
    }

    Ok(())
}

fn edit(store: &mut AppStore, id: u32, patch: AppointmentPatch) -> Result<()> {
    if patch.is_empty() {
        bail!("Nothing to change. Pass at least one field flag, e.g. --time 10:30");
    }

    store.edit_appointment(id, patch)?;

    if let Some(appointment) = store.appointment(id) {
        println!("{} {}", "Updated".green(), appointment.render());
    }

    Ok(())
}

fn delete(store: &mut AppStore, id: u32) -> Result<()> {
    if store.delete_appointment(id) {
        println!("{}", format!("Deleted appointment #{}", id).green());
    } else {
        println!("{}", format!("Appointment #{} not found", id).dimmed());
    }

    Ok(())
}

fn act(store: &mut AppStore, id: u32, action: Action) -> Result<()> {
    if action == Action::Edit {
        bail!("Use `estacion appointments edit {}` to change an appointment", id);
    }

    let status = store.apply_action(id, action)?;
    println!("#{} is now {}", id, status.render());

    Ok(())
}
