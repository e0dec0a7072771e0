use anyhow::{Result, bail};
use estacion_core::validate::parse_specialties;
use estacion_core::{EmployeePatch, EmployeeStatus, NewEmployee};
use owo_colors::OwoColorize;

use super::AppStore;
use crate::EmployeeCommand;
use crate::render::Render;

pub fn run(store: &mut AppStore, command: EmployeeCommand) -> Result<()> {
    match command {
        EmployeeCommand::List => {
            if store.employees().is_empty() {
                println!("{}", "No employees yet".dimmed());
            }
            for employee in store.employees() {
                println!("{}", employee.render());
            }
            Ok(())
        }
        EmployeeCommand::Add {
            name,
            role,
            email,
            phone,
            specialties,
            rating,
            avatar,
            inactive,
        } => {
            let draft = NewEmployee {
                name,
                role,
                email,
                phone,
                specialties,
                rating,
                appointments_today: None,
                avatar,
                status: if inactive {
                    EmployeeStatus::Inactive
                } else {
                    EmployeeStatus::Active
                },
            };
            let id = store.add_employee(draft)?;
            if let Some(employee) = store.employee(id) {
                println!("{} {}", "Added".green(), employee.render());
            }
            Ok(())
        }
        EmployeeCommand::Edit {
            id,
            name,
            role,
            email,
            phone,
            specialties,
            rating,
            avatar,
            status,
        } => {
            let patch = EmployeePatch {
                name,
                role,
                email,
                phone,
                specialties: specialties.as_deref().map(parse_specialties),
                rating,
                appointments_today: None,
                avatar,
                status,
            };
            if patch == EmployeePatch::default() {
                bail!("Nothing to change. Pass at least one field flag, e.g. --role Estilista");
            }

            store.edit_employee(id, patch)?;
            if let Some(employee) = store.employee(id) {
                println!("{} {}", "Updated".green(), employee.render());
            }
            Ok(())
        }
        EmployeeCommand::Delete { id } => {
            if store.delete_employee(id) {
                println!("{}", format!("Deleted employee #{}", id).green());
            } else {
                println!("{}", format!("Employee #{} not found", id).dimmed());
            }
            Ok(())
        }
    }
}
