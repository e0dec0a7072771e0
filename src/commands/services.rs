use anyhow::{Result, bail};
use estacion_core::service::categories;
use estacion_core::{NewService, ServicePatch};
use owo_colors::OwoColorize;

use super::AppStore;
use crate::ServiceCommand;
use crate::render::Render;

pub fn run(store: &mut AppStore, command: ServiceCommand) -> Result<()> {
    match command {
        ServiceCommand::List { category } => list(store, category.as_deref()),
        ServiceCommand::Add {
            name,
            category,
            description,
            duration,
            price,
            icon,
            color,
            popular,
        } => {
            let draft = NewService {
                name,
                category,
                description,
                duration,
                price,
                icon,
                color,
                popular,
            };
            let id = store.add_service(draft)?;
            if let Some(service) = store.service(id) {
                println!("{} {}", "Added".green(), service.render());
            }
            Ok(())
        }
        ServiceCommand::Edit {
            id,
            name,
            category,
            description,
            duration,
            price,
            icon,
            color,
            popular,
        } => {
            let patch = ServicePatch {
                name,
                category,
                description,
                duration,
                price,
                icon,
                color,
                popular,
            };
            if patch == ServicePatch::default() {
                bail!("Nothing to change. Pass at least one field flag, e.g. --price '$30'");
            }

            store.edit_service(id, patch)?;
            if let Some(service) = store.service(id) {
                println!("{} {}", "Updated".green(), service.render());
            }
            Ok(())
        }
        ServiceCommand::Delete { id } => {
            if store.delete_service(id) {
                println!("{}", format!("Deleted service #{}", id).green());
            } else {
                println!("{}", format!("Service #{} not found", id).dimmed());
            }
            Ok(())
        }
    }
}

fn list(store: &AppStore, category: Option<&str>) -> Result<()> {
    let services = store.services();

    if let Some(wanted) = category {
        let known = categories(services);
        if !known.iter().any(|c| c.eq_ignore_ascii_case(wanted)) {
            bail!(
                "Category '{}' not found. Available: {}",
                wanted,
                known.join(", ")
            );
        }
    }

    for name in categories(services) {
        if category.is_some_and(|wanted| !name.eq_ignore_ascii_case(wanted)) {
            continue;
        }

        println!("{}", name.bold());
        for service in services.iter().filter(|s| s.category == name) {
            println!("   {}", service.render());
        }
    }

    if services.is_empty() {
        println!("{}", "No services yet".dimmed());
    }

    Ok(())
}
