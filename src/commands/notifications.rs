use anyhow::Result;
use estacion_core::notification::visible;
use owo_colors::OwoColorize;

use super::AppStore;
use crate::NotificationCommand;
use crate::render::Render;

pub fn run(store: &mut AppStore, command: NotificationCommand) -> Result<()> {
    match command {
        NotificationCommand::List { unread } => {
            let unread_count = store.unread_notifications();
            if unread_count > 0 {
                println!("{}", format!("{} unread", unread_count).bold());
            } else {
                println!("{}", "No unread notifications".dimmed());
            }

            for notification in visible(store.notifications(), unread) {
                println!("{}", notification.render());
            }
        }
        NotificationCommand::Read { id } => {
            if store.mark_notification_read(id) {
                println!("{}", format!("Marked #{} as read", id).green());
            } else {
                println!("{}", format!("Notification #{} not found", id).dimmed());
            }
        }
        NotificationCommand::ReadAll => {
            let changed = store.mark_all_notifications_read();
            println!("{}", format!("Marked {} as read", changed).green());
        }
        NotificationCommand::Delete { id } => {
            if store.delete_notification(id) {
                println!("{}", format!("Deleted notification #{}", id).green());
            } else {
                println!("{}", format!("Notification #{} not found", id).dimmed());
            }
        }
    }

    Ok(())
}
