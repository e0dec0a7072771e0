use anyhow::{Result, bail};
use clap::Args;
use estacion_core::SettingsPatch;
use estacion_core::settings::{AppearancePatch, NotificationsPatch, SecurityPatch, Theme};
use owo_colors::OwoColorize;

use super::AppStore;
use crate::SettingsCommand;
use crate::render::Render;
use crate::utils::parse::parse_bool;

#[derive(Args, Debug, Default)]
pub struct SetArgs {
    #[arg(long)]
    business_name: Option<String>,
    #[arg(long)]
    business_email: Option<String>,
    #[arg(long)]
    business_phone: Option<String>,
    #[arg(long)]
    business_address: Option<String>,
    /// Opening time, HH:MM
    #[arg(long)]
    open: Option<String>,
    /// Closing time, HH:MM
    #[arg(long)]
    close: Option<String>,
    /// Calendar slot length in minutes
    #[arg(long)]
    slot: Option<i64>,
    #[arg(long, value_parser = parse_bool)]
    email_notifications: Option<bool>,
    #[arg(long, value_parser = parse_bool)]
    push_notifications: Option<bool>,
    #[arg(long, value_parser = parse_bool)]
    reminders: Option<bool>,
    #[arg(long, value_parser = parse_bool)]
    weekly_summary: Option<bool>,
    /// light, dark or system
    #[arg(long)]
    theme: Option<Theme>,
    #[arg(long, value_parser = parse_bool)]
    two_factor: Option<bool>,
}

impl SetArgs {
    fn into_patch(self) -> SettingsPatch {
        let notifications = NotificationsPatch {
            email_enabled: self.email_notifications,
            push_enabled: self.push_notifications,
            reminders_enabled: self.reminders,
            weekly_summary_enabled: self.weekly_summary,
        };

        SettingsPatch {
            business_name: self.business_name,
            business_email: self.business_email,
            business_phone: self.business_phone,
            business_address: self.business_address,
            open_time: self.open,
            close_time: self.close,
            slot_duration_minutes: self.slot,
            notifications: (notifications != NotificationsPatch::default()).then_some(notifications),
            appearance: self.theme.map(|theme| AppearancePatch { theme: Some(theme) }),
            security: self.two_factor.map(|v| SecurityPatch {
                two_factor_enabled: Some(v),
            }),
        }
    }
}

pub fn run(store: &mut AppStore, command: SettingsCommand) -> Result<()> {
    match command {
        SettingsCommand::Show => {
            println!("{}", store.settings().render());
            Ok(())
        }
        SettingsCommand::Set(args) => {
            let patch = args.into_patch();
            if patch.is_empty() {
                bail!("Nothing to change. Pass at least one flag, e.g. --open 10:00");
            }

            store.update_settings(&patch)?;
            println!("{}", "Settings saved".green());
            println!("{}", store.settings().render());
            Ok(())
        }
    }
}
