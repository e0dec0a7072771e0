mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use estacion_core::config::AppConfig;
use estacion_core::persist::DirStore;
use estacion_core::{Action, AppointmentStatus, ColorTag, EmployeeStatus, Store};

use crate::utils::parse;

#[derive(Parser)]
#[command(name = "estacion")]
#[command(about = "Manage the salon's appointments, staff and services")]
struct Cli {
    /// Directory holding the data files (overrides data_dir in config.toml)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List, create and update appointments
    #[command(subcommand)]
    Appointments(AppointmentCommand),

    /// Show the weekly calendar
    Calendar {
        /// Weeks relative to the current one (-1 = last week)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        week: i64,

        /// Only show appointments with this status (repeatable)
        #[arg(short, long)]
        status: Vec<AppointmentStatus>,

        /// Match client, service, employee or email (case-insensitive)
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Move an appointment to another day and start time
    Move {
        id: u32,

        /// Weekday: 0-6 (Monday = 0) or a name like "mon"
        #[arg(long, value_parser = parse::parse_day)]
        day: u8,

        /// Start time as HH:MM or decimal hours ("10:30", "10.5")
        #[arg(long, value_parser = parse::parse_hour)]
        hour: f64,

        /// Weeks relative to the current one
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        week: i64,
    },

    /// Manage the team
    #[command(subcommand)]
    Employees(EmployeeCommand),

    /// Manage the service catalog
    #[command(subcommand)]
    Services(ServiceCommand),

    /// Show or change business settings
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Read and clear the notifications feed
    #[command(subcommand)]
    Notifications(NotificationCommand),

    /// Dashboard figures for a day
    Stats {
        /// Day to report on (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Drop all stored data and start again from the sample dataset
    Reset {
        /// Don't ask for confirmation
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum AppointmentCommand {
    List {
        /// Only show appointments with this status (repeatable)
        #[arg(short, long)]
        status: Vec<AppointmentStatus>,

        /// Match client, service, employee or email (case-insensitive)
        #[arg(short, long)]
        query: Option<String>,

        /// Only show appointments on this day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    Show {
        id: u32,
    },
    Add {
        #[arg(long)]
        client: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        service: Option<String>,
        #[arg(long)]
        employee: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
        /// HH:MM
        #[arg(long)]
        time: Option<String>,
        /// Defaults to the service's duration
        #[arg(long)]
        duration: Option<String>,
        /// Defaults to the service's price
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        status: Option<AppointmentStatus>,
    },
    Edit {
        id: u32,
        #[arg(long)]
        client: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        service: Option<String>,
        #[arg(long)]
        employee: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        duration: Option<String>,
        #[arg(long)]
        price: Option<String>,
    },
    Delete {
        id: u32,
    },
    /// Run a status action: confirm, start, complete, no-show or cancel
    Action {
        id: u32,
        action: Action,
    },
}

#[derive(Subcommand)]
pub enum EmployeeCommand {
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        role: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        /// Comma-separated, e.g. "Corte, Peinado"
        #[arg(long, default_value = "")]
        specialties: String,
        #[arg(long)]
        rating: Option<f64>,
        #[arg(long)]
        avatar: Option<String>,
        #[arg(long)]
        inactive: bool,
    },
    Edit {
        id: u32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        specialties: Option<String>,
        #[arg(long)]
        rating: Option<f64>,
        #[arg(long)]
        avatar: Option<String>,
        #[arg(long)]
        status: Option<EmployeeStatus>,
    },
    Delete {
        id: u32,
    },
}

#[derive(Subcommand)]
pub enum ServiceCommand {
    List {
        /// Only show services in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long, default_value = "")]
        description: String,
        /// e.g. "45 min" or "2 horas"
        #[arg(long)]
        duration: String,
        /// e.g. "$25"
        #[arg(long)]
        price: String,
        #[arg(long)]
        icon: Option<String>,
        #[arg(long)]
        color: Option<ColorTag>,
        #[arg(long)]
        popular: bool,
    },
    Edit {
        id: u32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        duration: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        icon: Option<String>,
        #[arg(long)]
        color: Option<ColorTag>,
        #[arg(long, value_parser = parse::parse_bool)]
        popular: Option<bool>,
    },
    Delete {
        id: u32,
    },
}

#[derive(Subcommand)]
pub enum NotificationCommand {
    List {
        /// Only show unread notifications
        #[arg(short, long)]
        unread: bool,
    },
    /// Mark one notification as read
    Read {
        id: u32,
    },
    /// Mark every notification as read
    ReadAll,
    Delete {
        id: u32,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    Show,
    Set(commands::settings::SetArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load config.toml")?;
    utils::logger::init(cli.verbose, config.log_level.as_deref());

    let data_dir = cli.data_dir.unwrap_or_else(|| config.data_path());
    tracing::debug!(data_dir = %data_dir.display(), "Opening store");
    let mut store = Store::load(DirStore::new(data_dir));

    match cli.command {
        Commands::Appointments(command) => commands::appointments::run(&mut store, command),
        Commands::Calendar {
            week,
            status,
            query,
        } => commands::calendar::run(&store, week, status, query),
        Commands::Move {
            id,
            day,
            hour,
            week,
        } => commands::calendar::move_appointment(&mut store, id, day, hour, week),
        Commands::Employees(command) => commands::employees::run(&mut store, command),
        Commands::Services(command) => commands::services::run(&mut store, command),
        Commands::Settings(command) => commands::settings::run(&mut store, command),
        Commands::Notifications(command) => commands::notifications::run(&mut store, command),
        Commands::Stats { date } => commands::stats::run(&store, date.as_deref()),
        Commands::Reset { force } => commands::reset::run(&mut store, force),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn query_help(path: &[&str]) -> String {
        let mut command = Cli::command();
        for name in path {
            command = command.find_subcommand(name).unwrap().clone();
        }
        let arg = command
            .get_arguments()
            .find(|a| a.get_id() == "query")
            .unwrap();
        arg.get_help().unwrap().to_string()
    }

    #[test]
    fn query_help_mentions_email() {
        assert!(query_help(&["calendar"]).contains("email"));
        assert!(query_help(&["appointments", "list"]).contains("email"));
    }

    #[test]
    fn parses_notification_commands() {
        let cli = Cli::try_parse_from(["estacion", "notifications", "list", "--unread"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Notifications(NotificationCommand::List { unread: true })
        ));

        let cli = Cli::try_parse_from(["estacion", "notifications", "read-all"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Notifications(NotificationCommand::ReadAll)
        ));

        let cli = Cli::try_parse_from(["estacion", "notifications", "delete", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Notifications(NotificationCommand::Delete { id: 3 })
        ));
    }
}
