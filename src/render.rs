//! Colored terminal rendering for estacion-core types.
//!
//! Extension traits that turn core records into owo_colors strings.

use estacion_core::appointment::ColorTag;
use estacion_core::projection::{CalendarEntry, Week};
use estacion_core::schedule::RejectReason;
use estacion_core::settings::Settings;
use estacion_core::stats::DailyStats;
use estacion_core::time::format_hour;
use estacion_core::{
    Appointment, AppointmentStatus, Employee, EmployeeStatus, Notification, NotificationKind,
    Service,
};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Paint `text` in the terminal color closest to the tag.
pub fn paint(color: ColorTag, text: &str) -> String {
    match color {
        ColorTag::Teal => text.cyan().to_string(),
        ColorTag::Marine => text.blue().to_string(),
        ColorTag::Amber => text.yellow().to_string(),
        ColorTag::Emerald => text.green().to_string(),
        ColorTag::Red => text.red().to_string(),
        ColorTag::Slate => text.dimmed().to_string(),
    }
}

impl Render for AppointmentStatus {
    fn render(&self) -> String {
        let label = self.as_str();
        match self {
            AppointmentStatus::Pending => label.yellow().to_string(),
            AppointmentStatus::Confirmed => label.cyan().to_string(),
            AppointmentStatus::InProgress => label.blue().to_string(),
            AppointmentStatus::Completed => label.green().to_string(),
            AppointmentStatus::Cancelled => label.red().to_string(),
            AppointmentStatus::NoShow => label.dimmed().to_string(),
        }
    }
}

impl Render for Appointment {
    fn render(&self) -> String {
        let when = format!("{} {}", self.date.format("%Y-%m-%d"), self.time);
        format!(
            "{} {} {} · {} {} {} {}",
            format!("#{:<3}", self.id).dimmed(),
            when,
            self.client.bold(),
            self.service,
            format!("with {}", self.employee).dimmed(),
            format!("({}, {})", self.duration, self.price).dimmed(),
            self.status.render()
        )
    }
}

impl Render for CalendarEntry {
    fn render(&self) -> String {
        let span = format!(
            "{}–{}",
            format_hour(self.start_hour),
            format_hour(self.end_hour())
        );
        format!(
            "{} {} {} {} {}",
            paint(self.color, &span),
            self.client.bold(),
            paint(self.color, &self.service),
            format!("[{}]", self.employee).dimmed(),
            format!("#{}", self.id).dimmed()
        )
    }
}

impl Render for Employee {
    fn render(&self) -> String {
        let status = match self.status {
            EmployeeStatus::Active => self.status.as_str().green().to_string(),
            EmployeeStatus::Inactive => self.status.as_str().dimmed().to_string(),
        };
        let mut line = format!(
            "{} ({}) {} {} {}",
            format!("#{:<3}", self.id).dimmed(),
            self.avatar,
            self.name.bold(),
            self.role.dimmed(),
            status
        );
        line.push_str(&format!("\n      {} · {}", self.email, self.phone));
        line.push_str(&format!(
            "\n      ★ {:.1}  {} today",
            self.rating, self.appointments_today
        ));
        if !self.specialties.is_empty() {
            line.push_str(&format!(" · {}", self.specialties.join(", ").dimmed()));
        }
        line
    }
}

impl Render for Service {
    fn render(&self) -> String {
        let popular = if self.popular {
            format!(" {}", "★ popular".yellow())
        } else {
            String::new()
        };
        let mut line = format!(
            "{} {} {} {}{}",
            format!("#{:<3}", self.id).dimmed(),
            paint(self.color, &self.name),
            format!("{} · {}", self.duration, self.price).dimmed(),
            format!("[{}]", self.category).dimmed(),
            popular
        );
        if !self.description.is_empty() {
            line.push_str(&format!("\n      {}", self.description.dimmed()));
        }
        line
    }
}

impl Render for NotificationKind {
    fn render(&self) -> String {
        let label = format!("{:<11}", self.as_str());
        match self {
            NotificationKind::Appointment => label.cyan().to_string(),
            NotificationKind::Payment | NotificationKind::Success => label.green().to_string(),
            NotificationKind::User | NotificationKind::Info => label.blue().to_string(),
            NotificationKind::Alert => label.red().to_string(),
        }
    }
}

impl Render for Notification {
    fn render(&self) -> String {
        let marker = if self.read {
            " ".to_string()
        } else {
            "●".cyan().to_string()
        };
        let title = if self.read {
            self.title.clone()
        } else {
            self.title.bold().to_string()
        };
        format!(
            "{} {} {} {} {}\n      {}",
            marker,
            format!("#{:<3}", self.id).dimmed(),
            self.kind.render(),
            title,
            self.time.dimmed(),
            self.message
        )
    }
}

impl Render for RejectReason {
    fn render(&self) -> String {
        format!("Can't move here: {}", self).red().to_string()
    }
}

fn on_off(flag: bool) -> String {
    if flag {
        "on".green().to_string()
    } else {
        "off".dimmed().to_string()
    }
}

impl Render for Settings {
    fn render(&self) -> String {
        let rows = [
            ("Business", self.business_name.bold().to_string()),
            ("Email", self.business_email.clone()),
            ("Phone", self.business_phone.clone()),
            ("Address", self.business_address.clone()),
            (
                "Hours",
                format!("{} – {}", self.open_time, self.close_time),
            ),
            ("Slot", format!("{} min", self.slot_duration_minutes)),
            ("Email notifications", on_off(self.notifications.email_enabled)),
            ("Push notifications", on_off(self.notifications.push_enabled)),
            ("Reminders", on_off(self.notifications.reminders_enabled)),
            (
                "Weekly summary",
                on_off(self.notifications.weekly_summary_enabled),
            ),
            ("Theme", self.appearance.theme.as_str().to_string()),
            ("Two-factor", on_off(self.security.two_factor_enabled)),
        ];

        rows.iter()
            .map(|(label, value)| format!("{:>20}  {}", label.dimmed(), value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Render for DailyStats {
    fn render(&self) -> String {
        let mut lines = vec![
            format!("{}", self.date.format("%A %d %B %Y").bold()),
            format!("{:>18}  {}", "Appointments".dimmed(), self.appointments),
            format!("{:>18}  {}", "Active employees".dimmed(), self.active_employees),
            format!("{:>18}  ${:.2}", "Revenue".dimmed(), self.revenue),
            format!(
                "{:>18}  {:.0}%",
                "Completion".dimmed(),
                self.completion_rate * 100.0
            ),
        ];

        lines.push(String::new());
        if self.agenda.is_empty() {
            lines.push("   Nothing booked".dimmed().to_string());
        } else {
            for appointment in &self.agenda {
                lines.push(format!("   {}", appointment.render()));
            }
        }
        lines.join("\n")
    }
}

/// "Week of 10 – 16 Nov 2025", collapsing the month/year when shared.
pub fn week_label(week: &Week) -> String {
    let start = week.start();
    let end = week.end();

    if start.format("%Y").to_string() != end.format("%Y").to_string() {
        format!(
            "Week of {} – {}",
            start.format("%-d %b %Y"),
            end.format("%-d %b %Y")
        )
    } else if start.format("%m").to_string() != end.format("%m").to_string() {
        format!("Week of {} – {}", start.format("%-d %b"), end.format("%-d %b %Y"))
    } else {
        format!("Week of {} – {}", start.format("%-d"), end.format("%-d %b %Y"))
    }
}

/// Day-by-day listing of a projected week.
pub fn render_week(week: &Week, entries: &[CalendarEntry]) -> String {
    let mut lines = vec![week_label(week).bold().to_string()];

    for (day, date) in week.days().enumerate() {
        let mut day_entries: Vec<&CalendarEntry> =
            entries.iter().filter(|e| usize::from(e.day) == day).collect();
        day_entries.sort_by(|a, b| a.start_hour.total_cmp(&b.start_hour));

        lines.push(String::new());
        lines.push(format!("{}", date.format("%a %d").to_string().bold()));
        if day_entries.is_empty() {
            lines.push("   –".dimmed().to_string());
        }
        for entry in day_entries {
            lines.push(format!("   {}", entry.render()));
        }
    }

    lines.join("\n")
}
