//! Calendar projection of stored appointments.
//!
//! Everything here is a pure function of the stored records and the week
//! being displayed; entries are rebuilt on every call and never written back.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate};

use crate::appointment::{Appointment, ColorTag};
use crate::constants::DAYS_PER_WEEK;
use crate::status::AppointmentStatus;
use crate::time::hour_of_day;

/// A Monday-based week, possibly shifted from the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    start: NaiveDate,
}

impl Week {
    /// The week containing `today`, moved by `offset` weeks (negative = past).
    pub fn containing(today: NaiveDate, offset: i64) -> Self {
        let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
        Week {
            start: monday + Duration::weeks(offset),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day (Sunday) of the week.
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(i64::from(DAYS_PER_WEEK) - 1)
    }

    pub fn date_for(&self, day: u8) -> NaiveDate {
        self.start + Duration::days(i64::from(day))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end()
    }

    /// Weekday column of `date`, if it falls inside this week.
    pub fn day_of(&self, date: NaiveDate) -> Option<u8> {
        if self.contains(date) {
            Some((date - self.start).num_days() as u8)
        } else {
            None
        }
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..DAYS_PER_WEEK).map(move |d| self.date_for(d))
    }
}

/// User-selected calendar filters.
#[derive(Debug, Clone, Default)]
pub struct CalendarFilter {
    /// Statuses to show; empty shows every status
    pub statuses: HashSet<AppointmentStatus>,
    /// Case-insensitive substring matched against client, service, employee and email
    pub query: String,
}

impl CalendarFilter {
    pub fn matches(&self, appointment: &Appointment) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(&appointment.status) {
            return false;
        }

        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        [
            &appointment.client,
            &appointment.service,
            &appointment.employee,
            &appointment.email,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
    }
}

/// An appointment placed on the weekly grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEntry {
    pub id: u32,
    pub client: String,
    pub service: String,
    pub employee: String,
    pub status: AppointmentStatus,
    /// Weekday column (0 = Monday)
    pub day: u8,
    pub start_hour: f64,
    /// Length in hours
    pub duration: f64,
    pub color: ColorTag,
}

impl CalendarEntry {
    pub fn end_hour(&self) -> f64 {
        self.start_hour + self.duration
    }
}

/// Convert a free-form duration string to hours.
///
/// Checks run in a fixed order and the first match wins, so "2 horas" is one
/// hour: "hora" -> 1.0, "min" -> number / 60, "1.5" -> 1.5, "2" -> 2.0, else
/// the leading number, else 1.0.
pub fn duration_hours(duration: &str) -> f64 {
    let lower = duration.to_lowercase();

    if lower.contains("hora") {
        return 1.0;
    }
    if lower.contains("min") {
        return first_number(&lower).map(|m| m / 60.0).unwrap_or(1.0);
    }
    if lower.contains("1.5") {
        return 1.5;
    }
    if lower.contains('2') {
        return 2.0;
    }

    leading_number(&lower).unwrap_or(1.0)
}

/// First decimal number anywhere in the string.
fn first_number(s: &str) -> Option<f64> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    leading_number(&s[start..])
}

/// Decimal number at the start of the string ("3h" -> 3.0).
fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let mut end = 0;
    let mut seen_dot = false;

    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() {
            end = i + 1;
        } else if c == '.' && !seen_dot {
            seen_dot = true;
        } else {
            break;
        }
    }

    if end == 0 {
        return None;
    }
    s[..end].parse().ok()
}

/// Display color: no-shows red, completed emerald, otherwise the stored tag.
pub fn display_color(appointment: &Appointment) -> ColorTag {
    match appointment.status {
        AppointmentStatus::NoShow => ColorTag::Red,
        AppointmentStatus::Completed => ColorTag::Emerald,
        _ => appointment.color.unwrap_or(ColorTag::Teal),
    }
}

/// Start of the appointment as a fractional hour.
pub fn start_hour(appointment: &Appointment) -> Option<f64> {
    appointment
        .start_hour
        .or_else(|| hour_of_day(&appointment.time))
}

/// Place a single appointment on `week`, ignoring filters.
///
/// Returns `None` for cancelled appointments and for ones with no usable
/// start time or weekday.
pub fn entry_for(appointment: &Appointment, week: &Week) -> Option<CalendarEntry> {
    if appointment.status == AppointmentStatus::Cancelled {
        return None;
    }

    let day = week.day_of(appointment.date).or(appointment.day)?;
    if day >= DAYS_PER_WEEK {
        return None;
    }

    Some(CalendarEntry {
        id: appointment.id,
        client: appointment.client.clone(),
        service: appointment.service.clone(),
        employee: appointment.employee.clone(),
        status: appointment.status,
        day,
        start_hour: start_hour(appointment)?,
        duration: duration_hours(&appointment.duration),
        color: display_color(appointment),
    })
}

/// Build the calendar entries for `week`.
pub fn project(appointments: &[Appointment], filter: &CalendarFilter, week: &Week) -> Vec<CalendarEntry> {
    appointments
        .iter()
        .filter(|a| a.status != AppointmentStatus::Cancelled)
        .filter(|a| filter.matches(a))
        .filter_map(|a| entry_for(a, week))
        .collect()
}
