//! Appointment records.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::status::AppointmentStatus;
use crate::store::{Patch, Record};
use crate::time::hour_of_day;

/// A booked appointment.
///
/// Employee and service are stored by display name (a snapshot taken when
/// the appointment is booked) plus an optional id into the employee/service
/// collections. Renames cascade through the id; deletes clear it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: u32,
    pub client: String,
    #[serde(default)]
    pub email: String,
    pub service: String,
    pub employee: String,
    pub date: NaiveDate,
    /// Wall-clock start, `HH:MM`
    pub time: String,
    /// Free-form duration as entered ("1h", "45 min", "2 horas")
    pub duration: String,
    pub status: AppointmentStatus,
    /// Currency-formatted price ("$35")
    pub price: String,

    // Calendar placement
    /// Weekday column (0 = Monday) used when the date is outside the shown week
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_hour: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorTag>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<u32>,
}

impl Record for Appointment {
    const KIND: &'static str = "Appointment";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.client, self.service)
    }
}

/// Color tags shared by appointments, services and the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Teal,
    Marine,
    Amber,
    Emerald,
    Red,
    Slate,
}

impl ColorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Teal => "teal",
            ColorTag::Marine => "marine",
            ColorTag::Amber => "amber",
            ColorTag::Emerald => "emerald",
            ColorTag::Red => "red",
            ColorTag::Slate => "slate",
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColorTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "teal" => Ok(ColorTag::Teal),
            "marine" => Ok(ColorTag::Marine),
            "amber" => Ok(ColorTag::Amber),
            "emerald" => Ok(ColorTag::Emerald),
            "red" => Ok(ColorTag::Red),
            "slate" => Ok(ColorTag::Slate),
            other => Err(format!(
                "Unknown color '{}'. Expected teal, marine, amber, emerald, red or slate",
                other
            )),
        }
    }
}

/// A booking as entered in the "new appointment" form.
///
/// Everything is kept as text until it passes
/// [`validate_new_appointment`](crate::validate::validate_new_appointment).
#[derive(Debug, Clone, Default)]
pub struct NewAppointment {
    pub client: String,
    pub email: String,
    pub service: String,
    pub employee: String,
    pub date: String,
    pub time: String,
    /// Defaults to the service's duration, then to the configured slot length
    pub duration: Option<String>,
    /// Defaults to the service's price, then to "$0"
    pub price: Option<String>,
    pub status: Option<AppointmentStatus>,
}

/// Partial update for an appointment; `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentPatch {
    pub client: Option<String>,
    pub email: Option<String>,
    pub service: Option<String>,
    pub employee: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub duration: Option<String>,
    pub status: Option<AppointmentStatus>,
    pub price: Option<String>,
    pub day: Option<u8>,
    pub start_hour: Option<f64>,
    pub color: Option<ColorTag>,
}

impl AppointmentPatch {
    pub fn status(status: AppointmentStatus) -> Self {
        AppointmentPatch {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == AppointmentPatch::default()
    }
}

impl Patch<Appointment> for AppointmentPatch {
    fn apply(self, appointment: &mut Appointment) {
        if let Some(client) = self.client {
            appointment.client = client;
        }
        if let Some(email) = self.email {
            appointment.email = email;
        }
        if let Some(service) = self.service {
            appointment.service = service;
        }
        if let Some(employee) = self.employee {
            appointment.employee = employee;
        }
        // A new date or time moves the calendar placement with it, unless
        // the patch places the appointment itself.
        if let Some(date) = self.date {
            appointment.date = date;
            appointment.day = Some(date.weekday().num_days_from_monday() as u8);
        }
        if let Some(time) = self.time {
            appointment.start_hour = hour_of_day(&time);
            appointment.time = time;
        }
        if let Some(duration) = self.duration {
            appointment.duration = duration;
        }
        if let Some(status) = self.status {
            appointment.status = status;
        }
        if let Some(price) = self.price {
            appointment.price = price;
        }
        if let Some(day) = self.day {
            appointment.day = Some(day);
        }
        if let Some(start_hour) = self.start_hour {
            appointment.start_hour = Some(start_hour);
        }
        if let Some(color) = self.color {
            appointment.color = Some(color);
        }
    }
}
