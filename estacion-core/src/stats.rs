//! Dashboard figures.

use chrono::NaiveDate;

use crate::appointment::Appointment;
use crate::employee::{Employee, EmployeeStatus};
use crate::projection::start_hour;
use crate::service::Service;
use crate::status::AppointmentStatus;

/// Summary of one business day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyStats {
    pub date: NaiveDate,
    /// Appointments on the day, cancelled ones excluded
    pub appointments: usize,
    pub active_employees: usize,
    /// Sum of completed appointment prices
    pub revenue: f64,
    /// Completed / non-cancelled, 0.0 on an empty day
    pub completion_rate: f64,
    /// Non-cancelled appointments of the day ordered by start time
    pub agenda: Vec<Appointment>,
}

/// Numeric value of a currency string ("$12,450" -> 12450.0).
pub fn parse_price(price: &str) -> Option<f64> {
    let digits: String = price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}

pub fn daily(appointments: &[Appointment], employees: &[Employee], date: NaiveDate) -> DailyStats {
    let mut agenda: Vec<Appointment> = appointments
        .iter()
        .filter(|a| a.date == date && a.status != AppointmentStatus::Cancelled)
        .cloned()
        .collect();
    agenda.sort_by(|a, b| {
        let a_start = start_hour(a).unwrap_or(f64::MAX);
        let b_start = start_hour(b).unwrap_or(f64::MAX);
        a_start.total_cmp(&b_start)
    });

    let completed: Vec<&Appointment> = agenda
        .iter()
        .filter(|a| a.status == AppointmentStatus::Completed)
        .collect();
    let revenue: f64 = completed.iter().filter_map(|a| parse_price(&a.price)).sum();
    let completion_rate = if agenda.is_empty() {
        0.0
    } else {
        completed.len() as f64 / agenda.len() as f64
    };

    DailyStats {
        date,
        appointments: agenda.len(),
        active_employees: employees
            .iter()
            .filter(|e| e.status == EmployeeStatus::Active)
            .count(),
        revenue,
        completion_rate,
        agenda,
    }
}

pub fn popular_services(services: &[Service]) -> usize {
    services.iter().filter(|s| s.popular).count()
}
