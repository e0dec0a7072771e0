//! Drag-and-drop placement checks for the weekly calendar.

use std::fmt;

use chrono::NaiveDate;

use crate::appointment::Appointment;
use crate::constants::DAYS_PER_WEEK;
use crate::projection::{CalendarEntry, Week, entry_for};
use crate::status::AppointmentStatus;
use crate::time::format_hour;

/// Finished and terminated appointments stay where they are.
pub fn is_draggable(status: AppointmentStatus) -> bool {
    !status.is_terminal()
}

/// Whether two half-open hour intervals share any time. Touching ends do not.
pub fn overlaps(start: f64, end: f64, other_start: f64, other_end: f64) -> bool {
    !(end <= other_start || start >= other_end)
}

/// Why a drop was refused.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectReason {
    NotFound(u32),
    NotDraggable(AppointmentStatus),
    InvalidDay(u8),
    /// No start time or weekday could be worked out for the appointment
    NotPlaced,
    OutsideBusinessHours,
    /// Collides with the appointment with this id
    Overlaps(u32),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RejectReason::NotFound(id) => write!(f, "appointment #{} not found", id),
            RejectReason::NotDraggable(status) => {
                write!(f, "{} appointments cannot be moved", status)
            }
            RejectReason::InvalidDay(day) => write!(f, "day {} is outside the week", day),
            RejectReason::NotPlaced => write!(f, "appointment has no calendar placement"),
            RejectReason::OutsideBusinessHours => write!(f, "outside business hours"),
            RejectReason::Overlaps(id) => write!(f, "overlaps appointment #{}", id),
        }
    }
}

/// Calendar fields written back after a legal drop.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub day: u8,
    pub start_hour: f64,
    pub date: NaiveDate,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    Moved(Placement),
    Rejected(RejectReason),
}

/// Check a candidate placement against business hours and the other entries of that day.
pub fn check_fit(
    candidate: &CalendarEntry,
    target_day: u8,
    target_hour: f64,
    same_day: &[CalendarEntry],
    open_hour: f64,
    close_hour: f64,
) -> Result<(), RejectReason> {
    let end = target_hour + candidate.duration;

    if target_hour < open_hour || end > close_hour {
        return Err(RejectReason::OutsideBusinessHours);
    }

    let collision = same_day
        .iter()
        .filter(|other| other.id != candidate.id && other.day == target_day)
        .find(|other| overlaps(target_hour, end, other.start_hour, other.end_hour()));

    match collision {
        Some(other) => Err(RejectReason::Overlaps(other.id)),
        None => Ok(()),
    }
}

/// Whether `candidate` can be placed at (`target_day`, `target_hour`).
pub fn fits(
    candidate: &CalendarEntry,
    target_day: u8,
    target_hour: f64,
    same_day: &[CalendarEntry],
    open_hour: f64,
    close_hour: f64,
) -> bool {
    check_fit(candidate, target_day, target_hour, same_day, open_hour, close_hour).is_ok()
}

/// Work out the result of dropping appointment `id` on a calendar slot.
///
/// Every non-cancelled appointment shown on `week` takes part in the
/// collision check, regardless of any filters applied to the view.
pub fn plan_drop(
    id: u32,
    target_day: u8,
    target_hour: f64,
    appointments: &[Appointment],
    week: &Week,
    (open_hour, close_hour): (f64, f64),
) -> DropOutcome {
    let Some(appointment) = appointments.iter().find(|a| a.id == id) else {
        return DropOutcome::Rejected(RejectReason::NotFound(id));
    };

    if !is_draggable(appointment.status) {
        return DropOutcome::Rejected(RejectReason::NotDraggable(appointment.status));
    }
    if target_day >= DAYS_PER_WEEK {
        return DropOutcome::Rejected(RejectReason::InvalidDay(target_day));
    }

    let Some(candidate) = entry_for(appointment, week) else {
        return DropOutcome::Rejected(RejectReason::NotPlaced);
    };

    let same_day: Vec<CalendarEntry> = appointments
        .iter()
        .filter_map(|a| entry_for(a, week))
        .filter(|e| e.day == target_day)
        .collect();

    if let Err(reason) = check_fit(
        &candidate,
        target_day,
        target_hour,
        &same_day,
        open_hour,
        close_hour,
    ) {
        return DropOutcome::Rejected(reason);
    }

    DropOutcome::Moved(Placement {
        day: target_day,
        start_hour: target_hour,
        date: week.date_for(target_day),
        time: format_hour(target_hour),
    })
}
