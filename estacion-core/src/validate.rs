//! Form validation for settings and new records.

use chrono::NaiveDate;

use crate::appointment::{AppointmentPatch, NewAppointment};
use crate::employee::{EmployeePatch, NewEmployee};
use crate::error::{EstacionError, EstacionResult};
use crate::service::{NewService, ServicePatch};
use crate::settings::Settings;
use crate::time::{parse_date, parse_hhmm};

fn require(fields: &[(&str, &str)]) -> EstacionResult<()> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(EstacionError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// Like [`require`], but only for the fields a patch actually sets.
fn require_if_set(fields: &[(&str, Option<&String>)]) -> EstacionResult<()> {
    let present: Vec<(&str, &str)> = fields
        .iter()
        .filter_map(|(name, value)| value.map(|v| (*name, v.as_str())))
        .collect();
    require(&present)
}

fn check_time(time: &str) -> EstacionResult<()> {
    if parse_hhmm(time).is_none() {
        return Err(EstacionError::Validation(format!(
            "Invalid time '{}'. Expected HH:MM",
            time
        )));
    }
    Ok(())
}

/// Check settings before they are saved.
pub fn validate_settings(settings: &Settings) -> EstacionResult<()> {
    if settings.business_name.trim().is_empty() {
        return Err(EstacionError::Validation(
            "Business name cannot be empty".into(),
        ));
    }

    let open = parse_hhmm(&settings.open_time).ok_or_else(|| {
        EstacionError::Validation(format!(
            "Invalid opening time '{}'. Expected HH:MM",
            settings.open_time
        ))
    })?;
    let close = parse_hhmm(&settings.close_time).ok_or_else(|| {
        EstacionError::Validation(format!(
            "Invalid closing time '{}'. Expected HH:MM",
            settings.close_time
        ))
    })?;

    if open >= close {
        return Err(EstacionError::Validation(format!(
            "Opening time {} must be before closing time {}",
            settings.open_time, settings.close_time
        )));
    }

    if settings.slot_duration_minutes <= 0 {
        return Err(EstacionError::Validation(
            "Slot duration must be greater than zero".into(),
        ));
    }

    Ok(())
}

/// Check a new booking and return its parsed date.
pub fn validate_new_appointment(draft: &NewAppointment) -> EstacionResult<NaiveDate> {
    require(&[
        ("client", draft.client.as_str()),
        ("service", draft.service.as_str()),
        ("employee", draft.employee.as_str()),
        ("date", draft.date.as_str()),
        ("time", draft.time.as_str()),
    ])?;

    let date = parse_date(&draft.date)?;
    check_time(&draft.time)?;

    Ok(date)
}

/// Fields required on a booking may be changed but not blanked.
pub fn validate_appointment_patch(patch: &AppointmentPatch) -> EstacionResult<()> {
    require_if_set(&[
        ("client", patch.client.as_ref()),
        ("service", patch.service.as_ref()),
        ("employee", patch.employee.as_ref()),
        ("time", patch.time.as_ref()),
    ])?;

    if let Some(time) = &patch.time {
        check_time(time)?;
    }
    Ok(())
}

pub fn validate_new_employee(draft: &NewEmployee) -> EstacionResult<()> {
    require(&[
        ("name", draft.name.as_str()),
        ("role", draft.role.as_str()),
        ("email", draft.email.as_str()),
    ])
}

pub fn validate_new_service(draft: &NewService) -> EstacionResult<()> {
    require(&[
        ("name", draft.name.as_str()),
        ("category", draft.category.as_str()),
        ("duration", draft.duration.as_str()),
        ("price", draft.price.as_str()),
    ])
}

pub fn validate_employee_patch(patch: &EmployeePatch) -> EstacionResult<()> {
    require_if_set(&[
        ("name", patch.name.as_ref()),
        ("role", patch.role.as_ref()),
        ("email", patch.email.as_ref()),
    ])
}

pub fn validate_service_patch(patch: &ServicePatch) -> EstacionResult<()> {
    require_if_set(&[
        ("name", patch.name.as_ref()),
        ("category", patch.category.as_ref()),
        ("duration", patch.duration.as_ref()),
        ("price", patch.price.as_ref()),
    ])
}

/// Split a comma-separated tag list, dropping blanks.
pub fn parse_specialties(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_draft() -> NewAppointment {
        NewAppointment {
            client: "Andrés Silva".to_string(),
            service: "Masaje Relajante".to_string(),
            employee: "Pedro López".to_string(),
            date: "2025-11-15".to_string(),
            time: "15:00".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn rejects_inverted_hours() {
        let mut settings = Settings::default();
        settings.open_time = "09:00".to_string();
        settings.close_time = "08:00".to_string();
        assert!(validate_settings(&settings).is_err());

        settings.close_time = "09:00".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn rejects_non_positive_slot() {
        let mut settings = Settings::default();
        settings.slot_duration_minutes = 0;
        assert!(validate_settings(&settings).is_err());

        settings.slot_duration_minutes = -15;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn rejects_blank_business_name_and_bad_times() {
        let mut settings = Settings::default();
        settings.business_name = "   ".to_string();
        assert!(validate_settings(&settings).is_err());

        let mut settings = Settings::default();
        settings.open_time = "nine".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn new_appointment_lists_missing_fields() {
        let mut draft = make_test_draft();
        draft.client = String::new();
        draft.time = " ".to_string();

        match validate_new_appointment(&draft) {
            Err(EstacionError::Validation(msg)) => {
                assert!(msg.contains("client"), "{}", msg);
                assert!(msg.contains("time"), "{}", msg);
                assert!(!msg.contains("service"), "{}", msg);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn new_appointment_parses_date_and_time() {
        let date = validate_new_appointment(&make_test_draft()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 11, 15).unwrap());

        let mut draft = make_test_draft();
        draft.time = "3pm".to_string();
        assert!(validate_new_appointment(&draft).is_err());
    }

    #[test]
    fn employee_and_service_required_fields() {
        let employee = NewEmployee {
            name: "Lucía".to_string(),
            role: "Estilista".to_string(),
            ..Default::default()
        };
        assert!(validate_new_employee(&employee).is_err());

        let service = NewService {
            name: "Facial".to_string(),
            category: "Estética".to_string(),
            duration: "1 hora".to_string(),
            price: "$40".to_string(),
            ..Default::default()
        };
        assert!(validate_new_service(&service).is_ok());
    }

    #[test]
    fn patches_may_not_blank_required_fields() {
        let blank_client = AppointmentPatch {
            client: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(validate_appointment_patch(&blank_client).is_err());

        let bad_time = AppointmentPatch {
            time: Some("17h".to_string()),
            ..Default::default()
        };
        assert!(validate_appointment_patch(&bad_time).is_err());

        // Email is optional on a booking
        let cleared_email = AppointmentPatch {
            email: Some(String::new()),
            time: Some("17:00".to_string()),
            ..Default::default()
        };
        assert!(validate_appointment_patch(&cleared_email).is_ok());

        let blank_role = EmployeePatch {
            role: Some(String::new()),
            ..Default::default()
        };
        assert!(validate_employee_patch(&blank_role).is_err());
        assert!(validate_employee_patch(&EmployeePatch::default()).is_ok());

        let blank_price = ServicePatch {
            price: Some(String::new()),
            ..Default::default()
        };
        assert!(validate_service_patch(&blank_price).is_err());
    }

    #[test]
    fn specialties_drop_blanks() {
        assert_eq!(
            parse_specialties(" Corte, ,Peinado ,"),
            vec!["Corte".to_string(), "Peinado".to_string()]
        );
        assert!(parse_specialties("").is_empty());
    }
}
