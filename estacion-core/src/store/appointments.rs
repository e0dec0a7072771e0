//! Appointment operations on the store.

use super::{Record, Store};
use crate::appointment::{Appointment, AppointmentPatch, ColorTag, NewAppointment};
use crate::constants::MIN_APPOINTMENT_MINUTES;
use crate::error::{EstacionError, EstacionResult};
use crate::persist::KeyValueStore;
use crate::projection::Week;
use crate::schedule::{DropOutcome, plan_drop};
use crate::status::{Action, AppointmentStatus, is_allowed};
use crate::validate::{validate_appointment_patch, validate_new_appointment};

impl<K: KeyValueStore> Store<K> {
    /// Book a new appointment and return its id.
    ///
    /// Price and duration default to the matching catalog service; employee
    /// and service ids are resolved by name.
    pub fn add_appointment(&mut self, draft: NewAppointment) -> EstacionResult<u32> {
        let date = validate_new_appointment(&draft)?;

        let service = self.services.iter().find(|s| s.name == draft.service.trim());
        let employee_id = self.employee_id_for(&draft.employee);

        let duration = draft
            .duration
            .filter(|d| !d.trim().is_empty())
            .or_else(|| service.map(|s| s.duration.clone()))
            .unwrap_or_else(|| {
                let minutes = self.settings.slot_duration_minutes.max(MIN_APPOINTMENT_MINUTES);
                format!("{}min", minutes)
            });
        let price = draft
            .price
            .filter(|p| !p.trim().is_empty())
            .or_else(|| service.map(|s| s.price.clone()))
            .unwrap_or_else(|| "$0".to_string());

        let appointment = Appointment {
            id: 0,
            client: draft.client.trim().to_string(),
            email: draft.email.trim().to_string(),
            service: draft.service.trim().to_string(),
            employee: draft.employee.trim().to_string(),
            date,
            time: draft.time.trim().to_string(),
            duration,
            status: draft.status.unwrap_or(AppointmentStatus::Pending),
            price,
            day: None,
            start_hour: None,
            color: Some(ColorTag::Teal),
            employee_id,
            service_id: service.map(|s| s.id),
        };

        let id = self.appointments.add(appointment);
        tracing::info!(id, "Appointment created");
        self.persist_appointments();
        Ok(id)
    }

    /// Merge `patch` over appointment `id`. Any status is accepted.
    /// Returns false when the appointment does not exist.
    pub fn update_appointment(&mut self, id: u32, patch: AppointmentPatch) -> bool {
        let employee = patch.employee.clone();
        let service = patch.service.clone();

        if !self.appointments.update(id, patch) {
            tracing::debug!(id, "Update skipped, appointment not found");
            return false;
        }

        // Re-link renamed references
        let employee_id = employee.map(|name| self.employee_id_for(&name));
        let service_id = service.map(|name| self.service_id_for(&name));
        if let Some(appointment) = self.appointments.get_mut(id) {
            if let Some(employee_id) = employee_id {
                appointment.employee_id = employee_id;
            }
            if let Some(service_id) = service_id {
                appointment.service_id = service_id;
            }
        }

        tracing::info!(id, "Appointment updated");
        self.persist_appointments();
        true
    }

    /// Returns false when the appointment does not exist.
    pub fn delete_appointment(&mut self, id: u32) -> bool {
        if !self.appointments.delete(id) {
            tracing::debug!(id, "Delete skipped, appointment not found");
            return false;
        }

        tracing::info!(id, "Appointment deleted");
        self.persist_appointments();
        true
    }

    /// Edit an appointment the way the edit form does: only while the
    /// appointment still allows [`Action::Edit`].
    /// Required fields may change but not be blanked.
    pub fn edit_appointment(&mut self, id: u32, patch: AppointmentPatch) -> EstacionResult<()> {
        validate_appointment_patch(&patch)?;
        self.guard(id, Action::Edit)?;
        self.update_appointment(id, patch);
        Ok(())
    }

    /// Apply a status action, refusing ones the current status does not allow.
    /// Returns the resulting status.
    pub fn apply_action(&mut self, id: u32, action: Action) -> EstacionResult<AppointmentStatus> {
        let current = self.guard(id, action)?;

        match action.target_status() {
            Some(next) => {
                self.update_appointment(id, AppointmentPatch::status(next));
                Ok(next)
            }
            None => Ok(current),
        }
    }

    /// Drop appointment `id` on (`day`, `hour`) of `week`, within business hours.
    pub fn move_appointment(&mut self, id: u32, day: u8, hour: f64, week: &Week) -> DropOutcome {
        let hours = (self.settings.open_hour(), self.settings.close_hour());
        let outcome = plan_drop(id, day, hour, self.appointments.as_slice(), week, hours);

        match &outcome {
            DropOutcome::Moved(placement) => {
                self.update_appointment(
                    id,
                    AppointmentPatch {
                        day: Some(placement.day),
                        start_hour: Some(placement.start_hour),
                        date: Some(placement.date),
                        time: Some(placement.time.clone()),
                        ..Default::default()
                    },
                );
            }
            DropOutcome::Rejected(reason) => {
                tracing::debug!(id, %reason, "Drop rejected");
            }
        }

        outcome
    }

    fn guard(&self, id: u32, action: Action) -> EstacionResult<AppointmentStatus> {
        let status = self
            .appointments
            .get(id)
            .map(|a| a.status)
            .ok_or(EstacionError::NotFound {
                kind: Appointment::KIND,
                id,
            })?;

        if !is_allowed(status, action) {
            return Err(EstacionError::TransitionNotAllowed { action, status });
        }
        Ok(status)
    }

    pub(super) fn employee_id_for(&self, name: &str) -> Option<u32> {
        let name = name.trim();
        self.employees.iter().find(|e| e.name == name).map(|e| e.id)
    }

    pub(super) fn service_id_for(&self, name: &str) -> Option<u32> {
        let name = name.trim();
        self.services.iter().find(|s| s.name == name).map(|s| s.id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::super::tests::{FailingStore, empty_store};
    use super::*;
    use crate::constants::APPOINTMENTS_KEY;
    use crate::persist::MemoryStore;
    use crate::projection::{CalendarFilter, entry_for, project};
    use crate::schedule::RejectReason;

    fn make_test_draft(client: &str) -> NewAppointment {
        NewAppointment {
            client: client.to_string(),
            email: format!("{}@ejemplo.com", client.to_lowercase()),
            service: "Corte de Cabello".to_string(),
            employee: "Ana Martínez".to_string(),
            date: "2025-11-10".to_string(),
            time: "09:00".to_string(),
            ..Default::default()
        }
    }

    fn seeded() -> Store<MemoryStore> {
        Store::load(MemoryStore::new())
    }

    #[test]
    fn sequential_adds_get_fresh_ids() {
        let mut store = empty_store();

        let ids: Vec<u32> = ["Ana", "Beto", "Carla"]
            .into_iter()
            .map(|c| store.add_appointment(make_test_draft(c)).unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);

        assert!(store.delete_appointment(3));
        assert_eq!(store.add_appointment(make_test_draft("Dani")).unwrap(), 3);
    }

    #[test]
    fn new_appointment_copies_catalog_defaults() {
        let mut store = seeded();
        let id = store.add_appointment(make_test_draft("Andrés")).unwrap();
        let appointment = store.appointment(id).unwrap();

        assert_eq!(id, 6);
        assert_eq!(store.appointments()[0].id, id, "newest first");
        assert_eq!(appointment.status, AppointmentStatus::Pending);
        assert_eq!(appointment.price, "$35");
        assert_eq!(appointment.duration, "45 min");
        assert_eq!(appointment.service_id, Some(1));
        assert_eq!(appointment.employee_id, Some(1));
        assert_eq!(appointment.color, Some(ColorTag::Teal));
    }

    #[test]
    fn unknown_service_uses_slot_length_and_zero_price() {
        let mut store = seeded();
        let mut draft = make_test_draft("Andrés");
        draft.service = "Tratamiento Capilar".to_string();

        let id = store.add_appointment(draft).unwrap();
        let appointment = store.appointment(id).unwrap();

        assert_eq!(appointment.duration, "30min");
        assert_eq!(appointment.price, "$0");
        assert_eq!(appointment.service_id, None);
    }

    #[test]
    fn invalid_draft_changes_nothing() {
        let mut store = seeded();
        let before = store.appointments().to_vec();
        let mut draft = make_test_draft("Andrés");
        draft.employee = String::new();

        assert!(matches!(
            store.add_appointment(draft),
            Err(EstacionError::Validation(_))
        ));
        assert_eq!(store.appointments(), before.as_slice());
    }

    #[test]
    fn update_changes_only_target() {
        let mut store = seeded();
        let before = store.appointments().to_vec();

        assert!(store.update_appointment(
            3,
            AppointmentPatch {
                time: Some("12:00".to_string()),
                ..Default::default()
            }
        ));

        for (old, new) in before.iter().zip(store.appointments()) {
            if old.id == 3 {
                assert_eq!(new.time, "12:00");
                assert_eq!(new.client, old.client);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn update_accepts_any_status() {
        let mut store = seeded();
        // Completed -> pending is not an action, but the store takes it
        assert!(store.update_appointment(1, AppointmentPatch::status(AppointmentStatus::Pending)));
        assert_eq!(store.appointment(1).unwrap().status, AppointmentStatus::Pending);
    }

    #[test]
    fn update_relinks_employee_by_name() {
        let mut store = seeded();
        store.update_appointment(
            3,
            AppointmentPatch {
                employee: Some("Pedro López".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(store.appointment(3).unwrap().employee_id, Some(2));

        store.update_appointment(
            3,
            AppointmentPatch {
                employee: Some("Invitado".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(store.appointment(3).unwrap().employee_id, None);
    }

    #[test]
    fn missing_ids_are_silent() {
        let mut store = seeded();
        assert!(!store.update_appointment(99, AppointmentPatch::default()));
        assert!(!store.delete_appointment(99));
    }

    #[test]
    fn actions_follow_status_rules() {
        let mut store = seeded();

        // #3 is pending
        assert!(matches!(
            store.apply_action(3, Action::Complete),
            Err(EstacionError::TransitionNotAllowed { .. })
        ));
        assert_eq!(store.apply_action(3, Action::Confirm).unwrap(), AppointmentStatus::Confirmed);
        assert_eq!(store.apply_action(3, Action::Start).unwrap(), AppointmentStatus::InProgress);
        assert!(store.apply_action(3, Action::Cancel).is_err());
        assert_eq!(store.apply_action(3, Action::Complete).unwrap(), AppointmentStatus::Completed);
        assert!(store.apply_action(3, Action::NoShow).is_err());

        assert!(matches!(
            store.apply_action(99, Action::Confirm),
            Err(EstacionError::NotFound { id: 99, .. })
        ));
    }

    #[test]
    fn edit_refused_once_terminal() {
        let mut store = seeded();
        let patch = AppointmentPatch {
            client: Some("Otra".to_string()),
            ..Default::default()
        };

        // #1 is completed, #4 confirmed
        assert!(store.edit_appointment(1, patch.clone()).is_err());
        assert!(store.edit_appointment(4, patch).is_ok());
        assert_eq!(store.appointment(4).unwrap().client, "Otra");
    }

    #[test]
    fn edited_time_moves_calendar_entry() {
        let mut store = seeded();
        let week = Week::containing(NaiveDate::from_ymd_opt(2025, 11, 12).unwrap(), 0);

        // #4 is stored at 14:00 with an explicit start hour
        store
            .edit_appointment(
                4,
                AppointmentPatch {
                    time: Some("17:00".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let entries = project(store.appointments(), &CalendarFilter::default(), &week);
        let entry = entries.iter().find(|e| e.id == 4).unwrap();
        assert_eq!(entry.start_hour, 17.0);

        // The old 14:00 slot is free again
        let outcome = store.move_appointment(3, entry.day, 14.0, &week);
        assert!(matches!(outcome, DropOutcome::Moved(_)), "{:?}", outcome);
    }

    #[test]
    fn edited_date_moves_calendar_column() {
        let mut store = seeded();

        store
            .edit_appointment(
                4,
                AppointmentPatch {
                    date: NaiveDate::from_ymd_opt(2025, 11, 20),
                    ..Default::default()
                },
            )
            .unwrap();

        // Thursday of the following week
        let week = Week::containing(NaiveDate::from_ymd_opt(2025, 11, 20).unwrap(), 0);
        let appointment = store.appointment(4).unwrap();
        assert_eq!(appointment.day, Some(3));
        assert_eq!(entry_for(appointment, &week).map(|e| e.day), Some(3));
    }

    #[test]
    fn edit_cannot_blank_required_fields() {
        let mut store = seeded();
        let before = store.appointments().to_vec();

        for patch in [
            AppointmentPatch {
                client: Some(String::new()),
                ..Default::default()
            },
            AppointmentPatch {
                employee: Some("  ".to_string()),
                ..Default::default()
            },
            AppointmentPatch {
                service: Some(String::new()),
                ..Default::default()
            },
        ] {
            assert!(matches!(
                store.edit_appointment(3, patch),
                Err(EstacionError::Validation(_))
            ));
        }

        assert_eq!(store.appointments(), before.as_slice());
    }

    #[test]
    fn move_updates_placement_fields() {
        let mut store = seeded();
        let week = Week::containing(NaiveDate::from_ymd_opt(2025, 11, 12).unwrap(), 0);

        // #4 confirmed, Wednesday 14:00 -> Friday 10:30
        let outcome = store.move_appointment(4, 4, 10.5, &week);
        assert!(matches!(outcome, DropOutcome::Moved(_)));

        let moved = store.appointment(4).unwrap();
        assert_eq!(moved.day, Some(4));
        assert_eq!(moved.start_hour, Some(10.5));
        assert_eq!(moved.date, NaiveDate::from_ymd_opt(2025, 11, 14).unwrap());
        assert_eq!(moved.time, "10:30");
    }

    #[test]
    fn completed_cannot_be_moved() {
        let mut store = seeded();
        let week = Week::containing(NaiveDate::from_ymd_opt(2025, 11, 12).unwrap(), 0);
        let before = store.appointment(1).cloned();

        assert_eq!(
            store.move_appointment(1, 3, 12.0, &week),
            DropOutcome::Rejected(RejectReason::NotDraggable(AppointmentStatus::Completed))
        );
        assert_eq!(store.appointment(1).cloned(), before);
    }

    #[test]
    fn move_respects_configured_hours() {
        let mut store = seeded();
        let week = Week::containing(NaiveDate::from_ymd_opt(2025, 11, 12).unwrap(), 0);

        // Default hours are 09:00-20:00
        assert_eq!(
            store.move_appointment(4, 4, 8.0, &week),
            DropOutcome::Rejected(RejectReason::OutsideBusinessHours)
        );
    }

    #[test]
    fn mutation_is_mirrored_to_backend() {
        let mut store = empty_store();
        store.add_appointment(make_test_draft("Ana")).unwrap();

        let reloaded = Store::load(store.backend().clone());
        assert_eq!(reloaded.appointments().len(), 1);
        assert!(store.backend().get(APPOINTMENTS_KEY).unwrap().is_some());
    }

    #[test]
    fn storage_failure_keeps_in_memory_change() {
        let mut store = Store::load(FailingStore);
        let before = store.appointments().len();

        let id = store.add_appointment(make_test_draft("Ana")).unwrap();

        assert_eq!(store.appointments().len(), before + 1);
        assert!(store.appointment(id).is_some());
    }
}
