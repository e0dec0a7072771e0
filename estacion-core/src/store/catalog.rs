//! Employee and service operations on the store.
//!
//! Appointments keep a copy of the employee and service names. A rename
//! rewrites that copy on every appointment linked by id; a delete keeps the
//! copy and drops the link, since the freed id may be handed out again.

use super::{Record, Store};
use crate::constants::DEFAULT_EMPLOYEE_RATING;
use crate::employee::{Employee, EmployeePatch, NewEmployee, avatar_initial, clamp_rating};
use crate::error::{EstacionError, EstacionResult};
use crate::persist::KeyValueStore;
use crate::service::{NewService, Service, ServicePatch};
use crate::validate::{
    parse_specialties, validate_employee_patch, validate_new_employee, validate_new_service,
    validate_service_patch,
};

impl<K: KeyValueStore> Store<K> {
    pub fn add_employee(&mut self, draft: NewEmployee) -> EstacionResult<u32> {
        validate_new_employee(&draft)?;

        let name = draft.name.trim().to_string();
        let avatar = draft
            .avatar
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| avatar_initial(&name));

        let employee = Employee {
            id: 0,
            role: draft.role.trim().to_string(),
            email: draft.email.trim().to_string(),
            phone: draft.phone.trim().to_string(),
            specialties: parse_specialties(&draft.specialties),
            rating: clamp_rating(draft.rating.unwrap_or(DEFAULT_EMPLOYEE_RATING)),
            appointments_today: draft.appointments_today.unwrap_or(0),
            avatar,
            status: draft.status,
            name,
        };

        let id = self.employees.add(employee);
        tracing::info!(id, "Employee created");
        self.persist_employees();
        Ok(id)
    }

    /// Validated update for the edit form. Unknown ids are an error here.
    pub fn edit_employee(&mut self, id: u32, patch: EmployeePatch) -> EstacionResult<()> {
        validate_employee_patch(&patch)?;

        if !self.update_employee(id, patch) {
            return Err(EstacionError::NotFound {
                kind: Employee::KIND,
                id,
            });
        }
        Ok(())
    }

    /// Returns false when the employee does not exist.
    pub fn update_employee(&mut self, id: u32, patch: EmployeePatch) -> bool {
        let renamed = patch.name.clone();

        if !self.employees.update(id, patch) {
            tracing::debug!(id, "Update skipped, employee not found");
            return false;
        }
        tracing::info!(id, "Employee updated");
        self.persist_employees();

        if let Some(name) = renamed {
            let mut touched = 0;
            for appointment in self.appointments.iter_mut() {
                if appointment.employee_id == Some(id) && appointment.employee != name {
                    appointment.employee = name.clone();
                    touched += 1;
                }
            }
            if touched > 0 {
                tracing::info!(id, touched, "Employee rename applied to appointments");
                self.persist_appointments();
            }
        }

        true
    }

    /// Returns false when the employee does not exist.
    pub fn delete_employee(&mut self, id: u32) -> bool {
        if !self.employees.delete(id) {
            tracing::debug!(id, "Delete skipped, employee not found");
            return false;
        }
        tracing::info!(id, "Employee deleted");
        self.persist_employees();

        let mut unlinked = 0;
        for appointment in self.appointments.iter_mut() {
            if appointment.employee_id == Some(id) {
                appointment.employee_id = None;
                unlinked += 1;
            }
        }
        if unlinked > 0 {
            tracing::info!(id, unlinked, "Appointments unlinked from deleted employee");
            self.persist_appointments();
        }

        true
    }

    pub fn add_service(&mut self, draft: NewService) -> EstacionResult<u32> {
        validate_new_service(&draft)?;

        let service = Service {
            id: 0,
            name: draft.name.trim().to_string(),
            category: draft.category.trim().to_string(),
            description: draft.description.trim().to_string(),
            duration: draft.duration.trim().to_string(),
            price: draft.price.trim().to_string(),
            icon: draft.icon.unwrap_or_else(|| "sparkles".to_string()),
            color: draft.color.unwrap_or(crate::appointment::ColorTag::Teal),
            popular: draft.popular,
        };

        let id = self.services.add(service);
        tracing::info!(id, "Service created");
        self.persist_services();
        Ok(id)
    }

    /// Validated update for the edit form. Unknown ids are an error here.
    pub fn edit_service(&mut self, id: u32, patch: ServicePatch) -> EstacionResult<()> {
        validate_service_patch(&patch)?;

        if !self.update_service(id, patch) {
            return Err(EstacionError::NotFound {
                kind: Service::KIND,
                id,
            });
        }
        Ok(())
    }

    /// Returns false when the service does not exist.
    pub fn update_service(&mut self, id: u32, patch: ServicePatch) -> bool {
        let renamed = patch.name.clone();

        if !self.services.update(id, patch) {
            tracing::debug!(id, "Update skipped, service not found");
            return false;
        }
        tracing::info!(id, "Service updated");
        self.persist_services();

        if let Some(name) = renamed {
            let mut touched = 0;
            for appointment in self.appointments.iter_mut() {
                if appointment.service_id == Some(id) && appointment.service != name {
                    appointment.service = name.clone();
                    touched += 1;
                }
            }
            if touched > 0 {
                tracing::info!(id, touched, "Service rename applied to appointments");
                self.persist_appointments();
            }
        }

        true
    }

    /// Returns false when the service does not exist.
    pub fn delete_service(&mut self, id: u32) -> bool {
        if !self.services.delete(id) {
            tracing::debug!(id, "Delete skipped, service not found");
            return false;
        }
        tracing::info!(id, "Service deleted");
        self.persist_services();

        let mut unlinked = 0;
        for appointment in self.appointments.iter_mut() {
            if appointment.service_id == Some(id) {
                appointment.service_id = None;
                unlinked += 1;
            }
        }
        if unlinked > 0 {
            tracing::info!(id, unlinked, "Appointments unlinked from deleted service");
            self.persist_appointments();
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::empty_store;
    use super::*;
    use crate::appointment::NewAppointment;
    use crate::employee::EmployeeStatus;
    use crate::error::EstacionError;
    use crate::persist::MemoryStore;

    fn seeded() -> Store<MemoryStore> {
        Store::load(MemoryStore::new())
    }

    fn make_test_employee(name: &str) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            role: "Estilista".to_string(),
            email: "lucia@ejemplo.com".to_string(),
            specialties: "Corte, Peinado,".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn new_employee_defaults() {
        let mut store = empty_store();
        let id = store.add_employee(make_test_employee("lucía")).unwrap();
        let employee = store.employee(id).unwrap();

        assert_eq!(id, 1);
        assert_eq!(employee.avatar, "L");
        assert_eq!(employee.rating, DEFAULT_EMPLOYEE_RATING);
        assert_eq!(employee.specialties, vec!["Corte", "Peinado"]);
        assert_eq!(employee.status, EmployeeStatus::Active);
    }

    #[test]
    fn new_employee_requires_email() {
        let mut store = empty_store();
        let mut draft = make_test_employee("Lucía");
        draft.email.clear();

        assert!(matches!(
            store.add_employee(draft),
            Err(EstacionError::Validation(_))
        ));
        assert!(store.employees().is_empty());
    }

    #[test]
    fn employee_rename_cascades_to_linked_appointments() {
        let mut store = seeded();

        assert!(store.update_employee(
            1,
            EmployeePatch {
                name: Some("Ana M. Ruiz".to_string()),
                ..Default::default()
            }
        ));

        // #1 and #4 belong to Ana
        assert_eq!(store.appointment(1).unwrap().employee, "Ana M. Ruiz");
        assert_eq!(store.appointment(4).unwrap().employee, "Ana M. Ruiz");
        assert_eq!(store.appointment(2).unwrap().employee, "Pedro López");
    }

    #[test]
    fn employee_delete_keeps_name_and_drops_link() {
        let mut store = seeded();

        assert!(store.delete_employee(1));
        assert!(store.employee(1).is_none());

        let appointment = store.appointment(4).unwrap();
        assert_eq!(appointment.employee, "Ana Martínez");
        assert_eq!(appointment.employee_id, None);

        // A new employee never inherits Ana's appointments
        let id = store.add_employee(make_test_employee("Nuevo")).unwrap();
        assert_eq!(id, 5);
        assert!(store.appointments().iter().all(|a| a.employee_id != Some(id)));
    }

    #[test]
    fn new_appointment_for_new_employee_links_by_name() {
        let mut store = seeded();
        let employee_id = store.add_employee(make_test_employee("Lucía")).unwrap();

        let id = store
            .add_appointment(NewAppointment {
                client: "Andrés Silva".to_string(),
                service: "Pedicura".to_string(),
                employee: "Lucía".to_string(),
                date: "2025-11-15".to_string(),
                time: "13:00".to_string(),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(store.appointment(id).unwrap().employee_id, Some(employee_id));
    }

    #[test]
    fn service_crud_and_rename() {
        let mut store = seeded();
        let id = store
            .add_service(NewService {
                name: "Facial".to_string(),
                category: "Estética".to_string(),
                duration: "1 hora".to_string(),
                price: "$40".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(id, 9);
        assert_eq!(store.services()[0].name, "Facial");

        assert!(store.update_service(
            6,
            ServicePatch {
                name: Some("Manicura Spa".to_string()),
                ..Default::default()
            }
        ));
        assert_eq!(store.appointment(3).unwrap().service, "Manicura Spa");

        assert!(store.delete_service(6));
        assert_eq!(store.appointment(3).unwrap().service_id, None);
        assert!(!store.delete_service(6));
        assert!(!store.update_service(6, ServicePatch::default()));
    }

    #[test]
    fn edits_reject_blanks_and_unknown_ids() {
        let mut store = seeded();
        let before = store.employees().to_vec();

        let blank_name = EmployeePatch {
            name: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            store.edit_employee(1, blank_name),
            Err(EstacionError::Validation(_))
        ));
        assert_eq!(store.employees(), before.as_slice());
        assert_eq!(store.appointment(1).unwrap().employee, "Ana Martínez");

        let role = EmployeePatch {
            role: Some("Colorista".to_string()),
            ..Default::default()
        };
        match store.edit_employee(99, role.clone()) {
            Err(EstacionError::NotFound { kind, id }) => {
                assert_eq!(kind, "Employee");
                assert_eq!(id, 99);
            }
            other => panic!("expected not found, got {:?}", other),
        }
        store.edit_employee(1, role).unwrap();
        assert_eq!(store.employee(1).unwrap().role, "Colorista");

        let blank_category = ServicePatch {
            category: Some(String::new()),
            ..Default::default()
        };
        assert!(store.edit_service(1, blank_category).is_err());
        assert!(matches!(
            store.edit_service(99, ServicePatch::default()),
            Err(EstacionError::NotFound { kind: "Service", .. })
        ));
    }

    #[test]
    fn new_service_requires_price() {
        let mut store = empty_store();
        let draft = NewService {
            name: "Facial".to_string(),
            category: "Estética".to_string(),
            duration: "1 hora".to_string(),
            ..Default::default()
        };
        assert!(store.add_service(draft).is_err());
    }
}
