//! The application store.
//!
//! `Store` owns every collection plus the settings singleton and is the only
//! way to change them. Each successful mutation is mirrored to the backing
//! key-value store right after the in-memory change; a failed write is
//! logged and otherwise ignored, the in-memory state stays authoritative.

mod appointments;
mod catalog;
mod collection;
mod notifications;

pub use collection::{Collection, Patch, Record};

use serde::Serialize;

use crate::appointment::Appointment;
use crate::constants::{
    APPOINTMENTS_KEY, EMPLOYEES_KEY, NOTIFICATIONS_KEY, SERVICES_KEY, SETTINGS_KEY,
};
use crate::employee::Employee;
use crate::error::EstacionResult;
use crate::notification::Notification;
use crate::persist::{self, KeyValueStore};
use crate::seed;
use crate::service::Service;
use crate::settings::{Settings, SettingsPatch};
use crate::validate::validate_settings;

pub struct Store<K: KeyValueStore> {
    backend: K,
    appointments: Collection<Appointment>,
    employees: Collection<Employee>,
    services: Collection<Service>,
    notifications: Collection<Notification>,
    settings: Settings,
}

const ALL_KEYS: [&str; 5] = [
    APPOINTMENTS_KEY,
    EMPLOYEES_KEY,
    SERVICES_KEY,
    NOTIFICATIONS_KEY,
    SETTINGS_KEY,
];

impl<K: KeyValueStore> Store<K> {
    /// Load every key from `backend`, seeding whatever is missing or unreadable.
    pub fn load(backend: K) -> Self {
        let appointments: Vec<Appointment> = persist::load_or(&backend, APPOINTMENTS_KEY, seed::appointments);
        let employees: Vec<Employee> = persist::load_or(&backend, EMPLOYEES_KEY, seed::employees);
        let services: Vec<Service> = persist::load_or(&backend, SERVICES_KEY, seed::services);
        let notifications: Vec<Notification> =
            persist::load_or(&backend, NOTIFICATIONS_KEY, seed::notifications);
        let settings: Settings = persist::load_or(&backend, SETTINGS_KEY, Settings::default);

        Store {
            backend,
            appointments: Collection::new(appointments),
            employees: Collection::new(employees),
            services: Collection::new(services),
            notifications: Collection::new(notifications),
            settings,
        }
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    pub fn appointments(&self) -> &[Appointment] {
        self.appointments.as_slice()
    }

    pub fn appointment(&self, id: u32) -> Option<&Appointment> {
        self.appointments.get(id)
    }

    pub fn employees(&self) -> &[Employee] {
        self.employees.as_slice()
    }

    pub fn employee(&self, id: u32) -> Option<&Employee> {
        self.employees.get(id)
    }

    pub fn services(&self) -> &[Service] {
        self.services.as_slice()
    }

    pub fn service(&self, id: u32) -> Option<&Service> {
        self.services.get(id)
    }

    pub fn notifications(&self) -> &[Notification] {
        self.notifications.as_slice()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Validate the merged settings and save them. Nothing changes on error.
    pub fn update_settings(&mut self, patch: &SettingsPatch) -> EstacionResult<()> {
        let next = self.settings.merged(patch);
        validate_settings(&next)?;

        self.settings = next;
        tracing::info!("Settings updated");
        self.persist_settings();
        Ok(())
    }

    /// Go back to the seed data and forget everything persisted.
    ///
    /// Memory is reset first. A key that cannot be dropped is overwritten
    /// with its seed value instead, so the next load sees the seed either way.
    pub fn reset(&mut self) {
        self.appointments = Collection::new(seed::appointments());
        self.employees = Collection::new(seed::employees());
        self.services = Collection::new(seed::services());
        self.notifications = Collection::new(seed::notifications());
        self.settings = Settings::default();
        tracing::info!("Store reset to seed data");

        for key in ALL_KEYS {
            if let Err(e) = self.backend.remove(key) {
                tracing::warn!(key, error = %e, "Could not drop stored value, writing seed over it");
                self.persist_key(key);
            }
        }
    }

    fn persist_key(&mut self, key: &str) {
        match key {
            APPOINTMENTS_KEY => self.persist_appointments(),
            EMPLOYEES_KEY => self.persist_employees(),
            SERVICES_KEY => self.persist_services(),
            NOTIFICATIONS_KEY => self.persist_notifications(),
            SETTINGS_KEY => self.persist_settings(),
            _ => {}
        }
    }

    fn persist_appointments(&mut self) {
        mirror(&mut self.backend, APPOINTMENTS_KEY, &self.appointments);
    }

    fn persist_employees(&mut self) {
        mirror(&mut self.backend, EMPLOYEES_KEY, &self.employees);
    }

    fn persist_services(&mut self) {
        mirror(&mut self.backend, SERVICES_KEY, &self.services);
    }

    fn persist_notifications(&mut self) {
        mirror(&mut self.backend, NOTIFICATIONS_KEY, &self.notifications);
    }

    fn persist_settings(&mut self) {
        mirror(&mut self.backend, SETTINGS_KEY, &self.settings);
    }
}

/// Best-effort write; failures are logged, never returned.
fn mirror<K: KeyValueStore, T: Serialize>(backend: &mut K, key: &str, value: &T) {
    if let Err(e) = persist::save(backend, key, value) {
        tracing::warn!(key, error = %e, "Could not persist change");
    }
}
