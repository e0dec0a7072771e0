//! Core types and logic for estacion.
//!
//! This crate holds everything the front ends share:
//! - `Appointment`, `Employee`, `Service` and `Settings` records, plus the
//!   `Notification` feed
//! - `store` with the id-assigning collections and the settings singleton
//! - `projection` and `schedule` for the weekly calendar and drag-and-drop moves
//! - `persist` for mirroring state into a key-value byte store

pub mod appointment;
pub mod config;
pub mod constants;
pub mod employee;
pub mod error;
pub mod notification;
pub mod persist;
pub mod projection;
pub mod schedule;
pub mod seed;
pub mod service;
pub mod settings;
pub mod stats;
pub mod status;
pub mod store;
pub mod time;
pub mod validate;

pub use appointment::{Appointment, AppointmentPatch, ColorTag, NewAppointment};
pub use employee::{Employee, EmployeePatch, EmployeeStatus, NewEmployee};
pub use error::{EstacionError, EstacionResult};
pub use notification::{Notification, NotificationKind};
pub use service::{NewService, Service, ServicePatch};
pub use settings::{Settings, SettingsPatch};
pub use status::{Action, AppointmentStatus};
pub use store::Store;
