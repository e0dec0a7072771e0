pub mod appointments;
pub mod calendar;
pub mod employees;
pub mod notifications;
pub mod reset;
pub mod services;
pub mod settings;
pub mod stats;

use estacion_core::Store;
use estacion_core::persist::DirStore;

/// The store every command runs against.
pub type AppStore = Store<DirStore>;
