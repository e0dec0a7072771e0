/// Storage key for the appointment collection.
pub const APPOINTMENTS_KEY: &str = "appointments";
/// Storage key for the employee collection.
pub const EMPLOYEES_KEY: &str = "employees";
/// Storage key for the service catalog.
pub const SERVICES_KEY: &str = "services";
/// Storage key for the notifications feed.
pub const NOTIFICATIONS_KEY: &str = "notifications";
/// Storage key for the settings singleton.
pub const SETTINGS_KEY: &str = "settings";

pub const DEFAULT_OPEN_TIME: &str = "09:00";
pub const DEFAULT_CLOSE_TIME: &str = "20:00";
pub const DEFAULT_SLOT_MINUTES: i64 = 30;

/// Shortest duration offered for a new appointment, in minutes.
pub const MIN_APPOINTMENT_MINUTES: i64 = 15;

/// Days shown in one calendar week (Monday first).
pub const DAYS_PER_WEEK: u8 = 7;

pub const DEFAULT_EMPLOYEE_RATING: f64 = 4.5;
