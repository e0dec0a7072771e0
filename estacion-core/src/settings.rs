//! Business settings singleton.
//!
//! Settings are replaced as a whole on save, but patches merge the nested
//! `notifications`, `appearance` and `security` groups field by field so a
//! partial patch never erases untouched flags.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CLOSE_TIME, DEFAULT_OPEN_TIME, DEFAULT_SLOT_MINUTES};
use crate::time::hour_of_day;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub business_name: String,
    pub business_email: String,
    pub business_phone: String,
    pub business_address: String,
    /// `HH:MM`
    pub open_time: String,
    /// `HH:MM`
    pub close_time: String,
    pub slot_duration_minutes: i64,
    pub notifications: Notifications,
    pub appearance: Appearance,
    pub security: Security,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            business_name: "La Estación".to_string(),
            business_email: "admin@laestacion.com".to_string(),
            business_phone: "+34 600 000 000".to_string(),
            business_address: String::new(),
            open_time: DEFAULT_OPEN_TIME.to_string(),
            close_time: DEFAULT_CLOSE_TIME.to_string(),
            slot_duration_minutes: DEFAULT_SLOT_MINUTES,
            notifications: Notifications::default(),
            appearance: Appearance::default(),
            security: Security::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notifications {
    pub email_enabled: bool,
    pub push_enabled: bool,
    pub reminders_enabled: bool,
    pub weekly_summary_enabled: bool,
}

impl Default for Notifications {
    fn default() -> Self {
        Notifications {
            email_enabled: true,
            push_enabled: true,
            reminders_enabled: true,
            weekly_summary_enabled: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Appearance {
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(format!("Unknown theme '{}'. Expected light, dark or system", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Security {
    pub two_factor_enabled: bool,
}

/// Partial settings update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    pub business_name: Option<String>,
    pub business_email: Option<String>,
    pub business_phone: Option<String>,
    pub business_address: Option<String>,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
    pub slot_duration_minutes: Option<i64>,
    pub notifications: Option<NotificationsPatch>,
    pub appearance: Option<AppearancePatch>,
    pub security: Option<SecurityPatch>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationsPatch {
    pub email_enabled: Option<bool>,
    pub push_enabled: Option<bool>,
    pub reminders_enabled: Option<bool>,
    pub weekly_summary_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppearancePatch {
    pub theme: Option<Theme>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecurityPatch {
    pub two_factor_enabled: Option<bool>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        *self == SettingsPatch::default()
    }
}

impl Settings {
    /// Settings with `patch` merged over them. `self` is left untouched.
    pub fn merged(&self, patch: &SettingsPatch) -> Settings {
        let mut next = self.clone();

        if let Some(v) = &patch.business_name {
            next.business_name = v.clone();
        }
        if let Some(v) = &patch.business_email {
            next.business_email = v.clone();
        }
        if let Some(v) = &patch.business_phone {
            next.business_phone = v.clone();
        }
        if let Some(v) = &patch.business_address {
            next.business_address = v.clone();
        }
        if let Some(v) = &patch.open_time {
            next.open_time = v.clone();
        }
        if let Some(v) = &patch.close_time {
            next.close_time = v.clone();
        }
        if let Some(v) = patch.slot_duration_minutes {
            next.slot_duration_minutes = v;
        }

        if let Some(n) = &patch.notifications {
            let target = &mut next.notifications;
            if let Some(v) = n.email_enabled {
                target.email_enabled = v;
            }
            if let Some(v) = n.push_enabled {
                target.push_enabled = v;
            }
            if let Some(v) = n.reminders_enabled {
                target.reminders_enabled = v;
            }
            if let Some(v) = n.weekly_summary_enabled {
                target.weekly_summary_enabled = v;
            }
        }
        if let Some(theme) = patch.appearance.as_ref().and_then(|a| a.theme) {
            next.appearance.theme = theme;
        }
        if let Some(v) = patch.security.as_ref().and_then(|s| s.two_factor_enabled) {
            next.security.two_factor_enabled = v;
        }

        next
    }

    /// Opening time as a fractional hour; falls back to the default on bad input.
    pub fn open_hour(&self) -> f64 {
        hour_of_day(&self.open_time)
            .or_else(|| hour_of_day(DEFAULT_OPEN_TIME))
            .unwrap_or(9.0)
    }

    /// Closing time as a fractional hour; falls back to the default on bad input.
    pub fn close_hour(&self) -> f64 {
        hour_of_day(&self.close_time)
            .or_else(|| hour_of_day(DEFAULT_CLOSE_TIME))
            .unwrap_or(20.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_notifications_patch_keeps_other_flags() {
        let mut settings = Settings::default();
        settings.notifications.weekly_summary_enabled = true;

        let patch = SettingsPatch {
            notifications: Some(NotificationsPatch {
                push_enabled: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        };
        let merged = settings.merged(&patch);

        assert!(!merged.notifications.push_enabled);
        assert!(merged.notifications.email_enabled);
        assert!(merged.notifications.reminders_enabled);
        assert!(merged.notifications.weekly_summary_enabled);
        assert_eq!(merged.business_name, settings.business_name);
    }

    #[test]
    fn top_level_fields_are_replaced() {
        let patch = SettingsPatch {
            business_name: Some("Barbería Sur".to_string()),
            slot_duration_minutes: Some(45),
            appearance: Some(AppearancePatch {
                theme: Some(Theme::Dark),
            }),
            ..Default::default()
        };
        let merged = Settings::default().merged(&patch);

        assert_eq!(merged.business_name, "Barbería Sur");
        assert_eq!(merged.slot_duration_minutes, 45);
        assert_eq!(merged.appearance.theme, Theme::Dark);
        assert!(!merged.security.two_factor_enabled);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"businessName": "X", "notifications": {"pushEnabled": false}}"#)
                .unwrap();

        assert_eq!(settings.business_name, "X");
        assert_eq!(settings.open_time, DEFAULT_OPEN_TIME);
        assert!(!settings.notifications.push_enabled);
        assert!(settings.notifications.email_enabled);
    }

    #[test]
    fn business_hours_as_fractions() {
        let mut settings = Settings::default();
        settings.open_time = "08:30".to_string();
        settings.close_time = "bogus".to_string();

        assert_eq!(settings.open_hour(), 8.5);
        assert_eq!(settings.close_hour(), 20.0);
    }
}
