//! The notifications feed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::store::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Appointment,
    Payment,
    User,
    Alert,
    Success,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Appointment => "appointment",
            NotificationKind::Payment => "payment",
            NotificationKind::User => "user",
            NotificationKind::Alert => "alert",
            NotificationKind::Success => "success",
            NotificationKind::Info => "info",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Display text as received ("Hace 5 minutos")
    pub time: String,
    #[serde(default)]
    pub read: bool,
}

impl Record for Notification {
    const KIND: &'static str = "Notification";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// The feed as shown: everything, or only what is still unread.
pub fn visible(notifications: &[Notification], unread_only: bool) -> Vec<&Notification> {
    notifications
        .iter()
        .filter(|n| !unread_only || !n.read)
        .collect()
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}
