//! Appointment status and the actions allowed from each status.
//!
//! The lifecycle is `pending -> confirmed -> in-progress -> completed`, with
//! `cancelled` and `no-show` as terminal side exits. The store accepts any
//! status through a plain update; front ends gate their buttons and commands
//! through [`allowed_actions`] so the rules live in one place.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 6] = [
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::InProgress,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::NoShow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::InProgress => "in-progress",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::NoShow => "no-show",
        }
    }

    /// Completed, cancelled and no-show appointments accept no further transition.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Completed | AppointmentStatus::Cancelled | AppointmentStatus::NoShow
        )
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        AppointmentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "Unknown status '{}'. Expected one of: {}",
                    s,
                    AppointmentStatus::ALL.map(|st| st.as_str()).join(", ")
                )
            })
    }
}

/// A user-facing operation on an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Confirm,
    Start,
    Complete,
    NoShow,
    Cancel,
    Edit,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Confirm,
        Action::Start,
        Action::Complete,
        Action::NoShow,
        Action::Cancel,
        Action::Edit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Confirm => "confirm",
            Action::Start => "start",
            Action::Complete => "complete",
            Action::NoShow => "no-show",
            Action::Cancel => "cancel",
            Action::Edit => "edit",
        }
    }

    /// Status an appointment moves to when the action is applied.
    /// `Edit` changes fields, not status.
    pub fn target_status(&self) -> Option<AppointmentStatus> {
        match self {
            Action::Confirm => Some(AppointmentStatus::Confirmed),
            Action::Start => Some(AppointmentStatus::InProgress),
            Action::Complete => Some(AppointmentStatus::Completed),
            Action::NoShow => Some(AppointmentStatus::NoShow),
            Action::Cancel => Some(AppointmentStatus::Cancelled),
            Action::Edit => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "Unknown action '{}'. Expected one of: {}",
                    s,
                    Action::ALL.map(|a| a.as_str()).join(", ")
                )
            })
    }
}

/// Actions enabled for an appointment in `status`.
pub fn allowed_actions(status: AppointmentStatus) -> BTreeSet<Action> {
    let mut actions = BTreeSet::new();

    if status == AppointmentStatus::Pending {
        actions.insert(Action::Confirm);
    }
    if status == AppointmentStatus::Confirmed {
        actions.insert(Action::Start);
    }
    if matches!(
        status,
        AppointmentStatus::InProgress | AppointmentStatus::Confirmed
    ) {
        actions.insert(Action::Complete);
    }

    let open = !status.is_terminal() && status != AppointmentStatus::InProgress;
    if open {
        actions.insert(Action::NoShow);
        actions.insert(Action::Cancel);
        actions.insert(Action::Edit);
    }

    actions
}

pub fn is_allowed(status: AppointmentStatus, action: Action) -> bool {
    allowed_actions(status).contains(&action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_be_confirmed_but_not_completed() {
        let actions = allowed_actions(AppointmentStatus::Pending);
        assert!(actions.contains(&Action::Confirm));
        assert!(!actions.contains(&Action::Complete));
        assert!(actions.contains(&Action::Cancel));
        assert!(actions.contains(&Action::NoShow));
        assert!(actions.contains(&Action::Edit));
    }

    #[test]
    fn confirmed_can_start_or_complete() {
        let actions = allowed_actions(AppointmentStatus::Confirmed);
        assert!(!actions.contains(&Action::Confirm));
        assert!(actions.contains(&Action::Start));
        assert!(actions.contains(&Action::Complete));
        assert!(actions.contains(&Action::Cancel));
    }

    #[test]
    fn in_progress_only_completes() {
        let actions = allowed_actions(AppointmentStatus::InProgress);
        assert_eq!(actions.into_iter().collect::<Vec<_>>(), vec![Action::Complete]);
    }

    #[test]
    fn terminal_statuses_allow_nothing() {
        for status in [
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
            AppointmentStatus::NoShow,
        ] {
            assert!(status.is_terminal());
            assert!(allowed_actions(status).is_empty(), "{status} should be final");
        }
    }

    #[test]
    fn every_target_status_is_reachable_from_some_status() {
        for action in Action::ALL {
            if action == Action::Edit {
                continue;
            }
            assert!(
                AppointmentStatus::ALL
                    .into_iter()
                    .any(|status| is_allowed(status, action)),
                "{action} is never enabled"
            );
        }
    }

    #[test]
    fn status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&AppointmentStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(
            serde_json::from_str::<AppointmentStatus>("\"no-show\"").unwrap(),
            AppointmentStatus::NoShow
        );
    }

    #[test]
    fn parses_status_and_action_names() {
        assert_eq!("In_Progress".parse::<AppointmentStatus>(), Ok(AppointmentStatus::InProgress));
        assert_eq!("no-show".parse::<Action>(), Ok(Action::NoShow));
        assert!("done".parse::<AppointmentStatus>().is_err());
    }
}
