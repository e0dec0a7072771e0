//! Staff records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::store::{Patch, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    /// 0 to 5
    pub rating: f64,
    #[serde(default)]
    pub appointments_today: u32,
    /// Single initial shown in place of a photo
    pub avatar: String,
    pub status: EmployeeStatus,
}

impl Record for Employee {
    const KIND: &'static str = "Employee";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
        }
    }
}

impl std::str::FromStr for EmployeeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(EmployeeStatus::Active),
            "inactive" => Ok(EmployeeStatus::Inactive),
            other => Err(format!("Unknown employee status '{}'. Expected active or inactive", other)),
        }
    }
}

/// An employee as entered in the "new employee" form.
#[derive(Debug, Clone, Default)]
pub struct NewEmployee {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    /// Comma-separated tags ("Corte, Peinado")
    pub specialties: String,
    pub rating: Option<f64>,
    pub appointments_today: Option<u32>,
    /// Defaults to the first letter of the name
    pub avatar: Option<String>,
    pub status: EmployeeStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialties: Option<Vec<String>>,
    pub rating: Option<f64>,
    pub appointments_today: Option<u32>,
    pub avatar: Option<String>,
    pub status: Option<EmployeeStatus>,
}

impl Patch<Employee> for EmployeePatch {
    fn apply(self, employee: &mut Employee) {
        if let Some(name) = self.name {
            employee.name = name;
        }
        if let Some(role) = self.role {
            employee.role = role;
        }
        if let Some(email) = self.email {
            employee.email = email;
        }
        if let Some(phone) = self.phone {
            employee.phone = phone;
        }
        if let Some(specialties) = self.specialties {
            employee.specialties = specialties;
        }
        if let Some(rating) = self.rating {
            employee.rating = clamp_rating(rating);
        }
        if let Some(count) = self.appointments_today {
            employee.appointments_today = count;
        }
        if let Some(avatar) = self.avatar {
            employee.avatar = avatar;
        }
        if let Some(status) = self.status {
            employee.status = status;
        }
    }
}

pub fn clamp_rating(rating: f64) -> f64 {
    if rating.is_nan() {
        return 0.0;
    }
    rating.clamp(0.0, 5.0)
}

/// Uppercased first letter of a name, or an empty string.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_uses_first_letter() {
        assert_eq!(avatar_initial("ana Martínez"), "A");
        assert_eq!(avatar_initial("  élodie"), "É");
        assert_eq!(avatar_initial(""), "");
    }

    #[test]
    fn rating_is_clamped() {
        assert_eq!(clamp_rating(7.0), 5.0);
        assert_eq!(clamp_rating(-1.0), 0.0);
        assert_eq!(clamp_rating(4.8), 4.8);
    }
}
