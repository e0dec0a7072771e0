//! Service catalog records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::appointment::ColorTag;
use crate::store::{Patch, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: u32,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub duration: String,
    pub price: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default = "default_color")]
    pub color: ColorTag,
    #[serde(default)]
    pub popular: bool,
}

fn default_icon() -> String {
    "sparkles".to_string()
}

fn default_color() -> ColorTag {
    ColorTag::Teal
}

impl Record for Service {
    const KIND: &'static str = "Service";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A service as entered in the "new service" form.
#[derive(Debug, Clone, Default)]
pub struct NewService {
    pub name: String,
    pub category: String,
    pub description: String,
    pub duration: String,
    pub price: String,
    pub icon: Option<String>,
    pub color: Option<ColorTag>,
    pub popular: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServicePatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub price: Option<String>,
    pub icon: Option<String>,
    pub color: Option<ColorTag>,
    pub popular: Option<bool>,
}

impl Patch<Service> for ServicePatch {
    fn apply(self, service: &mut Service) {
        if let Some(name) = self.name {
            service.name = name;
        }
        if let Some(category) = self.category {
            service.category = category;
        }
        if let Some(description) = self.description {
            service.description = description;
        }
        if let Some(duration) = self.duration {
            service.duration = duration;
        }
        if let Some(price) = self.price {
            service.price = price;
        }
        if let Some(icon) = self.icon {
            service.icon = icon;
        }
        if let Some(color) = self.color {
            service.color = color;
        }
        if let Some(popular) = self.popular {
            service.popular = popular;
        }
    }
}

/// Distinct categories in catalog order.
pub fn categories(services: &[Service]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for service in services {
        if !seen.contains(&service.category.as_str()) {
            seen.push(&service.category);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_presentation_fields_get_defaults() {
        let json = r#"{"id": 9, "name": "Facial", "category": "Estética",
                       "duration": "1 hora", "price": "$40"}"#;
        let service: Service = serde_json::from_str(json).unwrap();

        assert_eq!(service.icon, "sparkles");
        assert_eq!(service.color, ColorTag::Teal);
        assert!(!service.popular);
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let services = crate::seed::services();
        assert_eq!(
            categories(&services),
            vec!["Peluquería", "Coloración", "Estética", "Bienestar"]
        );
    }
}
