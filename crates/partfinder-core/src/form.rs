//! Draft shapes for the vehicle / part / contact submission form.
//!
//! Plain data; nothing here validates, normalizes or cross-checks fields.
//! Submission itself belongs to whoever consumes [`FormData`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub brand: String,
    pub model: String,
    /// Model year as typed by the user.
    pub year: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub category: String,
    pub subcategory: String,
    pub additional_info: String,
    /// Image references in display order (URLs or local handles).
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// (latitude, longitude)
    pub coordinates: (f64, f64),
}

/// One complete submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormData {
    pub vehicle: Vehicle,
    pub part: Part,
    pub contact: Contact,
}

impl FormData {
    pub fn new(vehicle: Vehicle, part: Part, contact: Contact) -> Self {
        Self {
            vehicle,
            part,
            contact,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }
}
