//! Emergency helplines and nearby hospitals.

use serde::{Deserialize, Serialize};

use crate::filter::contains_ci;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    National,
    Medical,
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HospitalKind {
    Government,
    Private,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub id: String,
    pub name: String,
    pub number: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ContactKind,
}

impl EmergencyContact {
    pub fn dial_uri(&self) -> String {
        dial_uri(&self.number)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub distance_km: f64,
    #[serde(default)]
    pub contact: String,
    #[serde(rename = "type")]
    pub kind: HospitalKind,
    #[serde(default)]
    pub facilities: Vec<String>,
}

/// `tel:` URI for a phone number, keeping only digits and a leading `+`.
pub fn dial_uri(number: &str) -> String {
    let trimmed = number.trim();
    let mut uri = String::from("tel:");
    if trimmed.starts_with('+') {
        uri.push('+');
    }
    uri.extend(trimmed.chars().filter(|c| c.is_ascii_digit()));
    uri
}

/// Hospitals nearest first. Ties keep catalog order.
pub fn by_distance(hospitals: &[Hospital]) -> Vec<&Hospital> {
    let mut sorted: Vec<&Hospital> = hospitals.iter().collect();
    sorted.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    sorted
}

/// Hospitals listing a facility containing `facility` (case-insensitive).
pub fn offering<'a>(hospitals: &'a [Hospital], facility: &str) -> Vec<&'a Hospital> {
    hospitals
        .iter()
        .filter(|h| h.facilities.iter().any(|f| contains_ci(f, facility)))
        .collect()
}
