//! Catalog item types.
//!
//! Each record type carries the fields the directory, education library and
//! health-records views filter on. Dimensions with a closed vocabulary
//! (specialty, topic, difficulty, record type) are enums that serialize as
//! their lowercase ids, so criteria and JSON catalogs share one spelling.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// A string that does not name any variant of a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a closed vocabulary: an enum with a stable lowercase id, a
/// display label, case-insensitive parsing, and serde through the id.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $variant:ident => ($id:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum $name {
            $( $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Stable lowercase identifier used in criteria and JSON.
            pub fn id(self) -> &'static str {
                match self {
                    $( $name::$variant => $id ),+
                }
            }

            /// Human-readable label.
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.id().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| $crate::models::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::models::UnknownVariant;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$name> for &'static str {
            fn from(v: $name) -> Self {
                v.id()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.id())
            }
        }
    };
}

pub(crate) use vocabulary;

vocabulary! {
    /// Specialties offered in the doctor directory.
    ///
    /// A doctor's `specialty` is a free label ("General Medicine"); the
    /// filter matches when the label contains the specialty id.
    Specialty, "specialty" {
        General => ("general", "General Medicine"),
        Cardiology => ("cardiology", "Cardiology"),
        Neurology => ("neurology", "Neurology"),
        Pediatrics => ("pediatrics", "Pediatrics"),
        Ophthalmology => ("ophthalmology", "Ophthalmology"),
    }
}

vocabulary! {
    /// Health education topics shared by articles and videos.
    Topic, "topic" {
        General => ("general", "General Health"),
        Nutrition => ("nutrition", "Nutrition"),
        Fitness => ("fitness", "Fitness"),
        Maternal => ("maternal", "Maternal Health"),
        Mental => ("mental", "Mental Health"),
        Prevention => ("prevention", "Disease Prevention"),
    }
}

vocabulary! {
    /// Reading level of an article.
    Difficulty, "difficulty" {
        Beginner => ("beginner", "Beginner"),
        Intermediate => ("intermediate", "Intermediate"),
        Advanced => ("advanced", "Advanced"),
    }
}

vocabulary! {
    /// Kind of entry in a patient's health records.
    RecordType, "record type" {
        Prescription => ("prescription", "Prescription"),
        LabReport => ("lab_report", "Lab Report"),
        Consultation => ("consultation", "Consultation"),
        Vaccination => ("vaccination", "Vaccination"),
        Vitals => ("vitals", "Vitals"),
    }
}

/// Coarse availability derived from a doctor's free-text availability label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Now,
    Soon,
    Later,
}

impl Availability {
    /// `Now` for labels mentioning "Now", `Soon` for "mins"/"hour", else `Later`.
    pub fn classify(label: &str) -> Self {
        if label.contains("Now") {
            Availability::Now
        } else if label.contains("mins") || label.contains("hour") {
            Availability::Soon
        } else {
            Availability::Later
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub availability: String,
    /// Consultation fee in rupees. `None` when absent or not a usable number.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub consultation_fee: Option<f64>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub verified: bool,
}

impl Doctor {
    pub fn availability_class(&self) -> Availability {
        Availability::classify(&self.availability)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub category: Topic,
    #[serde(default)]
    pub read_time_minutes: u32,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub summary: String,
    pub language: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub category: Topic,
    /// Display duration, e.g. `"5:30"`.
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub instructor: String,
    pub language: String,
    #[serde(default)]
    pub views: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecordType,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub doctor: String,
    #[serde(default)]
    pub hospital: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

/// Accepts any JSON value and keeps only finite, non-negative numbers.
///
/// Numeric strings (`"250"`) are parsed; everything else becomes `None`.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let amount = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(amount.filter(|a| a.is_finite() && *a >= 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_parses_ids_case_insensitively() {
        assert_eq!("Cardiology".parse::<Specialty>().unwrap(), Specialty::Cardiology);
        assert_eq!(" lab_report ".parse::<RecordType>().unwrap(), RecordType::LabReport);
        let err = "dentistry".parse::<Specialty>().unwrap_err();
        assert_eq!(err.to_string(), "unknown specialty: 'dentistry'");
    }

    #[test]
    fn vocabulary_serializes_as_id() {
        let json = serde_json::to_string(&RecordType::LabReport).unwrap();
        assert_eq!(json, "\"lab_report\"");
        let topic: Topic = serde_json::from_str("\"maternal\"").unwrap();
        assert_eq!(topic, Topic::Maternal);
        assert!(serde_json::from_str::<Topic>("\"gardening\"").is_err());
    }

    #[test]
    fn malformed_fee_becomes_none() {
        let doc: Doctor = serde_json::from_str(
            r#"{"id":"x","name":"Dr. X","specialty":"Neurology","consultation_fee":"n/a"}"#,
        )
        .unwrap();
        assert_eq!(doc.consultation_fee, None);

        let doc: Doctor = serde_json::from_str(
            r#"{"id":"y","name":"Dr. Y","specialty":"Neurology","consultation_fee":"250"}"#,
        )
        .unwrap();
        assert_eq!(doc.consultation_fee, Some(250.0));

        let doc: Doctor =
            serde_json::from_str(r#"{"id":"z","name":"Dr. Z","specialty":"Neurology"}"#).unwrap();
        assert_eq!(doc.consultation_fee, None);
    }

    #[test]
    fn availability_classification() {
        assert_eq!(Availability::classify("Available Now"), Availability::Now);
        assert_eq!(Availability::classify("Available in 30 mins"), Availability::Soon);
        assert_eq!(Availability::classify("Available in 1 hour"), Availability::Soon);
        assert_eq!(Availability::classify("Available Tomorrow"), Availability::Later);
    }
}
