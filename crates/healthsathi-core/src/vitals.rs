//! Vital signs and body-mass index.
//!
//! Values are kept as entered (strings) so a half-typed field never loses
//! input. BMI is derived from weight (kg) and height (cm) whenever either
//! changes and both parse to non-zero numbers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vital {
    BloodPressure,
    HeartRate,
    Temperature,
    Weight,
    Height,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalSigns {
    pub blood_pressure: String,
    pub heart_rate: String,
    pub temperature: String,
    pub weight: String,
    pub height: String,
    pub bmi: String,
}

impl Default for VitalSigns {
    fn default() -> Self {
        Self {
            blood_pressure: "120/80".to_string(),
            heart_rate: "72".to_string(),
            temperature: "98.6".to_string(),
            weight: "70".to_string(),
            height: "170".to_string(),
            bmi: "24.2".to_string(),
        }
    }
}

/// BMI from weight in kilograms and height in centimetres.
///
/// Returns `None` unless both values are finite and non-zero.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !weight_kg.is_finite() || !height_cm.is_finite() || weight_kg == 0.0 || height_cm == 0.0 {
        return None;
    }
    let metres = height_cm / 100.0;
    Some(weight_kg / (metres * metres))
}

/// BMI formatted to one decimal place.
pub fn format_bmi(value: f64) -> String {
    format!("{:.1}", value)
}

impl VitalSigns {
    /// Store a new value; recompute BMI when height or weight changed.
    pub fn update(&mut self, vital: Vital, value: &str) {
        let value = value.to_string();
        match vital {
            Vital::BloodPressure => self.blood_pressure = value,
            Vital::HeartRate => self.heart_rate = value,
            Vital::Temperature => self.temperature = value,
            Vital::Weight => {
                self.weight = value;
                self.recompute_bmi();
            }
            Vital::Height => {
                self.height = value;
                self.recompute_bmi();
            }
        }
    }

    fn recompute_bmi(&mut self) {
        // Whole-field parse: "170cm" is unparsable, not 170.
        let weight = self.weight.trim().parse::<f64>();
        let height = self.height.trim().parse::<f64>();
        if let (Ok(w), Ok(h)) = (weight, height) {
            if let Some(value) = bmi(w, h) {
                self.bmi = format_bmi(value);
            }
        }
    }
}
