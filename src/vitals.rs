//! `sathi bmi`: body-mass index from weight and height.

use anyhow::{bail, Result};
use healthsathi_core::vitals::{Vital, VitalSigns};
use serde::Serialize;

use crate::search::print_json;

#[derive(Debug, Serialize)]
struct BmiReport<'a> {
    weight_kg: &'a str,
    height_cm: &'a str,
    bmi: &'a str,
}

/// Record weight and height on a fresh vitals sheet and return it.
///
/// Errors when either value is not a finite non-zero number, since the
/// sheet would otherwise keep showing its default BMI.
pub fn compute_bmi(weight: &str, height: &str) -> Result<VitalSigns> {
    let valid = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map(|v| v.is_finite() && v != 0.0)
            .unwrap_or(false)
    };
    if !valid(weight) {
        bail!("weight must be a non-zero number of kilograms, got '{}'", weight);
    }
    if !valid(height) {
        bail!("height must be a non-zero number of centimetres, got '{}'", height);
    }

    let mut sheet = VitalSigns::default();
    sheet.update(Vital::Weight, weight);
    sheet.update(Vital::Height, height);
    Ok(sheet)
}

pub fn run_bmi(weight: &str, height: &str, json: bool) -> Result<()> {
    let sheet = compute_bmi(weight, height)?;

    if json {
        return print_json(&BmiReport {
            weight_kg: &sheet.weight,
            height_cm: &sheet.height,
            bmi: &sheet.bmi,
        });
    }
    println!("BMI {}", sheet.bmi);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_from_strings() {
        assert_eq!(compute_bmi("80", "170").unwrap().bmi, "27.7");
        assert_eq!(compute_bmi(" 60 ", "165").unwrap().bmi, "22.0");
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert!(compute_bmi("0", "170").is_err());
        assert!(compute_bmi("70", "tall").is_err());
    }
}
