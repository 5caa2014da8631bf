//! Symptom lookup and assessment commands.
//!
//! `sathi symptoms [search]` lists catalog symptoms whose name contains the
//! search text. `sathi assess <symptom>...` runs the symptom checker flow
//! (profile, symptoms, review, result) over the named symptoms and prints
//! the assessment. The HTTP server uses [`check_symptoms`] for the same
//! flow.

use anyhow::{bail, Result};
use healthsathi_core::filter::eq_ci;
use healthsathi_core::symptom::{
    run_assessment, search_symptoms, Assessment, Symptom, SymptomCheck,
};
use healthsathi_core::wizard::Wizard;
use healthsathi_core::Catalog;
use serde::Deserialize;

use crate::search::print_json;

/// Input to the symptom checker: profile answers plus symptom ids or names.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckRequest {
    pub age: Option<u32>,
    pub gender: String,
    pub location: String,
    pub symptoms: Vec<String>,
}

/// Find catalog symptoms by id or case-insensitive name, keeping input order.
pub fn resolve_symptoms(catalog: &Catalog, keys: &[String]) -> Result<Vec<Symptom>> {
    let mut found = Vec::with_capacity(keys.len());
    for key in keys {
        let key = key.trim();
        match catalog
            .symptoms
            .iter()
            .find(|s| s.id == key || eq_ci(&s.name, key))
        {
            Some(s) => found.push(s.clone()),
            None => bail!("unknown symptom: '{}'", key),
        }
    }
    Ok(found)
}

/// Drive the checker wizard from profile to result.
///
/// Fails with the first incomplete step, e.g. a missing age or an empty
/// symptom list.
pub fn check_symptoms(catalog: &Catalog, request: &CheckRequest) -> Result<Assessment> {
    let selected = resolve_symptoms(catalog, &request.symptoms)?;

    let mut wizard = Wizard::new(SymptomCheck {
        age: request.age,
        gender: request.gender.clone(),
        location: request.location.clone(),
        ..Default::default()
    });
    wizard.advance()?;
    for symptom in &selected {
        wizard.form_mut().select(symptom);
    }
    wizard.advance()?;
    let assessment = run_assessment(&mut wizard)?;

    tracing::info!(
        symptoms = selected.len(),
        severity = %assessment.severity,
        "symptom assessment"
    );
    Ok(assessment)
}

pub fn run_symptoms(catalog: &Catalog, search: &str, json: bool) -> Result<()> {
    let hits = search_symptoms(&catalog.symptoms, search, &[]);

    if json {
        return print_json(&hits);
    }
    if hits.is_empty() {
        println!("No results.");
        return Ok(());
    }
    for s in hits {
        println!("{:>3}  {} ({})", s.id, s.name, s.category);
    }
    Ok(())
}

pub fn run_assess(catalog: &Catalog, request: &CheckRequest, json: bool) -> Result<()> {
    let assessment = check_symptoms(catalog, request)?;

    if json {
        return print_json(&assessment);
    }

    println!("Severity: {}", assessment.severity);
    println!("Likely condition: {}", assessment.condition);
    println!("Recommendations:");
    for r in &assessment.recommendations {
        println!("  - {}", r);
    }
    if assessment.should_seek_care {
        println!("Please seek medical care.");
    }
    println!();
    println!("This is not a diagnosis. Consult a qualified doctor.");
    Ok(())
}
