//! Symptom checker flow and its fixed assessment rule.
//!
//! The checker is a four-step [`Wizard`]: profile, symptom selection,
//! review, result. The assessment is a fixed rule, not a diagnosis:
//!
//! - any high-risk symptom ([`HIGH_RISK`]) makes the severity `high`;
//! - otherwise more than three symptoms make it `medium`;
//! - otherwise it is `low`.
//!
//! Care is advised for any high-risk symptom or more than four symptoms.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::filter::{eq_ci, search_matches, Filter};
use crate::wizard::{Form, Wizard, WizardError};

/// Symptoms that escalate an assessment to `high` on their own.
pub const HIGH_RISK: &[&str] = &["Chest Pain", "Shortness of Breath", "Severe Headache"];

/// More than this many symptoms raises a low assessment to `medium`.
const MEDIUM_ABOVE: usize = 3;
/// More than this many symptoms advises seeking care.
const SEEK_CARE_ABOVE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
}

impl Symptom {
    pub fn is_high_risk(&self) -> bool {
        HIGH_RISK.iter().any(|h| eq_ci(h, &self.name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub severity: Severity,
    pub condition: String,
    pub recommendations: Vec<String>,
    pub should_seek_care: bool,
}

/// Apply the assessment rule to a set of selected symptoms.
pub fn assess(symptoms: &[Symptom]) -> Assessment {
    let high_risk = symptoms.iter().any(Symptom::is_high_risk);
    let count = symptoms.len();

    let severity = if high_risk {
        Severity::High
    } else if count > MEDIUM_ABOVE {
        Severity::Medium
    } else {
        Severity::Low
    };

    let condition = if high_risk {
        "Possible cardiac/respiratory issue"
    } else {
        "Common viral infection"
    };

    let closing = if high_risk {
        "Seek immediate medical attention"
    } else {
        "Consult a doctor if symptoms worsen"
    };

    Assessment {
        severity,
        condition: condition.to_string(),
        recommendations: [
            "Rest and stay hydrated",
            "Monitor symptoms for 24-48 hours",
            "Take paracetamol for fever if needed",
            closing,
        ]
        .iter()
        .map(|r| r.to_string())
        .collect(),
        should_seek_care: high_risk || count > SEEK_CARE_ABOVE,
    }
}

/// Symptoms whose name contains `search`, excluding those already selected.
pub fn search_symptoms<'a>(
    symptoms: &'a [Symptom],
    search: &str,
    selected: &[Symptom],
) -> Vec<&'a Symptom> {
    Filter::new()
        .with(|s: &Symptom| search_matches(search, &[s.name.as_str()]))
        .with(|s: &Symptom| !selected.iter().any(|picked| picked.id == s.id))
        .apply(symptoms)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStep {
    Profile,
    Symptoms,
    Review,
    Result,
}

impl fmt::Display for CheckStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CheckStep::Profile => "profile",
            CheckStep::Symptoms => "symptoms",
            CheckStep::Review => "review",
            CheckStep::Result => "result",
        })
    }
}

/// Symptom checker form state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SymptomCheck {
    pub age: Option<u32>,
    pub gender: String,
    pub location: String,
    pub selected: Vec<Symptom>,
    pub search: String,
    #[serde(skip_deserializing)]
    pub assessment: Option<Assessment>,
}

impl SymptomCheck {
    /// Add a symptom and clear the search box. Re-selecting is a no-op.
    pub fn select(&mut self, symptom: &Symptom) {
        if !self.selected.iter().any(|s| s.id == symptom.id) {
            self.selected.push(symptom.clone());
        }
        self.search.clear();
    }

    /// Drop a selected symptom by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|s| s.id != id);
        self.selected.len() != before
    }

    /// Catalog symptoms matching the current search and not yet selected.
    pub fn suggestions<'a>(&self, symptoms: &'a [Symptom]) -> Vec<&'a Symptom> {
        search_symptoms(symptoms, &self.search, &self.selected)
    }
}

impl Form for SymptomCheck {
    type Step = CheckStep;

    const STEPS: &'static [CheckStep] = &[
        CheckStep::Profile,
        CheckStep::Symptoms,
        CheckStep::Review,
        CheckStep::Result,
    ];

    fn missing(&self, step: CheckStep) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match step {
            CheckStep::Profile => {
                if self.age.is_none() {
                    missing.push("age");
                }
                if self.gender.trim().is_empty() {
                    missing.push("gender");
                }
            }
            CheckStep::Symptoms => {
                if self.selected.is_empty() {
                    missing.push("at least one symptom");
                }
            }
            CheckStep::Review => {
                if self.assessment.is_none() {
                    missing.push("assessment");
                }
            }
            CheckStep::Result => {}
        }
        missing
    }
}

/// Assess the selected symptoms from the review step and show the result.
pub fn run_assessment(
    wizard: &mut Wizard<SymptomCheck>,
) -> Result<Assessment, WizardError<CheckStep>> {
    if wizard.step() != CheckStep::Review {
        let mut missing = wizard.missing();
        if missing.is_empty() {
            missing.push("review step");
        }
        return Err(WizardError::Incomplete {
            step: wizard.step(),
            missing,
        });
    }
    let assessment = assess(&wizard.form().selected);
    wizard.form_mut().assessment = Some(assessment.clone());
    wizard.advance()?;
    Ok(assessment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn named(catalog: &Catalog, names: &[&str]) -> Vec<Symptom> {
        names
            .iter()
            .map(|n| {
                catalog
                    .symptoms
                    .iter()
                    .find(|s| s.name == *n)
                    .cloned()
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn high_risk_symptom_dominates() {
        let catalog = Catalog::sample();
        let a = assess(&named(&catalog, &["Fever", "Chest Pain"]));
        assert_eq!(a.severity, Severity::High);
        assert_eq!(a.condition, "Possible cardiac/respiratory issue");
        assert!(a.should_seek_care);
        assert_eq!(a.recommendations.len(), 4);
        assert_eq!(a.recommendations[3], "Seek immediate medical attention");
    }

    #[test]
    fn count_thresholds() {
        let catalog = Catalog::sample();
        let three = assess(&named(&catalog, &["Fever", "Cough", "Fatigue"]));
        assert_eq!(three.severity, Severity::Low);
        assert!(!three.should_seek_care);

        let four = assess(&named(&catalog, &["Fever", "Cough", "Fatigue", "Nausea"]));
        assert_eq!(four.severity, Severity::Medium);
        assert!(!four.should_seek_care);
        assert_eq!(four.condition, "Common viral infection");

        let five = assess(&named(
            &catalog,
            &["Fever", "Cough", "Fatigue", "Nausea", "Dizziness"],
        ));
        assert_eq!(five.severity, Severity::Medium);
        assert!(five.should_seek_care);
        assert_eq!(five.recommendations[3], "Consult a doctor if symptoms worsen");
    }

    #[test]
    fn search_excludes_selected() {
        let catalog = Catalog::sample();
        let mut check = SymptomCheck::default();
        check.search = "pain".into();
        let names: Vec<&str> = check
            .suggestions(&catalog.symptoms)
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Chest Pain", "Stomach Pain"]);

        let chest = catalog.symptoms[8].clone();
        check.select(&chest);
        assert!(check.search.is_empty());
        check.search = "PAIN".into();
        let names: Vec<&str> = check
            .suggestions(&catalog.symptoms)
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Stomach Pain"]);
    }

    #[test]
    fn select_twice_and_remove() {
        let catalog = Catalog::sample();
        let mut check = SymptomCheck::default();
        check.select(&catalog.symptoms[0]);
        check.select(&catalog.symptoms[0]);
        assert_eq!(check.selected.len(), 1);
        assert!(check.remove("1"));
        assert!(!check.remove("1"));
    }

    #[test]
    fn wizard_walkthrough() {
        let catalog = Catalog::sample();
        let mut wizard = Wizard::<SymptomCheck>::default();
        assert!(wizard.advance().is_err());

        wizard.form_mut().age = Some(42);
        wizard.form_mut().gender = "male".into();
        assert_eq!(wizard.advance().unwrap(), CheckStep::Symptoms);
        assert!(wizard.advance().is_err());

        wizard.form_mut().select(&catalog.symptoms[2]);
        assert_eq!(wizard.advance().unwrap(), CheckStep::Review);
        // Review only moves on through an assessment.
        assert!(wizard.advance().is_err());

        let a = run_assessment(&mut wizard).unwrap();
        assert_eq!(a.severity, Severity::Low);
        assert_eq!(wizard.step(), CheckStep::Result);
        assert_eq!(wizard.form().assessment.as_ref(), Some(&a));

        wizard.reset();
        assert_eq!(wizard.step(), CheckStep::Profile);
        assert!(wizard.form().selected.is_empty());
    }

    #[test]
    fn assessment_requires_review_step() {
        let mut wizard = Wizard::<SymptomCheck>::default();
        let err = run_assessment(&mut wizard).unwrap_err();
        assert!(matches!(
            err,
            WizardError::Incomplete {
                step: CheckStep::Profile,
                ..
            }
        ));
    }
}
