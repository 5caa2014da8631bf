//! Account registration flow.
//!
//! Three steps, each gated on its own fields:
//!
//! | Step | Requirements |
//! |------|--------------|
//! | `basic` | first name, last name, email, phone |
//! | `security` | password, confirmation, and the two match |
//! | `profile` | date of birth, gender, a known state, terms and privacy accepted |
//!
//! Address and district are optional.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::wizard::{Form, Wizard, WizardError};

/// States offered by the registration form.
pub const INDIAN_STATES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStep {
    Basic,
    Security,
    Profile,
}

impl fmt::Display for RegistrationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RegistrationStep::Basic => "basic",
            RegistrationStep::Security => "security",
            RegistrationStep::Profile => "profile",
        })
    }
}

/// Raw registration form state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub date_of_birth: String,
    pub gender: String,
    pub address: String,
    pub state: String,
    pub district: String,
    pub agree_to_terms: bool,
    pub agree_to_privacy: bool,
}

impl RegistrationForm {
    /// True once both password fields are filled in and differ.
    pub fn password_mismatch(&self) -> bool {
        !self.confirm_password.is_empty() && self.password != self.confirm_password
    }
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl Form for RegistrationForm {
    type Step = RegistrationStep;

    const STEPS: &'static [RegistrationStep] = &[
        RegistrationStep::Basic,
        RegistrationStep::Security,
        RegistrationStep::Profile,
    ];

    fn missing(&self, step: RegistrationStep) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match step {
            RegistrationStep::Basic => {
                if blank(&self.first_name) {
                    missing.push("first name");
                }
                if blank(&self.last_name) {
                    missing.push("last name");
                }
                if blank(&self.email) {
                    missing.push("email");
                }
                if blank(&self.phone) {
                    missing.push("phone");
                }
            }
            RegistrationStep::Security => {
                if self.password.is_empty() {
                    missing.push("password");
                }
                if self.confirm_password.is_empty() {
                    missing.push("password confirmation");
                }
                if self.password_mismatch() {
                    missing.push("matching passwords");
                }
            }
            RegistrationStep::Profile => {
                if blank(&self.date_of_birth) {
                    missing.push("date of birth");
                }
                if blank(&self.gender) {
                    missing.push("gender");
                }
                if !INDIAN_STATES.contains(&self.state.trim()) {
                    missing.push("state");
                }
                if !self.agree_to_terms {
                    missing.push("terms of service");
                }
                if !self.agree_to_privacy {
                    missing.push("privacy policy");
                }
            }
        }
        missing
    }
}

/// A completed registration. The password confirmation is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub date_of_birth: String,
    pub gender: String,
    pub address: Option<String>,
    pub state: String,
    pub district: Option<String>,
}

fn optional(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_string())
}

/// Submit the flow. Only valid from the last step with every step complete.
pub fn submit(
    wizard: &Wizard<RegistrationForm>,
) -> Result<Registration, WizardError<RegistrationStep>> {
    wizard.validate_all()?;
    if !wizard.is_last() {
        return Err(WizardError::Incomplete {
            step: wizard.step(),
            missing: vec!["remaining steps"],
        });
    }
    let f = wizard.form();
    Ok(Registration {
        first_name: f.first_name.trim().to_string(),
        last_name: f.last_name.trim().to_string(),
        email: f.email.trim().to_string(),
        phone: f.phone.trim().to_string(),
        password: f.password.clone(),
        date_of_birth: f.date_of_birth.trim().to_string(),
        gender: f.gender.trim().to_string(),
        address: optional(&f.address),
        state: f.state.trim().to_string(),
        district: optional(&f.district),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> RegistrationForm {
        RegistrationForm {
            first_name: "Meena".into(),
            last_name: "Devi".into(),
            email: "meena@example.org".into(),
            phone: "9876543210".into(),
            password: "s3cret".into(),
            confirm_password: "s3cret".into(),
            date_of_birth: "1990-04-12".into(),
            gender: "female".into(),
            state: "Bihar".into(),
            agree_to_terms: true,
            agree_to_privacy: true,
            ..Default::default()
        }
    }

    #[test]
    fn basic_step_requires_contact_fields() {
        let form = RegistrationForm {
            first_name: "Meena".into(),
            ..Default::default()
        };
        assert_eq!(
            form.missing(RegistrationStep::Basic),
            vec!["last name", "email", "phone"]
        );
    }

    #[test]
    fn mismatched_passwords_block_security_step() {
        let mut form = complete_form();
        form.confirm_password = "other".into();
        assert!(form.password_mismatch());
        assert_eq!(
            form.missing(RegistrationStep::Security),
            vec!["matching passwords"]
        );
    }

    #[test]
    fn unknown_state_blocks_profile_step() {
        let mut form = complete_form();
        form.state = "Atlantis".into();
        assert_eq!(form.missing(RegistrationStep::Profile), vec!["state"]);
    }

    #[test]
    fn full_flow_submits() {
        let mut wizard = Wizard::new(complete_form());
        assert_eq!(wizard.advance().unwrap(), RegistrationStep::Security);
        assert_eq!(wizard.advance().unwrap(), RegistrationStep::Profile);
        let reg = submit(&wizard).unwrap();
        assert_eq!(reg.state, "Bihar");
        assert_eq!(reg.address, None);
        let json = serde_json::to_value(&reg).unwrap();
        assert!(json.get("password").is_none());
    }

    #[test]
    fn submit_before_last_step_fails() {
        let wizard = Wizard::new(complete_form());
        assert!(submit(&wizard).is_err());
    }
}
