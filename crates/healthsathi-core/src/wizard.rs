//! Multi-step form flows.
//!
//! A [`Form`] declares its steps as a fixed, ordered list and a validation
//! predicate per step. A [`Wizard`] owns the form plus the current step
//! index, and only moves forward once the current step validates. Moving
//! back is always allowed.
//!
//! ```text
//!   Step 1 ──advance()──▶ Step 2 ──advance()──▶ … ──▶ Step N
//!     ▲                      │
//!     └──────back()──────────┘
//! ```

use std::fmt;

use thiserror::Error;

/// A form filled in over several ordered steps.
pub trait Form {
    type Step: Copy + Eq + fmt::Debug + fmt::Display + 'static;

    /// Every step, in order. Must not be empty.
    const STEPS: &'static [Self::Step];

    /// Unmet requirements of `step`. Empty when the step is complete.
    fn missing(&self, step: Self::Step) -> Vec<&'static str>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError<S: fmt::Debug + fmt::Display> {
    #[error("step '{step}' is incomplete: {}", .missing.join(", "))]
    Incomplete {
        step: S,
        missing: Vec<&'static str>,
    },

    #[error("already at the last step '{0}'")]
    AtLastStep(S),
}

/// A form plus its position in the step sequence.
#[derive(Debug, Clone)]
pub struct Wizard<F: Form> {
    form: F,
    index: usize,
}

impl<F: Form> Wizard<F> {
    pub fn new(form: F) -> Self {
        debug_assert!(!F::STEPS.is_empty(), "a form needs at least one step");
        Self { form, index: 0 }
    }

    pub fn step(&self) -> F::Step {
        F::STEPS[self.index]
    }

    /// Zero-based position of the current step.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn step_count(&self) -> usize {
        F::STEPS.len()
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == F::STEPS.len()
    }

    /// Fraction of the flow reached, counting the current step: `(index + 1) / steps`.
    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / F::STEPS.len() as f64
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn into_form(self) -> F {
        self.form
    }

    /// Unmet requirements of the current step.
    pub fn missing(&self) -> Vec<&'static str> {
        self.form.missing(self.step())
    }

    pub fn can_advance(&self) -> bool {
        !self.is_last() && self.missing().is_empty()
    }

    /// Move to the next step if the current one validates.
    pub fn advance(&mut self) -> Result<F::Step, WizardError<F::Step>> {
        let step = self.step();
        if self.is_last() {
            return Err(WizardError::AtLastStep(step));
        }
        let missing = self.form.missing(step);
        if !missing.is_empty() {
            return Err(WizardError::Incomplete { step, missing });
        }
        self.index += 1;
        Ok(self.step())
    }

    /// Move to the previous step. Stays put on the first step.
    pub fn back(&mut self) -> F::Step {
        self.index = self.index.saturating_sub(1);
        self.step()
    }

    /// Check every step in order, reporting the first incomplete one.
    pub fn validate_all(&self) -> Result<(), WizardError<F::Step>> {
        for &step in F::STEPS {
            let missing = self.form.missing(step);
            if !missing.is_empty() {
                return Err(WizardError::Incomplete { step, missing });
            }
        }
        Ok(())
    }
}

impl<F: Form + Default> Wizard<F> {
    /// Back to the first step with an empty form.
    pub fn reset(&mut self) {
        self.form = F::default();
        self.index = 0;
    }
}

impl<F: Form + Default> Default for Wizard<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Step {
        Name,
        Confirm,
    }

    impl fmt::Display for Step {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(match self {
                Step::Name => "name",
                Step::Confirm => "confirm",
            })
        }
    }

    #[derive(Debug, Default)]
    struct Toy {
        name: String,
        confirmed: bool,
    }

    impl Form for Toy {
        type Step = Step;
        const STEPS: &'static [Step] = &[Step::Name, Step::Confirm];

        fn missing(&self, step: Step) -> Vec<&'static str> {
            match step {
                Step::Name if self.name.is_empty() => vec!["name"],
                Step::Confirm if !self.confirmed => vec!["confirmation"],
                _ => Vec::new(),
            }
        }
    }

    #[test]
    fn advance_is_gated_by_validation() {
        let mut w = Wizard::<Toy>::default();
        assert_eq!(w.step(), Step::Name);
        let err = w.advance().unwrap_err();
        assert_eq!(
            err,
            WizardError::Incomplete {
                step: Step::Name,
                missing: vec!["name"]
            }
        );
        assert_eq!(err.to_string(), "step 'name' is incomplete: name");
        assert_eq!(w.step(), Step::Name);

        w.form_mut().name = "Asha".into();
        assert!(w.can_advance());
        assert_eq!(w.advance().unwrap(), Step::Confirm);
        assert!(w.is_last());
    }

    #[test]
    fn cannot_advance_past_last_step() {
        let mut w = Wizard::new(Toy {
            name: "Asha".into(),
            confirmed: true,
        });
        w.advance().unwrap();
        assert_eq!(w.advance(), Err(WizardError::AtLastStep(Step::Confirm)));
        assert!(!w.can_advance());
    }

    #[test]
    fn back_saturates_at_first_step() {
        let mut w = Wizard::new(Toy {
            name: "Asha".into(),
            confirmed: false,
        });
        assert_eq!(w.back(), Step::Name);
        w.advance().unwrap();
        assert_eq!(w.back(), Step::Name);
        assert!(w.is_first());
    }

    #[test]
    fn progress_and_reset() {
        let mut w = Wizard::new(Toy {
            name: "Asha".into(),
            confirmed: false,
        });
        assert!((w.progress() - 0.5).abs() < 1e-9);
        w.advance().unwrap();
        assert!((w.progress() - 1.0).abs() < 1e-9);
        w.reset();
        assert_eq!(w.index(), 0);
        assert!(w.form().name.is_empty());
    }

    #[test]
    fn validate_all_reports_first_gap() {
        let w = Wizard::new(Toy {
            name: "Asha".into(),
            confirmed: false,
        });
        assert_eq!(
            w.validate_all(),
            Err(WizardError::Incomplete {
                step: Step::Confirm,
                missing: vec!["confirmation"]
            })
        );
    }
}
