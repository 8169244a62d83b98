//! Step navigation for multi-step forms.
//!
//! DESIGN
//! ======
//! The wizard owns only navigation (current step, furthest step reached,
//! errors for the current step). Form data lives in the `StepForm`
//! implementor, so the same wizard drives any draft type.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

/// A form split into validated steps.
pub trait StepForm {
    /// One title per step; its length is the step count.
    const STEP_TITLES: &'static [&'static str];

    /// Messages for every unmet rule of `step`; empty means valid.
    fn validate_step(&self, step: usize) -> Vec<String>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Wizard {
    pub current: usize,
    pub furthest: usize,
    pub errors: Vec<String>,
}

impl Wizard {
    pub fn step_count<F: StepForm>() -> usize {
        F::STEP_TITLES.len()
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last<F: StepForm>(&self) -> bool {
        self.current + 1 >= F::STEP_TITLES.len()
    }

    pub fn title<F: StepForm>(&self) -> &'static str {
        F::STEP_TITLES.get(self.current).copied().unwrap_or_default()
    }

    /// Completion bar value for the current step.
    pub fn progress_percent<F: StepForm>(&self) -> u8 {
        let count = F::STEP_TITLES.len().max(1);
        let pct = ((self.current + 1) * 100 / count).min(100);
        u8::try_from(pct).unwrap_or(100)
    }

    /// Advance when the current step validates; otherwise stay and expose errors.
    pub fn next<F: StepForm>(&mut self, form: &F) -> bool {
        let errors = form.validate_step(self.current);
        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }
        self.errors.clear();
        if self.is_last::<F>() {
            return false;
        }
        self.current += 1;
        self.furthest = self.furthest.max(self.current);
        true
    }

    pub fn back(&mut self) -> bool {
        self.errors.clear();
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jump to `step`. Backwards is always allowed; forwards only when every
    /// step before the target validates.
    pub fn go_to<F: StepForm>(&mut self, step: usize, form: &F) -> bool {
        if step >= F::STEP_TITLES.len() {
            return false;
        }
        if step <= self.current {
            self.current = step;
            self.errors.clear();
            return true;
        }
        for earlier in self.current..step {
            let errors = form.validate_step(earlier);
            if !errors.is_empty() {
                self.current = earlier;
                self.errors = errors;
                return false;
            }
        }
        self.current = step;
        self.furthest = self.furthest.max(step);
        self.errors.clear();
        true
    }

    /// Validate every step; on failure park on the first failing step.
    pub fn submit<F: StepForm>(&mut self, form: &F) -> Result<(), Vec<String>> {
        for step in 0..F::STEP_TITLES.len() {
            let errors = form.validate_step(step);
            if !errors.is_empty() {
                self.current = step;
                self.errors.clone_from(&errors);
                return Err(errors);
            }
        }
        self.errors.clear();
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
