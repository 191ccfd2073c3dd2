//! Linear wizard controller.
//!
//! Owns the active step index over an immutable [`StepRegistry`] and only
//! permits adjacent moves or explicit in-range jumps. Moves past either end
//! saturate silently; the only fallible operation is an absolute jump.

use super::step::{Step, StepId, StepRegistry};
use super::WizardError;

/// Rendering class of a step relative to the active one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepProgress {
    Completed,
    Active,
    Upcoming,
}

/// Index change produced by a controller operation.
///
/// Saturating calls report `from == to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

#[derive(Debug, Clone)]
pub struct Wizard<Id> {
    registry: StepRegistry<Id>,
    current: usize,
}

impl<Id: StepId> Wizard<Id> {
    /// Start a wizard at the first step
    pub fn new(registry: StepRegistry<Id>) -> Self {
        Self {
            registry,
            current: 0,
        }
    }

    pub fn from_steps(steps: Vec<Step<Id>>) -> Result<Self, WizardError> {
        StepRegistry::new(steps).map(Self::new)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &Step<Id> {
        // `current` is kept in range by every mutation below
        &self.registry.steps()[self.current]
    }

    pub fn current_id(&self) -> Id {
        self.current_step().id
    }

    pub fn steps(&self) -> &[Step<Id>] {
        self.registry.steps()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.registry.len()
    }

    pub fn position_of(&self, id: Id) -> Option<usize> {
        self.registry.position_of(id)
    }

    /// Move one step forward; a no-op on the last step
    pub fn advance(&mut self) -> Transition {
        let from = self.current;
        if self.current + 1 < self.registry.len() {
            self.current += 1;
        }
        self.record(from)
    }

    /// Move one step back; a no-op on the first step
    pub fn retreat(&mut self) -> Transition {
        let from = self.current;
        if self.current > 0 {
            self.current -= 1;
        }
        self.record(from)
    }

    /// Jump to an absolute index, leaving state untouched when out of range
    pub fn jump_to(&mut self, index: usize) -> Result<Transition, WizardError> {
        let len = self.registry.len();
        if index >= len {
            tracing::debug!(index, len, "rejected out-of-range wizard jump");
            return Err(WizardError::OutOfRange { index, len });
        }
        let from = self.current;
        self.current = index;
        Ok(self.record(from))
    }

    pub fn jump_to_step(&mut self, id: Id) -> Result<Transition, WizardError> {
        let index = self
            .registry
            .position_of(id)
            .ok_or_else(|| WizardError::UnknownStep(id.to_string()))?;
        self.jump_to(index)
    }

    pub fn reset(&mut self) -> Transition {
        let from = self.current;
        self.current = 0;
        self.record(from)
    }

    /// Classify `index` against the active step
    pub fn progress_of(&self, index: usize) -> StepProgress {
        use std::cmp::Ordering;

        match index.cmp(&self.current) {
            Ordering::Less => StepProgress::Completed,
            Ordering::Equal => StepProgress::Active,
            Ordering::Greater => StepProgress::Upcoming,
        }
    }

    /// Every step paired with its progress class, in order
    pub fn progress(&self) -> impl Iterator<Item = (&Step<Id>, StepProgress)> + '_ {
        self.registry
            .steps()
            .iter()
            .enumerate()
            .map(|(i, step)| (step, self.progress_of(i)))
    }

    /// Badge text such as "Step 2 of 5: AI Processing"
    pub fn step_counter(&self) -> String {
        format!(
            "Step {} of {}: {}",
            self.current + 1,
            self.registry.len(),
            self.current_step().label
        )
    }

    fn record(&self, from: usize) -> Transition {
        let transition = Transition {
            from,
            to: self.current,
        };
        if transition.changed() {
            tracing::debug!(
                from = transition.from,
                to = transition.to,
                step = %self.current_id(),
                "wizard transition"
            );
        }
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_steps() -> Wizard<&'static str> {
        Wizard::from_steps(vec![
            Step::new("s0", "Zero", ""),
            Step::new("s1", "One", ""),
            Step::new("s2", "Two", ""),
            Step::new("s3", "Three", ""),
            Step::new("s4", "Four", ""),
        ])
        .unwrap()
    }

    #[test]
    fn test_starts_at_first_step() {
        let wizard = five_steps();
        assert_eq!(wizard.current_index(), 0);
        assert!(wizard.is_first());
        assert!(!wizard.is_last());
        assert_eq!(wizard.current_id(), "s0");
    }

    #[test]
    fn test_advance_saturates_at_last_step() {
        let mut wizard = five_steps();
        for _ in 0..3 {
            wizard.advance();
        }
        assert_eq!(wizard.current_index(), 3);

        let t = wizard.advance();
        assert_eq!(t, Transition { from: 3, to: 4 });
        assert!(wizard.is_last());

        let t = wizard.advance();
        assert!(!t.changed());
        assert_eq!(wizard.current_index(), 4);
    }

    #[test]
    fn test_retreat_saturates_at_first_step() {
        let mut wizard = five_steps();
        wizard.jump_to(4).unwrap();
        for _ in 0..4 {
            assert!(wizard.retreat().changed());
        }
        assert_eq!(wizard.current_index(), 0);

        let t = wizard.retreat();
        assert_eq!(t, Transition { from: 0, to: 0 });
        assert_eq!(wizard.current_index(), 0);
    }

    #[test]
    fn test_jump_to_out_of_range_keeps_state() {
        let mut wizard = five_steps();
        wizard.jump_to(2).unwrap();
        assert_eq!(wizard.current_index(), 2);

        let err = wizard.jump_to(10).unwrap_err();
        assert_eq!(err, WizardError::OutOfRange { index: 10, len: 5 });
        assert_eq!(wizard.current_index(), 2);

        assert!(wizard.jump_to(5).is_err());
        assert_eq!(wizard.current_index(), 2);
    }

    #[test]
    fn test_jump_to_step_by_id() {
        let mut wizard = five_steps();
        wizard.jump_to_step("s3").unwrap();
        assert_eq!(wizard.current_index(), 3);

        let err = wizard.jump_to_step("nope").unwrap_err();
        assert_eq!(err, WizardError::UnknownStep("nope".to_string()));
        assert_eq!(wizard.current_index(), 3);
    }

    #[test]
    fn test_reset_returns_to_first_step() {
        let mut wizard = five_steps();
        wizard.jump_to(3).unwrap();
        let t = wizard.reset();
        assert_eq!(t, Transition { from: 3, to: 0 });
        assert_eq!(wizard.current_index(), 0);
    }

    #[test]
    fn test_progress_of_partitions_steps() {
        let mut wizard = five_steps();
        wizard.jump_to(2).unwrap();

        assert_eq!(wizard.progress_of(0), StepProgress::Completed);
        assert_eq!(wizard.progress_of(1), StepProgress::Completed);
        assert_eq!(wizard.progress_of(2), StepProgress::Active);
        assert_eq!(wizard.progress_of(3), StepProgress::Upcoming);
        assert_eq!(wizard.progress_of(4), StepProgress::Upcoming);

        let classes: Vec<_> = wizard.progress().map(|(_, p)| p).collect();
        assert_eq!(classes.len(), 5);
    }

    #[test]
    fn test_step_counter_text() {
        let mut wizard = five_steps();
        wizard.advance();
        assert_eq!(wizard.step_counter(), "Step 2 of 5: One");
    }

    #[test]
    fn test_single_step_wizard_is_first_and_last() {
        let mut wizard = Wizard::from_steps(vec![Step::new("only", "Only", "")]).unwrap();
        assert!(wizard.is_first());
        assert!(wizard.is_last());
        assert!(!wizard.advance().changed());
        assert!(!wizard.retreat().changed());
    }
}
