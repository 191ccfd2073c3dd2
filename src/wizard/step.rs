//! Step descriptors and the ordered registry a wizard is built from

use std::fmt;

use super::WizardError;

/// Identifier type for wizard steps.
///
/// Implemented for anything small, comparable and printable, which in
/// practice means a fieldless enum or a `&'static str`.
pub trait StepId: Copy + Eq + fmt::Debug + fmt::Display {}

impl<T> StepId for T where T: Copy + Eq + fmt::Debug + fmt::Display {}

/// One ordered stage of a flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<Id> {
    pub id: Id,
    pub label: String,
    pub description: String,
}

impl<Id: StepId> Step<Id> {
    pub fn new(id: Id, label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            description: description.into(),
        }
    }
}

/// Immutable, ordered list of steps with unique ids
#[derive(Debug, Clone)]
pub struct StepRegistry<Id> {
    steps: Vec<Step<Id>>,
}

impl<Id: StepId> StepRegistry<Id> {
    /// Build a registry, rejecting empty sequences and repeated ids
    pub fn new(steps: Vec<Step<Id>>) -> Result<Self, WizardError> {
        if steps.is_empty() {
            return Err(WizardError::EmptyRegistry);
        }

        for (i, step) in steps.iter().enumerate() {
            if steps[..i].iter().any(|earlier| earlier.id == step.id) {
                return Err(WizardError::DuplicateStep(step.id.to_string()));
            }
        }

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Step<Id>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: construction rejects empty registries
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step<Id>> {
        self.steps.get(index)
    }

    pub fn position_of(&self, id: Id) -> Option<usize> {
        self.steps.iter().position(|s| s.id == id)
    }
}
