//! Reusable linear step wizard.
//!
//! - [`StepRegistry`]: ordered, immutable step descriptors
//! - [`Wizard`]: the navigation state machine over a registry
//! - [`StepView`]: readiness contract implemented by per-step views
//! - [`WizardSession`]: single-writer wrapper for async callers

mod controller;
mod error;
mod session;
mod step;
mod view;

pub use controller::{StepProgress, Transition, Wizard};
pub use error::WizardError;
pub use session::{WizardHandle, WizardSession, WizardSnapshot};
pub use step::{Step, StepId, StepRegistry};
pub use view::{advance_when_ready, StepView};
