//! The five-step "add a product" flow

use std::fmt;

use crate::wizard::{Step, StepRegistry, Wizard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingStep {
    Upload,
    Processing,
    Results,
    Review,
    Export,
}

impl ListingStep {
    pub fn all() -> &'static [ListingStep] {
        &[
            ListingStep::Upload,
            ListingStep::Processing,
            ListingStep::Results,
            ListingStep::Review,
            ListingStep::Export,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            ListingStep::Upload => "upload",
            ListingStep::Processing => "processing",
            ListingStep::Results => "results",
            ListingStep::Review => "review",
            ListingStep::Export => "export",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListingStep::Upload => "Upload",
            ListingStep::Processing => "AI Processing",
            ListingStep::Results => "Results",
            ListingStep::Review => "Review",
            ListingStep::Export => "Export",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ListingStep::Upload => "Add your product",
            ListingStep::Processing => "AI magic happens",
            ListingStep::Results => "View AI output",
            ListingStep::Review => "Edit & refine",
            ListingStep::Export => "Ready to publish",
        }
    }

    /// Glyph drawn inside the progress marker while the step is not completed
    pub fn glyph(&self) -> &'static str {
        match self {
            ListingStep::Upload => "⇪",
            ListingStep::Processing => "⚙",
            ListingStep::Results => "◉",
            ListingStep::Review => "✎",
            ListingStep::Export => "⇩",
        }
    }
}

impl fmt::Display for ListingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

pub fn listing_registry() -> StepRegistry<ListingStep> {
    let steps = ListingStep::all()
        .iter()
        .map(|s| Step::new(*s, s.label(), s.description()))
        .collect();
    // Ids come from a fixed, distinct enum list
    match StepRegistry::new(steps) {
        Ok(registry) => registry,
        Err(e) => unreachable!("listing steps are distinct and non-empty: {e}"),
    }
}

pub fn listing_wizard() -> Wizard<ListingStep> {
    Wizard::new(listing_registry())
}
