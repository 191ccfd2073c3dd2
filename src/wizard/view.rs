//! Contract between the host and the per-step views

use super::controller::{Transition, Wizard};
use super::step::StepId;

/// A view mounted for one wizard step.
///
/// Readiness is computed from the view's own local state only. The
/// controller never looks inside a view; the host asks the active view and
/// advances on its behalf.
pub trait StepView {
    /// Whether the view's local validation passes
    fn is_ready(&self) -> bool;

    /// Short hint shown while the view is not ready
    fn blocked_reason(&self) -> Option<&'static str> {
        None
    }
}

/// Advance `wizard` if `view` reports itself ready.
///
/// Returns `None` when the view blocked the move.
pub fn advance_when_ready<Id, V>(wizard: &mut Wizard<Id>, view: &V) -> Option<Transition>
where
    Id: StepId,
    V: StepView + ?Sized,
{
    if view.is_ready() {
        Some(wizard.advance())
    } else {
        tracing::debug!(
            step = %wizard.current_id(),
            reason = view.blocked_reason().unwrap_or("not ready"),
            "advance blocked by step view"
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::Step;

    struct Gate(bool);

    impl StepView for Gate {
        fn is_ready(&self) -> bool {
            self.0
        }
    }

    fn wizard() -> Wizard<&'static str> {
        Wizard::from_steps(vec![Step::new("a", "A", ""), Step::new("b", "B", "")]).unwrap()
    }

    #[test]
    fn test_blocked_view_does_not_advance() {
        let mut w = wizard();
        assert!(advance_when_ready(&mut w, &Gate(false)).is_none());
        assert_eq!(w.current_index(), 0);
    }

    #[test]
    fn test_ready_view_advances() {
        let mut w = wizard();
        let t = advance_when_ready(&mut w, &Gate(true)).unwrap();
        assert!(t.changed());
        assert_eq!(w.current_index(), 1);
    }

    #[test]
    fn test_ready_view_on_last_step_saturates() {
        let mut w = wizard();
        w.advance();
        let t = advance_when_ready(&mut w, &Gate(true)).unwrap();
        assert!(!t.changed());
    }
}
