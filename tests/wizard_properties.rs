//! Navigation properties of the step wizard
//!
//! Every operation sequence up to a fixed length is replayed against a
//! plain index model, for wizards of several sizes.

use artisan_assistant::wizard::{Step, StepProgress, Wizard, WizardError, WizardSession};

const IDS: &[&str] = &["upload", "processing", "results", "review", "export"];

fn wizard(len: usize) -> Wizard<&'static str> {
    let steps = IDS[..len]
        .iter()
        .map(|id| Step::new(*id, id.to_uppercase(), format!("{} step", id)))
        .collect();
    Wizard::from_steps(steps).unwrap()
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Advance,
    Retreat,
    Reset,
    JumpTo(usize),
}

fn all_ops(len: usize) -> Vec<Op> {
    let mut ops = vec![Op::Advance, Op::Retreat, Op::Reset];
    // Include out-of-range targets
    ops.extend((0..len + 2).map(Op::JumpTo));
    ops
}

/// Apply `op` to both the wizard and the model index
fn apply(wizard: &mut Wizard<&'static str>, model: &mut usize, op: Op) {
    let len = wizard.len();
    let before = wizard.current_index();
    match op {
        Op::Advance => {
            let t = wizard.advance();
            *model = (*model + 1).min(len - 1);
            assert_eq!(t.from, before);
            assert_eq!(t.to, *model);
        }
        Op::Retreat => {
            let t = wizard.retreat();
            *model = model.saturating_sub(1);
            assert_eq!(t.to, *model);
        }
        Op::Reset => {
            wizard.reset();
            *model = 0;
        }
        Op::JumpTo(i) => match wizard.jump_to(i) {
            Ok(t) => {
                assert!(i < len);
                assert_eq!(t.to, i);
                *model = i;
            }
            Err(e) => {
                assert!(i >= len);
                assert_eq!(e, WizardError::OutOfRange { index: i, len });
            }
        },
    }
}

fn check_invariants(wizard: &Wizard<&'static str>, model: usize) {
    let len = wizard.len();
    let current = wizard.current_index();
    assert_eq!(current, model);
    assert!(current < len);
    assert_eq!(wizard.current_id(), IDS[current]);

    for i in 0..len {
        let expected = if i < current {
            StepProgress::Completed
        } else if i == current {
            StepProgress::Active
        } else {
            StepProgress::Upcoming
        };
        assert_eq!(wizard.progress_of(i), expected, "step {} of {}", i, len);
    }
    let active = wizard
        .progress()
        .filter(|(_, p)| *p == StepProgress::Active)
        .count();
    assert_eq!(active, 1);
}

fn replay_all(len: usize, depth: usize) {
    let ops = all_ops(len);
    let total = ops.len().pow(depth as u32);
    for mut code in 0..total {
        let mut w = wizard(len);
        let mut model = 0;
        for _ in 0..depth {
            let op = ops[code % ops.len()];
            code /= ops.len();
            apply(&mut w, &mut model, op);
            check_invariants(&w, model);
        }
    }
}

#[test]
fn test_every_short_sequence_stays_in_range() {
    for len in 1..=IDS.len() {
        replay_all(len, 4);
    }
}

#[test]
fn test_single_step_wizard_never_moves() {
    let mut w = wizard(1);
    assert!(w.is_first() && w.is_last());
    assert!(!w.advance().changed());
    assert!(!w.retreat().changed());
    assert_eq!(w.current_index(), 0);
}

#[test]
fn test_advance_and_retreat_saturate() {
    let mut w = wizard(5);
    for _ in 0..3 {
        w.advance();
    }
    assert_eq!(w.current_index(), 3);
    w.advance();
    assert_eq!(w.current_index(), 4);
    w.advance();
    assert_eq!(w.current_index(), 4);

    for _ in 0..4 {
        w.retreat();
    }
    assert_eq!(w.current_index(), 0);
    w.retreat();
    assert_eq!(w.current_index(), 0);
}

#[test]
fn test_jump_out_of_range_keeps_position() {
    let mut w = wizard(5);
    w.jump_to(2).unwrap();
    assert_eq!(w.current_index(), 2);

    let err = w.jump_to(10).unwrap_err();
    assert_eq!(err, WizardError::OutOfRange { index: 10, len: 5 });
    assert_eq!(w.current_index(), 2);
}

#[test]
fn test_reset_from_every_index() {
    for start in 0..5 {
        let mut w = wizard(5);
        w.jump_to(start).unwrap();
        let t = w.reset();
        assert_eq!(t.from, start);
        assert_eq!(w.current_index(), 0);
    }
}

#[test]
fn test_jump_to_step_by_id() {
    let mut w = wizard(5);
    w.jump_to_step("review").unwrap();
    assert_eq!(w.current_index(), 3);
    assert!(matches!(
        w.jump_to_step("publish"),
        Err(WizardError::UnknownStep(_))
    ));
    assert_eq!(w.current_index(), 3);
}

#[test]
fn test_invalid_registries_are_rejected() {
    assert_eq!(
        Wizard::<&str>::from_steps(vec![]).unwrap_err(),
        WizardError::EmptyRegistry
    );

    let dup = vec![Step::new("a", "A", ""), Step::new("a", "A again", "")];
    assert!(matches!(
        Wizard::from_steps(dup),
        Err(WizardError::DuplicateStep(_))
    ));
}

#[tokio::test]
async fn test_session_serializes_commands() {
    let (handle, task) = WizardSession::spawn(wizard(5));

    let clones: Vec<_> = (0..10).map(|_| handle.clone()).collect();
    let mut joins = Vec::new();
    for h in clones {
        joins.push(tokio::spawn(async move { h.advance().await }));
    }
    for join in joins {
        join.await.unwrap().unwrap();
    }

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.current_index, 4);
    assert_eq!(snapshot.current_id, "export");
    assert_eq!(
        snapshot.progress,
        vec![
            StepProgress::Completed,
            StepProgress::Completed,
            StepProgress::Completed,
            StepProgress::Completed,
            StepProgress::Active,
        ]
    );

    assert_eq!(
        handle.jump_to(7).await,
        Err(WizardError::OutOfRange { index: 7, len: 5 })
    );
    handle.reset().await.unwrap();
    drop(handle);

    let wizard = task.await.unwrap();
    assert_eq!(wizard.current_index(), 0);
}
