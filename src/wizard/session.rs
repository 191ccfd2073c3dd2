//! Single-writer wizard session for use across async boundaries.
//!
//! A spawned task owns the [`Wizard`] and applies commands from an mpsc
//! queue strictly one at a time. Handles are cheap to clone and never touch
//! the controller directly.

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use super::controller::{StepProgress, Transition, Wizard};
use super::step::StepId;
use super::WizardError;

/// Point-in-time view of a session's controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSnapshot<Id> {
    pub current_index: usize,
    pub current_id: Id,
    pub progress: Vec<StepProgress>,
}

enum Command<Id> {
    Advance(oneshot::Sender<Transition>),
    Retreat(oneshot::Sender<Transition>),
    JumpTo(usize, oneshot::Sender<Result<Transition, WizardError>>),
    Reset(oneshot::Sender<Transition>),
    Snapshot(oneshot::Sender<WizardSnapshot<Id>>),
}

pub struct WizardSession;

impl WizardSession {
    /// Move `wizard` into a background task and return a handle to it.
    ///
    /// The task ends once every handle has been dropped.
    pub fn spawn<Id>(wizard: Wizard<Id>) -> (WizardHandle<Id>, JoinHandle<Wizard<Id>>)
    where
        Id: StepId + Send + Sync + 'static,
    {
        let (tx, rx) = mpsc::channel(32);
        let task = tokio::spawn(run(wizard, rx));
        (WizardHandle { tx }, task)
    }
}

async fn run<Id: StepId>(mut wizard: Wizard<Id>, mut rx: mpsc::Receiver<Command<Id>>) -> Wizard<Id> {
    while let Some(command) = rx.recv().await {
        // A dropped reply receiver only means the caller gave up waiting
        match command {
            Command::Advance(reply) => {
                let _ = reply.send(wizard.advance());
            }
            Command::Retreat(reply) => {
                let _ = reply.send(wizard.retreat());
            }
            Command::JumpTo(index, reply) => {
                let _ = reply.send(wizard.jump_to(index));
            }
            Command::Reset(reply) => {
                let _ = reply.send(wizard.reset());
            }
            Command::Snapshot(reply) => {
                let _ = reply.send(WizardSnapshot {
                    current_index: wizard.current_index(),
                    current_id: wizard.current_id(),
                    progress: wizard.progress().map(|(_, p)| p).collect(),
                });
            }
        }
    }
    tracing::debug!("wizard session closed");
    wizard
}

/// Cloneable sender side of a [`WizardSession`]
pub struct WizardHandle<Id> {
    tx: mpsc::Sender<Command<Id>>,
}

impl<Id> Clone for WizardHandle<Id> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<Id: StepId> WizardHandle<Id> {
    pub async fn advance(&self) -> Result<Transition, WizardError> {
        self.request(Command::Advance).await
    }

    pub async fn retreat(&self) -> Result<Transition, WizardError> {
        self.request(Command::Retreat).await
    }

    pub async fn jump_to(&self, index: usize) -> Result<Transition, WizardError> {
        self.request(|reply| Command::JumpTo(index, reply)).await?
    }

    pub async fn reset(&self) -> Result<Transition, WizardError> {
        self.request(Command::Reset).await
    }

    pub async fn snapshot(&self) -> Result<WizardSnapshot<Id>, WizardError> {
        self.request(Command::Snapshot).await
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> Command<Id>,
    ) -> Result<T, WizardError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(make(reply_tx))
            .await
            .map_err(|_| WizardError::SessionClosed)?;
        reply_rx.await.map_err(|_| WizardError::SessionClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::Step;

    fn wizard() -> Wizard<&'static str> {
        Wizard::from_steps(vec![
            Step::new("a", "A", ""),
            Step::new("b", "B", ""),
            Step::new("c", "C", ""),
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_session_applies_commands_in_order() {
        let (handle, task) = WizardSession::spawn(wizard());

        handle.advance().await.unwrap();
        handle.advance().await.unwrap();
        let t = handle.advance().await.unwrap();
        assert!(!t.changed());

        let snap = handle.snapshot().await.unwrap();
        assert_eq!(snap.current_index, 2);
        assert_eq!(snap.current_id, "c");
        assert_eq!(
            snap.progress,
            vec![
                StepProgress::Completed,
                StepProgress::Completed,
                StepProgress::Active
            ]
        );

        drop(handle);
        let wizard = task.await.unwrap();
        assert_eq!(wizard.current_index(), 2);
    }

    #[tokio::test]
    async fn test_session_reports_out_of_range_jump() {
        let (handle, _task) = WizardSession::spawn(wizard());

        handle.jump_to(1).await.unwrap();
        let err = handle.jump_to(7).await.unwrap_err();
        assert_eq!(err, WizardError::OutOfRange { index: 7, len: 3 });
        assert_eq!(handle.snapshot().await.unwrap().current_index, 1);
    }

    #[tokio::test]
    async fn test_concurrent_handles_keep_bounds() {
        let (handle, task) = WizardSession::spawn(wizard());

        let mut joins = Vec::new();
        for i in 0..20 {
            let h = handle.clone();
            joins.push(tokio::spawn(async move {
                if i % 3 == 0 {
                    h.retreat().await
                } else {
                    h.advance().await
                }
            }));
        }
        for j in joins {
            j.await.unwrap().unwrap();
        }

        let snap = handle.snapshot().await.unwrap();
        assert!(snap.current_index < 3);

        drop(handle);
        task.await.unwrap();
    }

    #[tokio::test]
    async fn test_closed_session_reports_error() {
        let (handle, task) = WizardSession::spawn(wizard());
        task.abort();
        let _ = task.await;

        assert_eq!(handle.reset().await.unwrap_err(), WizardError::SessionClosed);
    }
}
