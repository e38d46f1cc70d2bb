/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Handle to one spawned worker task.

use crate::worker::{CancelHandle, WorkerExit, WorkerKind};
use tokio::task::JoinHandle;
use tracing::error;

/// A registered worker: its identity, its cancellation handle and its task.
#[derive(Debug)]
pub struct WorkerHandle {
    id: String,
    kind: WorkerKind,
    cancel: CancelHandle,
    task: JoinHandle<WorkerExit>,
}

impl WorkerHandle {
    pub(crate) fn new(
        id: String,
        kind: WorkerKind,
        cancel: CancelHandle,
        task: JoinHandle<WorkerExit>,
    ) -> Self {
        Self {
            id,
            kind,
            cancel,
            task,
        }
    }

    /// Worker identity.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Worker kind.
    #[must_use]
    pub fn kind(&self) -> WorkerKind {
        self.kind
    }

    /// Signals cancellation without waiting.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns `true` if the task has already returned.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the task and returns its identity and exit state.
    ///
    /// A panicked or aborted task is reported as [`WorkerExit::Failed`].
    pub async fn join(self) -> (String, WorkerExit) {
        let exit = match self.task.await {
            Ok(exit) => exit,
            Err(e) => {
                error!(worker = %self.id, error = %e, "worker task failed");
                WorkerExit::Failed
            }
        };
        (self.id, exit)
    }
}
