// src/services/snapshot_writer.rs
//
// Snapshot Writer - serialized background persistence
//
// CRITICAL RULES:
// - One background task, one slot
// - Queue depth is 1: a new snapshot replaces the pending one
// - Failures are logged, never retried, never propagated
// - Callers never wait for a write unless they ask to via flush()

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::repositories::KeyValueRepository;

#[derive(Debug, Clone)]
struct PendingSnapshot {
    generation: u64,
    payload: String,
}

pub struct SnapshotWriter {
    pending: watch::Sender<Option<PendingSnapshot>>,
    completed: watch::Receiver<u64>,
    issued: AtomicU64,
}

impl SnapshotWriter {
    /// Start the writer task for one key.
    ///
    /// Must be called from within a Tokio runtime. The task exits once the
    /// writer is dropped and any snapshot still pending has been written.
    pub fn spawn(repository: Arc<dyn KeyValueRepository>, key: String) -> Self {
        let (pending_tx, pending_rx) = watch::channel(None);
        let (completed_tx, completed_rx) = watch::channel(0);

        tokio::spawn(run_writer(repository, key, pending_rx, completed_tx));

        Self {
            pending: pending_tx,
            completed: completed_rx,
            issued: AtomicU64::new(0),
        }
    }

    /// Queue a snapshot, replacing any snapshot not yet picked up.
    /// Returns the generation assigned to it.
    ///
    /// Callers must serialize submissions so generations reach the task in
    /// order.
    pub fn submit(&self, payload: String) -> u64 {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.pending.send_replace(Some(PendingSnapshot {
            generation,
            payload,
        }));
        generation
    }

    /// Generation of the last snapshot handed to `submit`
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    /// Generation of the last snapshot the task finished with
    pub fn completed(&self) -> u64 {
        *self.completed.borrow()
    }

    /// Wait until every snapshot submitted so far has been written or has
    /// failed. Coalesced snapshots count as done once a newer one lands.
    pub async fn flush(&self) {
        let target = self.issued();
        let mut completed = self.completed.clone();

        if completed.wait_for(|done| *done >= target).await.is_err() {
            log::error!("Snapshot writer stopped before generation {} was written", target);
        }
    }
}

async fn run_writer(
    repository: Arc<dyn KeyValueRepository>,
    key: String,
    mut pending: watch::Receiver<Option<PendingSnapshot>>,
    completed: watch::Sender<u64>,
) {
    while pending.changed().await.is_ok() {
        let Some(snapshot) = pending.borrow_and_update().clone() else {
            continue;
        };

        let generation = snapshot.generation;
        let repo = Arc::clone(&repository);
        let slot = key.clone();

        let result =
            tokio::task::spawn_blocking(move || repo.set(&slot, &snapshot.payload)).await;

        match result {
            Ok(Ok(())) => log::debug!("Saved snapshot #{} to '{}'", generation, key),
            Ok(Err(e)) => log::error!("Failed to save watch-list snapshot #{}: {}", generation, e),
            Err(e) => log::error!("Snapshot write #{} did not complete: {}", generation, e),
        }

        completed.send_replace(generation);
    }
}
