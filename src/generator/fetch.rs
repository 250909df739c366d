use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use crate::event::AppEvent;
use crate::generator::{WordSource, fetch_sentence};

/// Hands out generation numbers for sentence requests. Only the most recent
/// request is live; replies carrying any other generation are stale.
#[derive(Debug, Default)]
pub struct FetchTracker {
    generation: u64,
    pending: Option<u64>,
}

impl FetchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new request, implicitly abandoning any outstanding one.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.pending = Some(self.generation);
        self.generation
    }

    /// Abandon the outstanding request, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Close the request if `generation` is the live one.
    pub fn complete(&mut self, generation: u64) -> bool {
        if self.pending == Some(generation) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

/// Fetch a sentence on a worker thread and report it as
/// [`AppEvent::SentenceFetched`]. The request itself is bounded by the
/// source's timeout; a reply nobody listens for is dropped.
pub fn spawn_fetch(source: Arc<dyn WordSource>, generation: u64, tx: Sender<AppEvent>) {
    thread::spawn(move || {
        let sentence = fetch_sentence(source.as_ref());
        tracing::debug!(generation, "sentence fetch finished");
        let _ = tx.send(AppEvent::SentenceFetched {
            generation,
            sentence,
        });
    });
}
