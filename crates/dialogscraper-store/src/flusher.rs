//! Off-thread transcript writes with per-NPC coalescing

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::thread::JoinHandle;
use tracing::{error, info, warn};

use crate::error::StoreError;
use crate::transcript::{ConversationSink, SessionStore};
use crate::types::{Conversation, DialogRecord, NpcRef};

#[derive(Default)]
struct FlushState {
    /// At most one pending batch per NPC; later conversations join it
    pending: HashMap<NpcRef, Vec<Vec<DialogRecord>>>,
    order: VecDeque<NpcRef>,
    in_flight: bool,
    closed: bool,
}

impl FlushState {
    fn is_idle(&self) -> bool {
        self.pending.is_empty() && !self.in_flight
    }
}

struct Shared {
    state: Mutex<FlushState>,
    work: Condvar,
    idle: Condvar,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, FlushState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Writes finished conversations on a worker thread so the tick loop never
/// waits on disk.
pub struct BackgroundFlusher {
    shared: Arc<Shared>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl BackgroundFlusher {
    /// Spawn the worker thread writing into `store`
    pub fn spawn(store: SessionStore) -> Result<Self, StoreError> {
        let shared = Arc::new(Shared {
            state: Mutex::new(FlushState::default()),
            work: Condvar::new(),
            idle: Condvar::new(),
        });

        let worker_shared = Arc::clone(&shared);
        let handle = std::thread::Builder::new()
            .name("dialogscraper-flush".to_string())
            .spawn(move || run_worker(&worker_shared, &store))
            .map_err(StoreError::Worker)?;

        Ok(Self {
            shared,
            worker: Mutex::new(Some(handle)),
        })
    }

    /// Number of NPC transcripts waiting to be written
    pub fn pending_len(&self) -> usize {
        self.shared.lock().pending.len()
    }

    /// Block until every submitted conversation has been written or dropped
    pub fn wait_idle(&self) {
        let mut state = self.shared.lock();
        while !state.is_idle() && !state.closed {
            state = self
                .shared
                .idle
                .wait(state)
                .unwrap_or_else(|poisoned| poisoned.into_inner());
        }
    }

    /// Drain outstanding work and stop the worker
    pub fn shutdown(&self) {
        {
            let mut state = self.shared.lock();
            state.closed = true;
        }
        self.shared.work.notify_all();

        let handle = self
            .worker
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        if let Some(handle) = handle {
            if handle.join().is_err() {
                error!("Flush worker panicked");
            }
        }
    }
}

impl ConversationSink for BackgroundFlusher {
    fn submit(&self, npc: &NpcRef, conversation: Conversation) -> Result<(), StoreError> {
        let records: Vec<DialogRecord> = conversation.iter().map(|e| e.to_record()).collect();
        {
            let mut guard = self.shared.lock();
            let state = &mut *guard;
            if state.closed {
                warn!(npc = %npc.name, "Flusher closed, conversation dropped");
                return Ok(());
            }
            match state.pending.entry(npc.clone()) {
                Entry::Occupied(mut batch) => batch.get_mut().push(records),
                Entry::Vacant(slot) => {
                    slot.insert(vec![records]);
                    state.order.push_back(npc.clone());
                }
            }
        }
        self.shared.work.notify_one();
        Ok(())
    }

    fn close(&self) {
        self.shutdown();
    }
}

impl Drop for BackgroundFlusher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_worker(shared: &Shared, store: &SessionStore) {
    loop {
        let (npc, batch) = {
            let mut state = shared.lock();
            loop {
                if let Some(npc) = state.order.pop_front() {
                    if let Some(batch) = state.pending.remove(&npc) {
                        state.in_flight = true;
                        break (npc, batch);
                    }
                    continue;
                }
                if state.closed {
                    shared.idle.notify_all();
                    return;
                }
                state = shared
                    .work
                    .wait(state)
                    .unwrap_or_else(|poisoned| poisoned.into_inner());
            }
        };

        let count = batch.len();
        match store.append_conversations(&npc, batch) {
            Ok(path) => info!(
                npc = %npc.name,
                conversations = count,
                path = %path.display(),
                "Conversations saved"
            ),
            Err(e) => error!(npc = %npc.name, conversations = count, "Flush failed: {}", e),
        }

        let mut state = shared.lock();
        state.in_flight = false;
        if state.is_idle() {
            shared.idle.notify_all();
        }
    }
}
