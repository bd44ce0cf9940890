//! Primitive wrapper that records overlapping `init` calls

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use descsp_algorithms::{DesMode, DesPrimitive, DesState, Result, StdDes};

/// Counters shared between a test and every [`TrackingDes`] it hands out
#[derive(Debug, Default)]
pub struct InitTracker {
    inside: AtomicUsize,
    max_inside: AtomicUsize,
    entries: AtomicUsize,
}

impl InitTracker {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Highest number of threads seen inside `init` at the same time
    pub fn max_overlap(&self) -> usize {
        self.max_inside.load(Ordering::SeqCst)
    }

    /// Total `init` calls
    pub fn entries(&self) -> usize {
        self.entries.load(Ordering::SeqCst)
    }
}

/// [`StdDes`] whose `init` lingers long enough for races to show
#[derive(Debug, Clone)]
pub struct TrackingDes {
    tracker: Arc<InitTracker>,
    linger: Duration,
}

impl TrackingDes {
    pub fn new(tracker: &Arc<InitTracker>, linger: Duration) -> Self {
        Self {
            tracker: Arc::clone(tracker),
            linger,
        }
    }
}

impl DesPrimitive for TrackingDes {
    type State = DesState;

    fn name(&self) -> &'static str {
        "tracking-des"
    }

    fn init(&self, state: &mut DesState, mode: DesMode) -> Result<()> {
        let tracker = &self.tracker;
        tracker.entries.fetch_add(1, Ordering::SeqCst);
        let now = tracker.inside.fetch_add(1, Ordering::SeqCst) + 1;
        tracker.max_inside.fetch_max(now, Ordering::SeqCst);

        thread::sleep(self.linger);
        let result = StdDes.init(state, mode);

        tracker.inside.fetch_sub(1, Ordering::SeqCst);
        result
    }

    fn load_subkey(&self, state: &mut DesState, key: &[u8; 8]) {
        StdDes.load_subkey(state, key);
    }

    fn encrypt_in_place(&self, state: &DesState, block: &mut [u8; 8]) {
        StdDes.encrypt_in_place(state, block);
    }

    fn decrypt_in_place(&self, state: &DesState, block: &mut [u8; 8]) {
        StdDes.decrypt_in_place(state, block);
    }

    fn release(&self, state: &mut DesState) {
        StdDes.release(state);
    }
}
