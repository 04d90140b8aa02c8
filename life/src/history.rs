// history.rs - Detect when a run has settled into a repeating state

use std::collections::VecDeque;

use crate::LiveSet;

pub const DEFAULT_HISTORY_LEN: usize = 10;

/// Remembers the fingerprints of the last few generations.
///
/// Catches still lifes and oscillators whose period fits in the window.
/// Moving patterns such as gliders never repeat a fingerprint.
#[derive(Debug, Clone)]
pub struct CycleDetector {
    recent: VecDeque<u64>,
    capacity: usize,
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_LEN)
    }
}

impl CycleDetector {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            recent: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns `true` if `live` matches one of the remembered generations.
    /// Otherwise records it, evicting the oldest entry when full.
    pub fn observe(&mut self, live: &LiveSet) -> bool {
        let fingerprint = live.fingerprint();
        if self.recent.contains(&fingerprint) {
            return true;
        }
        if self.recent.len() == self.capacity {
            self.recent.pop_front();
        }
        self.recent.push_back(fingerprint);
        false
    }

    pub fn clear(&mut self) {
        self.recent.clear();
    }
}
