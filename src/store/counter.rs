use std::sync::atomic::{AtomicU32, Ordering};

/// Every N-th recorded chat message triggers a quote post.
pub const QUOTE_TRIGGER_THRESHOLD: u32 = 20;

/// Process-wide counter of non-command chat messages. One counter across
/// all chats the bot serves; not persisted, so a restart loses progress
/// toward the next threshold.
#[derive(Debug, Default)]
pub struct MessageCounter {
    count: AtomicU32,
}

impl MessageCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter and returns the new value.
    pub fn increment(&self) -> u32 {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }

    pub fn current(&self) -> u32 {
        self.count.load(Ordering::SeqCst)
    }

    /// Records one chat message. Returns true exactly when the threshold
    /// is reached, resetting the counter for the next round.
    pub fn record_message(&self) -> bool {
        if self.increment() >= QUOTE_TRIGGER_THRESHOLD {
            self.reset();
            true
        } else {
            false
        }
    }
}
