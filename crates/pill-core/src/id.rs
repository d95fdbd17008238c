use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a pill. Unique for the lifetime of a session, never reused.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PillId(u64);

impl PillId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for PillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for PillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id counter shared by creation and every split.
///
/// Owned by the session and passed down explicitly; there is no
/// process-global counter. Starts at 1.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out a fresh id and advance the counter.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> PillId {
        let id = PillId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to [`IdAllocator::next`] will return.
    pub fn peek(&self) -> PillId {
        PillId(self.next)
    }
}
