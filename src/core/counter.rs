use serde::{Deserialize, Serialize};

/// Monotonic source of box numbers.
///
/// Owned by the input context and never reset, so box numbers keep increasing
/// across every render performed through that context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxCounter {
    last: u64,
}

impl BoxCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Advances the counter and returns the new value. The first tick is `1`.
    pub fn tick(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    /// Last number handed out, `0` before the first tick.
    #[must_use]
    pub const fn last(self) -> u64 {
        self.last
    }
}
