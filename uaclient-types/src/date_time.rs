use std::time::{SystemTime, UNIX_EPOCH};

const TICKS_PER_MILLISECOND: i64 = 10_000;
/* 1970-01-01 in 100ns ticks since 1601-01-01 */
const UNIX_EPOCH_TICKS: i64 = 116_444_736_000_000_000;

/// An OPC UA timestamp: 100 nanosecond intervals since 1601-01-01 UTC.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    ticks: i64,
}

impl DateTime {
    pub const fn new(ticks: i64) -> Self {
        Self { ticks }
    }

    /// The current time. Clocks set before 1970 read as the unix epoch.
    pub fn now() -> Self {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self::new(UNIX_EPOCH_TICKS + (since_epoch.as_nanos() / 100) as i64)
    }

    pub fn from_unix_millis(millis: u64) -> Self {
        Self::new(UNIX_EPOCH_TICKS + millis as i64 * TICKS_PER_MILLISECOND)
    }

    pub fn ticks(&self) -> i64 {
        self.ticks
    }

    /// Milliseconds since the unix epoch, `None` for earlier timestamps
    pub fn unix_millis(&self) -> Option<u64> {
        let ticks = self.ticks.checked_sub(UNIX_EPOCH_TICKS)?;
        u64::try_from(ticks / TICKS_PER_MILLISECOND).ok()
    }
}
