use std::time::Duration;

pub const SECOND: Duration = Duration::from_secs(1);
pub const MINUTE: Duration = Duration::from_secs(60);
pub const HOUR: Duration = Duration::from_secs(60 * 60);
pub const DAY: Duration = Duration::from_secs(60 * 60 * 24);
/// A fixed 30-day month. Not calendar aware.
pub const MONTH: Duration = Duration::from_secs(60 * 60 * 24 * 30);
/// A fixed 365-day year. Not calendar aware.
pub const YEAR: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// `elapsed / unit`, rounded half up, in whole nanoseconds.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn round_in_unit(elapsed: Duration, unit: Duration) -> u64 {
    let unit = unit.as_nanos().max(1);
    let rounded = (elapsed.as_nanos() * 2 + unit) / (unit * 2);
    rounded.min(u128::from(u64::MAX)) as u64
}

/// Midpoint between `count - 1` and `count` units, i.e. where rounding flips to `count`.
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub(crate) const fn half_below(unit: Duration, count: u32) -> Duration {
    let nanos = unit.as_nanos() * (2 * count as u128 - 1) / 2;
    Duration::new((nanos / 1_000_000_000) as u64, (nanos % 1_000_000_000) as u32)
}
