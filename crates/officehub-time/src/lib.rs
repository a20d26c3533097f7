//! Simple wrappers to make many errors hard to make

#![warn(unused_crate_dependencies)]

use std::time::Duration;

/// Intended to be similar to Duration but always clear that it is in Seconds
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    PartialOrd,
    Ord,
)]
pub struct Seconds(u64);

/// Intended to be similar to Instant but keeps on ticking if the computer is
/// sleeping, only works with data/time after the unix epoch
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, PartialOrd, Ord,
)]
pub struct Timestamp(u64);

/// Millisecond resolution point in time (milliseconds since the unix epoch)
///
/// Used where the server hands us a start time and whole seconds have to be
/// counted from it without drifting by up to a second
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, PartialOrd, Ord,
)]
pub struct TimestampMillis(i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(
            web_time::SystemTime::UNIX_EPOCH
                .elapsed()
                .expect("expected date on system to be after the epoch")
                .as_secs(),
        )
    }

    /// Returns the number of seconds since `past_time` or None if `past_time`
    /// is in the future
    pub fn seconds_since(self, past_time: Self) -> Option<Seconds> {
        if self.0 < past_time.0 {
            None
        } else {
            Some(self - past_time)
        }
    }
}

impl TimestampMillis {
    pub fn now() -> Self {
        let millis = web_time::SystemTime::UNIX_EPOCH
            .elapsed()
            .expect("expected date on system to be after the epoch")
            .as_millis();
        Self(millis.try_into().unwrap_or(i64::MAX))
    }

    pub const fn from_millis(value: i64) -> Self {
        Self(value)
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// Whole seconds between `earlier` and `self` rounded down
    ///
    /// Returns zero if `earlier` is actually later than `self` (clock skew
    /// between client and server)
    pub fn whole_seconds_since(self, earlier: Self) -> Seconds {
        let diff = self.0.saturating_sub(earlier.0);
        if diff <= 0 {
            Seconds::new(0)
        } else {
            Seconds::new((diff / 1000) as u64)
        }
    }
}

impl<Tz: chrono::TimeZone> From<chrono::DateTime<Tz>> for TimestampMillis {
    fn from(value: chrono::DateTime<Tz>) -> Self {
        Self(value.timestamp_millis())
    }
}

impl std::ops::Add<Seconds> for TimestampMillis {
    type Output = Self;

    fn add(self, rhs: Seconds) -> Self::Output {
        Self(self.0 + (rhs.0 as i64) * 1000)
    }
}

impl std::ops::Sub<Seconds> for TimestampMillis {
    type Output = Self;

    fn sub(self, rhs: Seconds) -> Self::Output {
        Self(self.0 - (rhs.0 as i64) * 1000)
    }
}

impl std::ops::Add<Seconds> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Seconds) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Timestamp {
    type Output = Seconds;

    fn sub(self, rhs: Self) -> Self::Output {
        Seconds::new(self.0 - rhs.0)
    }
}

impl From<u32> for Timestamp {
    fn from(value: u32) -> Self {
        Self(value as u64)
    }
}

impl Seconds {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Formats as `HH:MM:SS`, hours are not wrapped at 24
    pub fn display_hh_mm_ss(&self) -> String {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        let seconds = self.0 % 60;
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}

impl std::ops::Add for Seconds {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl From<Seconds> for Duration {
    fn from(value: Seconds) -> Self {
        Duration::from_secs(value.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0, "00:00:00")]
    #[case::two_minutes_five(125, "00:02:05")]
    #[case::just_under_hour(3599, "00:59:59")]
    #[case::over_a_day(90061, "25:01:01")]
    fn hh_mm_ss(#[case] secs: u64, #[case] expected: &str) {
        assert_eq!(Seconds::new(secs).display_hh_mm_ss(), expected);
    }

    #[rstest]
    #[case::exact(5_000, 5)]
    #[case::rounds_down(5_999, 5)]
    #[case::sub_second(999, 0)]
    #[case::future_start(-2_500, 0)]
    fn whole_seconds_since(#[case] diff_millis: i64, #[case] expected: u64) {
        // Arrange
        let earlier = TimestampMillis::from_millis(1_700_000_000_000);
        let later = TimestampMillis::from_millis(1_700_000_000_000 + diff_millis);

        // Act
        let actual = later.whole_seconds_since(earlier);

        // Assert
        assert_eq!(actual, Seconds::new(expected));
    }
}
