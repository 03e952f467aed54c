//! Clock adapters.

use chrono::NaiveDate;

use mkpost_core::application::ports::Clock;

/// Production clock reading the local system time, date component only.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Test clock pinned to a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_its_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(FixedClock::new(date).today(), date);
    }

    #[test]
    fn system_clock_tracks_local_date() {
        // Tolerate a midnight rollover between the two reads.
        let before = chrono::Local::now().date_naive();
        let today = SystemClock::new().today();
        let after = chrono::Local::now().date_naive();
        assert!(today == before || today == after);
    }
}
