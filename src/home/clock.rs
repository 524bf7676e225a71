//! Home surface clock.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::time::{Duration, Instant};

/// How often the clock text is refreshed.
pub const CLOCK_INTERVAL: Duration = Duration::from_secs(1);

/// Shortest interval a [`ClockTimer`] accepts.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Format a time as 24-hour `HH:MM`.
pub fn format_time<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    now.format("%H:%M").to_string()
}

/// Format a date as e.g. `Monday, January 01`.
pub fn format_date<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    now.format("%A, %B %d").to_string()
}

/// Text shown by the clock display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClockDisplay {
    /// `HH:MM`.
    pub time: String,
    /// Weekday, month and day.
    pub date: String,
}

impl ClockDisplay {
    /// Refresh the text from `now`.
    pub fn update<Tz: TimeZone>(&mut self, now: &DateTime<Tz>)
    where
        Tz::Offset: Display,
    {
        self.time = format_time(now);
        self.date = format_date(now);
    }
}

/// Repeating timer polled by the host event loop.
///
/// Once cancelled it never fires again.
#[derive(Debug, Clone)]
pub struct ClockTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl ClockTimer {
    /// Start a timer whose first tick is one interval after `now`.
    ///
    /// Intervals shorter than [`MIN_INTERVAL`] are raised to it.
    pub fn start(interval: Duration, now: Instant) -> Self {
        let interval = interval.max(MIN_INTERVAL);
        Self {
            interval,
            next_due: Some(now + interval),
        }
    }

    /// Whether the timer is due at `now`. A due timer is rescheduled.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                // Skip missed ticks rather than firing a burst.
                let missed = (now - due).as_nanos() / self.interval.as_nanos();
                let ahead = self.interval.as_nanos() * (missed + 1);
                self.next_due = Some(due + Duration::from_nanos(ahead as u64));
                true
            },
            _ => false,
        }
    }

    /// Stop the timer for good.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Whether [`ClockTimer::cancel`] was called.
    pub fn is_cancelled(&self) -> bool {
        self.next_due.is_none()
    }

    /// Time until the next tick, if any.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn time_is_24_hour_with_leading_zeros() {
        let morning = Utc.with_ymd_and_hms(2024, 3, 4, 9, 5, 59).unwrap();
        assert_eq!(format_time(&morning), "09:05");
        let evening = Utc.with_ymd_and_hms(2024, 3, 4, 21, 30, 0).unwrap();
        assert_eq!(format_time(&evening), "21:30");
    }

    #[test]
    fn date_names_weekday_and_month() {
        let day = Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap();
        assert_eq!(format_date(&day), "Monday, March 04");
    }

    #[test]
    fn display_update_sets_both_lines() {
        let mut display = ClockDisplay::default();
        display.update(&Utc.with_ymd_and_hms(2024, 12, 25, 0, 0, 0).unwrap());
        assert_eq!(display.time, "00:00");
        assert_eq!(display.date, "Wednesday, December 25");
    }

    #[test]
    fn timer_fires_once_per_interval() {
        let start = Instant::now();
        let mut timer = ClockTimer::start(CLOCK_INTERVAL, start);

        assert!(!timer.poll(start));
        assert!(!timer.poll(start + Duration::from_millis(999)));
        assert!(timer.poll(start + Duration::from_secs(1)));
        assert!(!timer.poll(start + Duration::from_millis(1500)));
        assert!(timer.poll(start + Duration::from_secs(2)));
    }

    #[test]
    fn timer_skips_missed_ticks() {
        let start = Instant::now();
        let mut timer = ClockTimer::start(CLOCK_INTERVAL, start);

        assert!(timer.poll(start + Duration::from_millis(5500)));
        assert!(!timer.poll(start + Duration::from_millis(5600)));
        assert_eq!(
            timer.remaining(start + Duration::from_millis(5500)),
            Some(Duration::from_millis(500))
        );
    }

    #[test]
    fn zero_interval_is_raised_to_minimum() {
        let start = Instant::now();
        let mut timer = ClockTimer::start(Duration::ZERO, start);

        assert_eq!(timer.remaining(start), Some(MIN_INTERVAL));
        assert!(timer.poll(start + Duration::from_millis(1)));
        assert!(!timer.poll(start + Duration::from_millis(1)));
        assert!(timer.poll(start + Duration::from_secs(60)));
        assert_eq!(
            timer.remaining(start + Duration::from_secs(60)),
            Some(MIN_INTERVAL)
        );
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let start = Instant::now();
        let mut timer = ClockTimer::start(CLOCK_INTERVAL, start);
        timer.cancel();
        assert!(timer.is_cancelled());
        assert!(!timer.poll(start + Duration::from_secs(10)));
        assert_eq!(timer.remaining(start), None);
    }
}
