use std::ops::{Add, AddAssign, Sub, SubAssign};

use chrono::{Local, Timelike};

/// Wall-clock time of day stored as whole minutes since midnight.
///
/// The counter is not wrapped, so a run that starts late keeps a monotonic
/// clock past 24:00; only the display representation rolls over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Time(u32);

impl From<u32> for Time {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Sub<Time> for Time {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Self::Output {
        Duration(self.0 - rhs.0)
    }
}

impl Add<Duration> for Time {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign<Duration> for Time {
    fn add_assign(&mut self, rhs: Duration) {
        self.0 += rhs.0
    }
}

impl Time {
    pub fn now() -> Self {
        let now = Local::now();
        Self(now.num_seconds_from_midnight() / 60)
    }

    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    pub const fn from_hm(hours: u32, minutes: u32) -> Self {
        Self(hours * 60 + minutes)
    }

    pub const fn as_minutes(&self) -> u32 {
        self.0
    }

    /// 24-hour `HH:mm`, rolling over past midnight.
    pub fn to_hm_string(&self) -> String {
        let h = (self.0 / 60) % 24;
        let m = self.0 % 60;
        format!("{:02}:{:02}", h, m)
    }

    pub fn parse_hm(time: &str) -> Option<Self> {
        const MINUTES_PER_HOUR: u32 = 60;
        let mut split = time.split(':');
        let hours: u32 = split.next()?.parse().ok()?;
        let minutes: u32 = split.next()?.parse().ok()?;
        if split.next().is_some() || minutes >= MINUTES_PER_HOUR {
            return None;
        }
        Some(Self(hours * MINUTES_PER_HOUR + minutes))
    }
}

#[test]
fn parse_unparse_midnight() {
    let time = "00:00";
    let stime = Time::parse_hm(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn parse_unparse_half_past() {
    let time = "00:30";
    let stime = Time::parse_hm(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn parse_unparse_noon() {
    let time = "12:00";
    let stime = Time::parse_hm(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn valid_time_test_1() {
    let time = "00:05";
    assert_eq!(Time::parse_hm(time).unwrap().as_minutes(), 5);
}

#[test]
fn valid_time_test_2() {
    let time = "08:30";
    assert_eq!(Time::parse_hm(time).unwrap().as_minutes(), 510);
}

#[test]
fn invalid_time_not_numeric() {
    let time = "00:0a";
    assert!(Time::parse_hm(time).is_none())
}

#[test]
fn invalid_time_missing_minutes() {
    let time = "08";
    assert!(Time::parse_hm(time).is_none())
}

#[test]
fn invalid_time_with_seconds() {
    let time = "08:30:00";
    assert!(Time::parse_hm(time).is_none())
}

#[test]
fn invalid_time_minutes_out_of_range() {
    let time = "08:75";
    assert!(Time::parse_hm(time).is_none())
}

#[test]
fn display_rolls_over_midnight() {
    let time = Time::from_hm(32, 15);
    assert_eq!(time.to_hm_string(), "08:15");
}

#[test]
fn clock_arithmetic_test() {
    let mut clock = Time::from_hm(8, 59);
    clock += Duration::from_minutes(1);
    assert_eq!(clock.to_hm_string(), "09:00");
    assert_eq!(clock - Time::from_hm(8, 0), Duration::from_minutes(60));
}

/// Span of whole minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration(u32);

impl From<u32> for Duration {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Duration {
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    pub const fn from_hours(hours: u32) -> Self {
        Self(hours * 60)
    }

    pub const fn as_minutes(&self) -> u32 {
        self.0
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}
