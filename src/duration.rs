// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO-8601 duration parsing.
//!
//! Covers the integer-only subset of the ISO-8601 duration grammar used to
//! express data-source periodicities:
//!
//! ```text
//! P(nY)?(nM)?(nW)?(nD)?(T(nH)?(nM)?(nS)?)?
//! ```
//!
//! All components are optional; absent components parse as zero. A bare
//! `"P"` or `"PT"` is grammatically valid and yields an all-zero duration.
//! Fractional components, lowercase designators, and out-of-order
//! components are rejected.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const ISO_DURATION_PATTERN: &str =
    r"^P(?:(\d+)Y)?(?:(\d+)M)?(?:(\d+)W)?(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$";

fn iso_duration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ISO_DURATION_PATTERN).unwrap())
}

/// A calendar/time unit recognized in an ISO-8601 duration.
///
/// The variant order is the fixed priority order for display: humanized
/// output always lists components from largest to smallest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    /// All seven units, largest to smallest.
    pub fn all() -> &'static [Unit; 7] {
        &[
            Unit::Year,
            Unit::Month,
            Unit::Week,
            Unit::Day,
            Unit::Hour,
            Unit::Minute,
            Unit::Second,
        ]
    }

    /// Message key for the single-unit "rate" phrase ("Yearly",
    /// "Every 2 years").
    pub fn period_key(&self) -> &'static str {
        match self {
            Unit::Year => "yearPeriod",
            Unit::Month => "monthPeriod",
            Unit::Week => "weekPeriod",
            Unit::Day => "dayPeriod",
            Unit::Hour => "hourPeriod",
            Unit::Minute => "minutePeriod",
            Unit::Second => "secondPeriod",
        }
    }

    /// Message key for the list-item phrase ("2 years") used when a
    /// duration has more than one active unit.
    pub fn unit_key(&self) -> &'static str {
        match self {
            Unit::Year => "yearPeriodUnit",
            Unit::Month => "monthPeriodUnit",
            Unit::Week => "weekPeriodUnit",
            Unit::Day => "dayPeriodUnit",
            Unit::Hour => "hourPeriodUnit",
            Unit::Minute => "minutePeriodUnit",
            Unit::Second => "secondPeriodUnit",
        }
    }
}

/// A parsed ISO-8601 duration: seven non-negative integer magnitudes,
/// one per recognized unit. Immutable once parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsoDuration {
    pub years: u64,
    pub months: u64,
    pub weeks: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl IsoDuration {
    /// Parses an ISO-8601 duration string.
    ///
    /// Returns `None` when the input does not match the supported grammar.
    /// Absent components default to zero, so `"P"` and `"PT"` both parse
    /// to an all-zero duration. A magnitude that overflows `u64` is
    /// treated as a non-match.
    ///
    /// # Examples
    /// ```
    /// use periodicity::IsoDuration;
    /// let d = IsoDuration::parse("P1Y2M").unwrap();
    /// assert_eq!(d.years, 1);
    /// assert_eq!(d.months, 2);
    /// assert_eq!(d.seconds, 0);
    /// assert!(IsoDuration::parse("1Y").is_none());
    /// assert!(IsoDuration::parse("P1.5Y").is_none());
    /// ```
    pub fn parse(input: &str) -> Option<IsoDuration> {
        let caps = iso_duration_regex().captures(input)?;
        let group = |i: usize| -> Option<u64> {
            match caps.get(i) {
                Some(m) => m.as_str().parse::<u64>().ok(),
                None => Some(0),
            }
        };
        Some(IsoDuration {
            years: group(1)?,
            months: group(2)?,
            weeks: group(3)?,
            days: group(4)?,
            hours: group(5)?,
            minutes: group(6)?,
            seconds: group(7)?,
        })
    }

    /// The magnitude of a single unit.
    pub fn magnitude(&self, unit: Unit) -> u64 {
        match unit {
            Unit::Year => self.years,
            Unit::Month => self.months,
            Unit::Week => self.weeks,
            Unit::Day => self.days,
            Unit::Hour => self.hours,
            Unit::Minute => self.minutes,
            Unit::Second => self.seconds,
        }
    }

    /// True when every magnitude is zero.
    pub fn is_zero(&self) -> bool {
        Unit::all().iter().all(|&u| self.magnitude(u) == 0)
    }

    /// The non-zero (unit, magnitude) pairs, largest unit first.
    pub fn active_units(&self) -> Vec<(Unit, u64)> {
        Unit::all()
            .iter()
            .map(|&u| (u, self.magnitude(u)))
            .filter(|&(_, n)| n > 0)
            .collect()
    }
}
