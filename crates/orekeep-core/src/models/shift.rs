use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::location::LocationId;
use crate::error::{OrekeepError, Result};

/// A recurring weekly shift: one weekday, wall-clock start/end on that day,
/// the location worked at, and the hourly wage for the slot.
///
/// Fields are private so a constructed shift always satisfies `end > start`
/// and `hourly_wage >= 0`. Times carry no timezone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkShift {
    day: Weekday,
    start: NaiveTime,
    end: NaiveTime,
    location: LocationId,
    hourly_wage: f64,
}

impl WorkShift {
    pub fn new(
        day: Weekday,
        start: NaiveTime,
        end: NaiveTime,
        location: LocationId,
        hourly_wage: f64,
    ) -> Result<Self> {
        if end <= start {
            return Err(OrekeepError::ShiftEndNotAfterStart { start, end });
        }
        if hourly_wage < 0.0 {
            return Err(OrekeepError::NegativeWage { value: hourly_wage });
        }
        Ok(Self {
            day,
            start,
            end,
            location,
            hourly_wage,
        })
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn location(&self) -> &LocationId {
        &self.location
    }

    pub fn hourly_wage(&self) -> f64 {
        self.hourly_wage
    }

    /// Shift length in whole minutes. Positive by construction.
    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Shift length in hours, rounded half-up to 2 decimals.
    pub fn hours(&self) -> f64 {
        let h = self.minutes() as f64 / 60.0;
        (h * 100.0).round() / 100.0
    }
}

/// Parse a weekday given as a number 1-7 (Monday = 1) or an English name.
/// Name matching is case-insensitive and accepts unambiguous prefixes, so
/// "MON", "mon" and "Monday" all parse.
pub fn parse_weekday(input: &str) -> Result<Weekday> {
    let raw = input.trim();
    if let Ok(n) = raw.parse::<u8>() {
        if (1..=7).contains(&n) {
            return Ok(match n {
                1 => Weekday::Mon,
                2 => Weekday::Tue,
                3 => Weekday::Wed,
                4 => Weekday::Thu,
                5 => Weekday::Fri,
                6 => Weekday::Sat,
                _ => Weekday::Sun,
            });
        }
        return Err(OrekeepError::InvalidWeekday {
            input: input.to_string(),
        });
    }

    const NAMES: [(&str, Weekday); 7] = [
        ("monday", Weekday::Mon),
        ("tuesday", Weekday::Tue),
        ("wednesday", Weekday::Wed),
        ("thursday", Weekday::Thu),
        ("friday", Weekday::Fri),
        ("saturday", Weekday::Sat),
        ("sunday", Weekday::Sun),
    ];
    let lowered = raw.to_lowercase();
    // Three letters is the shortest unambiguous prefix.
    if lowered.len() >= 3 {
        for (name, day) in NAMES {
            if name.starts_with(&lowered) || lowered.starts_with(&name[..3]) {
                return Ok(day);
            }
        }
    }
    Err(OrekeepError::InvalidWeekday {
        input: input.to_string(),
    })
}

/// Parse a wall-clock time written `H:MM` or `HH:MM`.
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M").map_err(|_| OrekeepError::InvalidTime {
        input: input.to_string(),
    })
}
