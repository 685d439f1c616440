//! The fixed instant the reservation countdown runs toward.
//!
//! A target is written as a wall-clock literal (`2026-07-04T00:00:00`) and
//! resolved in a zone. The default zone is the local timezone of the process,
//! so two viewers in different zones see different countdowns for the same
//! literal.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Result, SavaError};

/// Projected delivery date of the first press brake operator.
pub const DELIVERY_MILESTONE: &str = "2026-07-04T00:00:00";

/// Zone in which a target literal is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetZone {
    /// Timezone of the evaluating process
    #[default]
    Local,
    Utc,
    /// Named IANA zone, e.g. `America/Toronto`
    Named(Tz),
}

impl TargetZone {
    fn resolve(self, literal: NaiveDateTime) -> LocalResult<DateTime<Utc>> {
        match self {
            TargetZone::Local => Local
                .from_local_datetime(&literal)
                .map(|dt| dt.with_timezone(&Utc)),
            TargetZone::Utc => Utc.from_local_datetime(&literal),
            TargetZone::Named(tz) => tz
                .from_local_datetime(&literal)
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

impl FromStr for TargetZone {
    type Err = SavaError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" | "local" => Ok(TargetZone::Local),
            "utc" | "z" => Ok(TargetZone::Utc),
            _ => trimmed
                .parse::<Tz>()
                .map(TargetZone::Named)
                .map_err(|_| SavaError::unknown_timezone(trimmed)),
        }
    }
}

impl fmt::Display for TargetZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetZone::Local => f.write_str("local"),
            TargetZone::Utc => f.write_str("UTC"),
            TargetZone::Named(tz) => f.write_str(tz.name()),
        }
    }
}

/// An immutable, validated countdown target.
///
/// Construction is the only place a target can fail; once built, every
/// countdown computed against it succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetInstant {
    literal: NaiveDateTime,
    zone: TargetZone,
    instant: DateTime<Utc>,
}

impl TargetInstant {
    /// Parse a `YYYY-MM-DDTHH:MM:SS` (or bare `YYYY-MM-DD`) literal in `zone`.
    pub fn parse(literal: &str, zone: TargetZone) -> Result<Self> {
        let naive = parse_literal(literal)?;
        Self::from_naive(naive, zone)
    }

    /// Resolve an already-parsed wall-clock value in `zone`.
    ///
    /// Fails when the wall-clock time is skipped by a DST transition. A time
    /// repeated by a DST fold resolves to the earlier of the two instants.
    pub fn from_naive(literal: NaiveDateTime, zone: TargetZone) -> Result<Self> {
        let instant = match zone.resolve(literal) {
            LocalResult::Single(instant) => instant,
            LocalResult::Ambiguous(earlier, _) => earlier,
            LocalResult::None => {
                return Err(SavaError::invalid_target(
                    literal.to_string(),
                    format!("local time does not exist in {zone}"),
                ))
            }
        };

        Ok(Self {
            literal,
            zone,
            instant,
        })
    }

    /// The default target: [`DELIVERY_MILESTONE`] in the local zone.
    pub fn delivery_milestone() -> Result<Self> {
        Self::parse(DELIVERY_MILESTONE, TargetZone::Local)
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn literal(&self) -> NaiveDateTime {
        self.literal
    }

    pub fn zone(&self) -> TargetZone {
        self.zone
    }

    /// Display label such as `JULY 4, 2026`
    pub fn label(&self) -> String {
        self.literal.format("%B %-d, %Y").to_string().to_uppercase()
    }
}

fn parse_literal(literal: &str) -> Result<NaiveDateTime> {
    let trimmed = literal.trim();
    if trimmed.is_empty() {
        return Err(SavaError::invalid_target(literal, "empty date-time literal"));
    }

    if let Ok(naive) = trimmed.parse::<NaiveDateTime>() {
        return Ok(naive);
    }

    match trimmed.parse::<NaiveDate>() {
        Ok(date) => date.and_hms_opt(0, 0, 0).ok_or_else(|| {
            SavaError::invalid_target(literal, "midnight is not representable")
        }),
        Err(err) => Err(SavaError::invalid_target(
            literal,
            format!("expected YYYY-MM-DDTHH:MM:SS ({err})"),
        )),
    }
}
