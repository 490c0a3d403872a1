//! Time zone converter anchored on India Standard Time.
//!
//! DESIGN
//! ======
//! The page slider is a count of minutes after midnight in IST. We turn it
//! into the UTC instant whose Kolkata wall clock shows that time on the
//! reference date, then format the same instant in each selected IANA zone.
//! Zone data comes from `chrono-tz`, so DST in the target zones is handled
//! by the tz database rather than by fixed offsets.

#[cfg(test)]
#[path = "timezone_test.rs"]
mod timezone_test;

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::ToolError;

pub const IST: Tz = chrono_tz::Asia::Kolkata;
pub const IST_OFFSET_MINUTES: i64 = 330;
pub const MINUTES_PER_DAY: u16 = 1440;
/// Granularity of the page slider, in minutes.
pub const SLIDER_STEP: u16 = 15;

/// Zones shown before the visitor picks any.
pub const DEFAULT_ZONES: [&str; 4] = ["America/New_York", "Europe/London", "Australia/Sydney", "America/Toronto"];

/// Zones offered in the picker, ordered by how often students ask for them.
pub const POPULAR_ZONES: [&str; 14] = [
    "America/New_York",
    "America/Chicago",
    "America/Los_Angeles",
    "America/Toronto",
    "America/Vancouver",
    "Europe/London",
    "Europe/Dublin",
    "Europe/Berlin",
    "Europe/Paris",
    "Australia/Sydney",
    "Australia/Melbourne",
    "Pacific/Auckland",
    "Asia/Singapore",
    "Asia/Dubai",
];

/// One rendered clock on the converter page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneCard {
    pub zone: String,
    pub city: String,
    /// Wall-clock time as `HH:MM`.
    pub time: String,
    pub abbreviation: String,
    pub utc_offset: String,
    /// Calendar day relative to the IST date: -1, 0 or +1.
    pub day_shift: i64,
}

impl ZoneCard {
    /// Caption such as `+1 day`; empty on the same day.
    #[must_use]
    pub fn day_label(&self) -> &'static str {
        match self.day_shift {
            d if d > 0 => "+1 day",
            d if d < 0 => "-1 day",
            _ => "",
        }
    }
}

#[must_use]
pub fn clamp_slider(minutes: u16) -> u16 {
    minutes.min(MINUTES_PER_DAY - 1)
}

/// UTC instant whose IST wall clock reads `slider` minutes past midnight on `date`.
#[must_use]
pub fn reference_instant(date: NaiveDate, slider: u16) -> DateTime<Utc> {
    let minutes = i64::from(clamp_slider(slider));
    let ist_wall = date.and_time(chrono::NaiveTime::MIN) + TimeDelta::minutes(minutes);
    Utc.from_utc_datetime(&(ist_wall - TimeDelta::minutes(IST_OFFSET_MINUTES)))
}

/// Today's calendar date in IST.
#[must_use]
pub fn ist_today(now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&IST).date_naive()
}

/// Minutes past IST midnight at `now`, for seeding the slider.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn ist_minute_of_day(now: DateTime<Utc>) -> u16 {
    let local = now.with_timezone(&IST);
    (local.hour() * 60 + local.minute()) as u16
}

/// Slider position for `now`: the IST minute of day rounded down to a step.
#[must_use]
pub fn slider_seed(now: DateTime<Utc>) -> u16 {
    let minutes = ist_minute_of_day(now);
    clamp_slider(minutes - minutes % SLIDER_STEP)
}

#[must_use]
pub fn zone_card(instant: DateTime<Utc>, zone: Tz, ist_date: NaiveDate) -> ZoneCard {
    let local = instant.with_timezone(&zone);
    ZoneCard {
        zone: zone.name().to_owned(),
        city: city_name(zone.name()),
        time: local.format("%H:%M").to_string(),
        abbreviation: local.format("%Z").to_string(),
        utc_offset: local.format("%:z").to_string(),
        day_shift: (local.date_naive() - ist_date).num_days().clamp(-1, 1),
    }
}

/// The IST card for a slider value.
#[must_use]
pub fn ist_card(date: NaiveDate, slider: u16) -> ZoneCard {
    zone_card(reference_instant(date, slider), IST, date)
}

/// Cards for every selected zone at the slider time.
#[must_use]
pub fn zone_cards(date: NaiveDate, slider: u16, selection: &ZoneSelection) -> Vec<ZoneCard> {
    let instant = reference_instant(date, slider);
    selection.zones().iter().map(|tz| zone_card(instant, *tz, date)).collect()
}

/// Resolve an IANA identifier such as `Europe/London`.
///
/// # Errors
///
/// Returns [`ToolError::UnknownZone`] when the identifier is not in the tz database.
pub fn parse_zone(raw: &str) -> Result<Tz, ToolError> {
    let trimmed = raw.trim();
    trimmed.parse::<Tz>().map_err(|_| ToolError::UnknownZone(trimmed.to_owned()))
}

/// `America/New_York` -> `New York`.
#[must_use]
pub fn city_name(zone: &str) -> String {
    zone.rsplit('/').next().unwrap_or(zone).replace('_', " ")
}

/// 12-hour caption for the slider thumb, e.g. `9:30 AM`.
#[must_use]
pub fn format_slider_label(minutes: u16) -> String {
    let minutes = clamp_slider(minutes);
    let hour = minutes / 60;
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12}:{:02} {suffix}", minutes % 60)
}

/// Ordered, duplicate-free set of zones picked by the visitor.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneSelection {
    zones: Vec<Tz>,
}

impl Default for ZoneSelection {
    fn default() -> Self {
        Self { zones: DEFAULT_ZONES.iter().filter_map(|z| parse_zone(z).ok()).collect() }
    }
}

impl ZoneSelection {
    #[must_use]
    pub fn empty() -> Self {
        Self { zones: Vec::new() }
    }

    #[must_use]
    pub fn zones(&self) -> &[Tz] {
        &self.zones
    }

    #[must_use]
    pub fn contains(&self, zone: Tz) -> bool {
        self.zones.contains(&zone)
    }

    /// Append `zone`; returns `false` if it was already selected or is IST.
    pub fn add(&mut self, zone: Tz) -> bool {
        if zone == IST || self.contains(zone) {
            return false;
        }
        self.zones.push(zone);
        true
    }

    /// Remove `zone`; returns `false` if it was not selected.
    pub fn remove(&mut self, zone: Tz) -> bool {
        let before = self.zones.len();
        self.zones.retain(|z| *z != zone);
        self.zones.len() != before
    }
}
