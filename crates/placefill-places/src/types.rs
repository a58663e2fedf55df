//! Shape-agnostic place types.
//!
//! Every upstream response shape is converted into these types by its adapter
//! in [`crate::shapes`], so the resolver and the summarizers never see raw
//! API JSON.

/// Day index used by the places API: `0` is Sunday, `6` is Saturday.
pub type DayIndex = u8;

pub const SUNDAY: DayIndex = 0;
pub const MONDAY: DayIndex = 1;
pub const FRIDAY: DayIndex = 5;
pub const SATURDAY: DayIndex = 6;

/// A wall-clock time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    /// Parses the legacy API's four-digit `"HHMM"` form (e.g. `"1730"`).
    ///
    /// Returns `None` for anything that is not four ASCII digits forming a
    /// time up to `24:00`.
    #[must_use]
    pub fn parse_hhmm(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let hour: u8 = raw[..2].parse().ok()?;
        let minute: u8 = raw[2..].parse().ok()?;
        if hour > 24 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// One end of an opening period.
///
/// `time` is `None` when the upstream value could not be read; the day is
/// still meaningful on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodPoint {
    pub day: DayIndex,
    pub time: Option<ClockTime>,
}

/// An opening period. A period without `close` means the place is open
/// around the clock starting at `open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningPeriod {
    pub open: PeriodPoint,
    pub close: Option<PeriodPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyHours {
    pub periods: Vec<OpeningPeriod>,
}

/// A place record as returned by a text search or details lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceCandidate {
    pub id: String,
    pub display_name: Option<String>,
    pub formatted_address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub rating: Option<f64>,
    pub rating_count: Option<u32>,
    /// Upstream status string, e.g. `"OPERATIONAL"` or `"CLOSED_PERMANENTLY"`.
    pub business_status: Option<String>,
    pub primary_type: Option<String>,
    pub google_maps_uri: Option<String>,
    pub opening_hours: Option<WeeklyHours>,
}

impl PlaceCandidate {
    /// Link to the place on Google Maps.
    ///
    /// Uses the URI returned by the API when there is one, otherwise builds
    /// the `place_id` query link.
    #[must_use]
    pub fn maps_link(&self) -> String {
        self.google_maps_uri.clone().unwrap_or_else(|| {
            format!("https://www.google.com/maps/place/?q=place_id:{}", self.id)
        })
    }

    /// Merges a details lookup into this candidate.
    ///
    /// Every field the details record carries overwrites the search result's
    /// value; fields absent from the details record are left untouched.
    pub fn merge_details(&mut self, details: PlaceCandidate) {
        if !details.id.is_empty() {
            self.id = details.id;
        }
        overwrite(&mut self.display_name, details.display_name);
        overwrite(&mut self.formatted_address, details.formatted_address);
        overwrite(&mut self.phone, details.phone);
        overwrite(&mut self.website, details.website);
        overwrite(&mut self.rating, details.rating);
        overwrite(&mut self.rating_count, details.rating_count);
        overwrite(&mut self.business_status, details.business_status);
        overwrite(&mut self.primary_type, details.primary_type);
        overwrite(&mut self.google_maps_uri, details.google_maps_uri);
        overwrite(&mut self.opening_hours, details.opening_hours);
    }
}

fn overwrite<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}
