//! Row-level records flowing through the enrichment pipeline.

/// One row of the input dataset, reduced to the columns matching needs.
///
/// Blank cells are stored as `None` so callers never have to distinguish
/// between a missing column and an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRecord {
    pub organization_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub organization_website_url: Option<String>,
}

impl InputRecord {
    /// Builds a record from raw cell values, treating blank cells as absent.
    #[must_use]
    pub fn from_cells(
        organization_name: Option<&str>,
        city: Option<&str>,
        state: Option<&str>,
        organization_website_url: Option<&str>,
    ) -> Self {
        Self {
            organization_name: non_blank(organization_name),
            city: non_blank(city),
            state: non_blank(state),
            organization_website_url: non_blank(organization_website_url),
        }
    }

    /// The location used for the search query: city when present, else state.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.city.as_deref().or(self.state.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// Weekend operation category derived from a place's weekly hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekendStatus {
    /// Open on both Saturday and Sunday.
    Operational,
    Saturday,
    Sunday,
    NotOperational,
}

impl WeekendStatus {
    #[must_use]
    pub fn from_flags(saturday_open: bool, sunday_open: bool) -> Self {
        match (saturday_open, sunday_open) {
            (true, true) => WeekendStatus::Operational,
            (true, false) => WeekendStatus::Saturday,
            (false, true) => WeekendStatus::Sunday,
            (false, false) => WeekendStatus::NotOperational,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            WeekendStatus::Operational => "Operational",
            WeekendStatus::Saturday => "Sat",
            WeekendStatus::Sunday => "Sun",
            WeekendStatus::NotOperational => "Not Operational",
        }
    }
}

impl std::fmt::Display for WeekendStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields derived from a matched place.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedFields {
    pub place_name: Option<String>,
    pub maps_link: String,
    pub place_id: String,
    pub formatted_address: Option<String>,
    pub phone: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub website: Option<String>,
    /// `true` only when both websites are present and share a domain.
    pub website_matched: bool,
    pub business_status: Option<String>,
    pub primary_type: Option<String>,
    /// Close time of the first Monday–Friday period that has one, as `HH:MM`.
    pub weekday_closing: Option<String>,
    pub weekend_status: Option<WeekendStatus>,
}

/// An input row together with whatever enrichment it received.
///
/// `fields` is `None` for rows that were skipped, not evaluated, or did not
/// match a place.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    pub input: InputRecord,
    pub fields: Option<EnrichedFields>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_cells_treats_blank_cells_as_absent() {
        let record = InputRecord::from_cells(Some("  "), Some(""), None, Some(" acme.com "));
        assert!(record.organization_name.is_none());
        assert!(record.city.is_none());
        assert!(record.state.is_none());
        assert_eq!(record.organization_website_url.as_deref(), Some("acme.com"));
    }

    #[test]
    fn location_prefers_city() {
        let record = InputRecord::from_cells(Some("Acme"), Some("Austin"), Some("TX"), None);
        assert_eq!(record.location(), Some("Austin"));
    }

    #[test]
    fn location_falls_back_to_state() {
        let record = InputRecord::from_cells(Some("Acme"), Some(""), Some("TX"), None);
        assert_eq!(record.location(), Some("TX"));
    }

    #[test]
    fn location_absent_when_neither_present() {
        let record = InputRecord::from_cells(Some("Acme"), None, None, None);
        assert!(record.location().is_none());
    }

    #[test]
    fn weekend_status_from_flags() {
        assert_eq!(WeekendStatus::from_flags(true, true), WeekendStatus::Operational);
        assert_eq!(WeekendStatus::from_flags(true, false), WeekendStatus::Saturday);
        assert_eq!(WeekendStatus::from_flags(false, true), WeekendStatus::Sunday);
        assert_eq!(
            WeekendStatus::from_flags(false, false),
            WeekendStatus::NotOperational
        );
    }

    #[test]
    fn weekend_status_renders_column_values() {
        assert_eq!(WeekendStatus::Operational.to_string(), "Operational");
        assert_eq!(WeekendStatus::Saturday.to_string(), "Sat");
        assert_eq!(WeekendStatus::Sunday.to_string(), "Sun");
        assert_eq!(WeekendStatus::NotOperational.to_string(), "Not Operational");
    }
}
