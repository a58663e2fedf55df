//! Derived output columns.

use placefill_core::{EnrichedFields, EnrichedRecord};

use super::table::Table;

pub(crate) const OUTPUT_COLUMNS: [&str; 13] = [
    "google_maps_name",
    "google_maps_link",
    "place_id",
    "formatted_address",
    "phone_number",
    "rating",
    "user_ratings_total",
    "website",
    "website_matched",
    "business_status",
    "weekday_closing",
    "weekend_status",
    "primary_type",
];

/// Cell values for one row, in [`OUTPUT_COLUMNS`] order. Unmatched rows
/// get empty cells throughout.
pub(crate) fn row_cells(fields: Option<&EnrichedFields>) -> [String; OUTPUT_COLUMNS.len()] {
    let Some(f) = fields else {
        return Default::default();
    };
    let text = |v: &Option<String>| v.clone().unwrap_or_default();

    [
        text(&f.place_name),
        f.maps_link.clone(),
        f.place_id.clone(),
        text(&f.formatted_address),
        text(&f.phone),
        f.rating.map(|r| format!("{r:.1}")).unwrap_or_default(),
        f.review_count.map(|n| n.to_string()).unwrap_or_default(),
        text(&f.website),
        f.website_matched.to_string(),
        text(&f.business_status),
        text(&f.weekday_closing),
        f.weekend_status
            .map(|s| s.as_str().to_owned())
            .unwrap_or_default(),
        text(&f.primary_type),
    ]
}

/// Writes every derived column into `table`, one value per record.
pub(crate) fn apply(table: &mut Table, records: &[EnrichedRecord]) {
    let rows: Vec<_> = records
        .iter()
        .map(|r| row_cells(r.fields.as_ref()))
        .collect();

    for (idx, column) in OUTPUT_COLUMNS.iter().enumerate() {
        let values = rows.iter().map(|cells| cells[idx].clone()).collect();
        table.set_column(column, values);
    }
}
