//! The `enrich` command: read a dataset, resolve each row to a place, and
//! write the enhanced table.

mod columns;
mod output;
mod table;

use std::path::PathBuf;

use anyhow::Context;
use placefill_core::{AppConfig, EnrichedFields, EnrichedRecord, InputRecord};
use placefill_places::{
    summarize_hours, websites_match, PlaceCandidate, PlaceResolver, PlacesClient, Resolution,
};

use self::table::Table;

/// Rows evaluated when the run is in test mode.
pub(crate) const TEST_MODE_ROW_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub(crate) struct EnrichOptions {
    pub(crate) input: PathBuf,
    pub(crate) output: Option<PathBuf>,
    pub(crate) test_mode: bool,
}

/// Per-run row counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RunStats {
    pub(crate) evaluated: usize,
    pub(crate) matched: usize,
    pub(crate) unmatched: usize,
    pub(crate) failed: usize,
    pub(crate) skipped: usize,
    pub(crate) not_evaluated: usize,
}

pub(crate) async fn run_enrich(
    config: &AppConfig,
    options: &EnrichOptions,
) -> anyhow::Result<PathBuf> {
    let mut table = Table::read(&options.input)
        .with_context(|| format!("failed to read input file {}", options.input.display()))?;
    tracing::info!(
        path = %options.input.display(),
        rows = table.len(),
        columns = table.headers().len(),
        "loaded input file"
    );
    if options.test_mode {
        tracing::info!(
            limit = TEST_MODE_ROW_LIMIT,
            "test mode: only the first rows are looked up (pass --all for every row)"
        );
    }

    let client = PlacesClient::from_config(config).context("failed to build places client")?;
    let resolver = PlaceResolver::new(client, config.fetch_details);

    let records = table.input_records();
    let (enriched, stats) = enrich_records(&resolver, records, options.test_mode).await;
    columns::apply(&mut table, &enriched);

    let primary = options
        .output
        .clone()
        .unwrap_or_else(|| output::default_output_path(&options.input));
    let written = output::write_with_fallback(&table, &primary)?;

    tracing::info!(
        path = %written.display(),
        evaluated = stats.evaluated,
        matched = stats.matched,
        unmatched = stats.unmatched,
        failed = stats.failed,
        skipped = stats.skipped,
        not_evaluated = stats.not_evaluated,
        "enhanced data saved"
    );
    println!(
        "Enhanced data saved to {} ({} matched of {} evaluated)",
        written.display(),
        stats.matched,
        stats.evaluated
    );

    Ok(written)
}

/// Resolves records one at a time, in order. Every input record comes back
/// in the same position; in test mode only the first
/// [`TEST_MODE_ROW_LIMIT`] are looked up.
pub(crate) async fn enrich_records(
    resolver: &PlaceResolver,
    records: Vec<InputRecord>,
    test_mode: bool,
) -> (Vec<EnrichedRecord>, RunStats) {
    let limit = if test_mode {
        TEST_MODE_ROW_LIMIT
    } else {
        records.len()
    };

    let mut stats = RunStats::default();
    let mut enriched = Vec::with_capacity(records.len());

    for (row, input) in records.into_iter().enumerate() {
        let fields = if row < limit {
            stats.evaluated += 1;
            enrich_record(resolver, row, &input, &mut stats).await
        } else {
            stats.not_evaluated += 1;
            None
        };
        enriched.push(EnrichedRecord { input, fields });
    }

    (enriched, stats)
}

async fn enrich_record(
    resolver: &PlaceResolver,
    row: usize,
    input: &InputRecord,
    stats: &mut RunStats,
) -> Option<EnrichedFields> {
    let Some(org_name) = input.organization_name.as_deref() else {
        tracing::warn!(row, "skipping row with no organization name");
        stats.skipped += 1;
        return None;
    };
    let Some(location) = input.location() else {
        tracing::warn!(row, org_name, "skipping row with neither city nor state");
        stats.skipped += 1;
        return None;
    };

    let website = input.organization_website_url.as_deref();
    match resolver.resolve(org_name, location, website).await {
        Resolution::Matched(candidate) => {
            stats.matched += 1;
            let fields = derive_fields(candidate, website);
            print_match_summary(org_name, website, &fields);
            Some(fields)
        }
        Resolution::NoResults => {
            stats.unmatched += 1;
            None
        }
        Resolution::Failed(e) => {
            stats.failed += 1;
            tracing::warn!(row, org_name, error = %e, "row left without a match");
            None
        }
    }
}

/// Flattens a matched place into output fields.
pub(crate) fn derive_fields(candidate: PlaceCandidate, input_website: Option<&str>) -> EnrichedFields {
    let hours = summarize_hours(candidate.opening_hours.as_ref());
    let website_matched = match (input_website, candidate.website.as_deref()) {
        (Some(ours), Some(theirs)) if !ours.trim().is_empty() && !theirs.trim().is_empty() => {
            websites_match(ours, theirs)
        }
        _ => false,
    };

    EnrichedFields {
        maps_link: candidate.maps_link(),
        place_id: candidate.id,
        place_name: candidate.display_name,
        formatted_address: candidate.formatted_address,
        phone: candidate.phone,
        rating: candidate.rating,
        review_count: candidate.rating_count,
        website: candidate.website,
        website_matched,
        business_status: candidate.business_status,
        primary_type: candidate.primary_type,
        weekday_closing: hours.weekday_close,
        weekend_status: hours.weekend_status,
    }
}

fn print_match_summary(org_name: &str, input_website: Option<&str>, fields: &EnrichedFields) {
    let or_unknown = |v: Option<&str>| v.unwrap_or("Unknown").to_owned();
    let rating = match (fields.rating, fields.review_count) {
        (Some(r), Some(n)) => format!("{r:.1} ({n} reviews)"),
        (Some(r), None) => format!("{r:.1}"),
        (None, _) => "Unknown".to_owned(),
    };

    println!("Found match for: {org_name}");
    println!("Place Name: {}", or_unknown(fields.place_name.as_deref()));
    println!("Address: {}", or_unknown(fields.formatted_address.as_deref()));
    println!("Phone: {}", or_unknown(fields.phone.as_deref()));
    println!("Rating: {rating}");
    println!("Website: {}", or_unknown(fields.website.as_deref()));
    println!("CSV Website: {}", or_unknown(input_website));
    println!(
        "Website Matched: {}",
        if fields.website_matched { "Yes" } else { "No" }
    );
    println!("Business Status: {}", or_unknown(fields.business_status.as_deref()));
    println!("Weekdays Closing: {}", or_unknown(fields.weekday_closing.as_deref()));
    println!(
        "Weekend: {}",
        or_unknown(fields.weekend_status.map(|s| s.as_str()))
    );
    println!("{}", "-".repeat(80));
}

#[cfg(test)]
#[path = "enrich_test.rs"]
mod tests;
