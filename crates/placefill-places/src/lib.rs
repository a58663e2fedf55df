//! Google Places lookup and the matching/normalization logic built on it.
//!
//! [`PlaceResolver`] turns an organization name and location into a single
//! [`PlaceCandidate`]; [`normalize_org_name`], [`websites_match`] and
//! [`summarize_hours`] derive the comparable fields the enrichment pipeline
//! writes out.

pub mod client;
pub mod domain;
pub mod error;
pub mod hours;
pub mod name;
pub mod resolver;
pub mod types;

mod shapes;

pub use client::PlacesClient;
pub use domain::{extract_domain, websites_match};
pub use error::PlacesError;
pub use hours::{summarize_hours, HoursSummary};
pub use name::normalize_org_name;
pub use resolver::{build_query, PlaceResolver, Resolution};
pub use types::{ClockTime, OpeningPeriod, PeriodPoint, PlaceCandidate, WeeklyHours};
