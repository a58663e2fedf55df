//! Adapters for the two Google Places response shapes.
//!
//! Each submodule owns the serde types for one shape and converts them into
//! the shared [`crate::types::PlaceCandidate`]. The client picks the adapter
//! from [`placefill_core::ApiShape`]; nothing downstream sees raw JSON.

pub(crate) mod current;
pub(crate) mod legacy;
