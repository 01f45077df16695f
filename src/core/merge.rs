//! Attribution of resolution events to file records.
//!
//! Events are applied in ascending review number, so when several open
//! reviews remove the same marker the highest review number is the one
//! recorded. Every resolving review is still kept in
//! [`MergeResult::resolutions`].

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::{
    phase::Phase,
    record::{FileRecord, ResolutionEvent, Status},
};

#[derive(Debug, Default)]
pub struct MergeResult {
    /// Input records with resolved statuses applied, order preserved.
    pub records: Vec<FileRecord>,
    /// All reviews removing each (file, phase) marker, ascending.
    pub resolutions: BTreeMap<(String, Phase), Vec<u64>>,
    /// Events naming a file outside the scan or an unknown tag.
    pub unmatched: Vec<ResolutionEvent>,
}

impl MergeResult {
    pub fn resolved_count(&self) -> usize {
        self.resolutions.len()
    }
}

/// Mark every phase a review removes as resolved by that review.
pub fn merge_resolutions(
    mut records: Vec<FileRecord>,
    mut events: Vec<ResolutionEvent>,
) -> MergeResult {
    events.sort();
    events.dedup();

    let index: HashMap<String, usize> = records
        .iter()
        .enumerate()
        .map(|(i, record)| (record.filename.clone(), i))
        .collect();

    let mut resolutions: BTreeMap<(String, Phase), Vec<u64>> = BTreeMap::new();
    let mut unmatched = Vec::new();

    for event in events {
        let (Some(&i), Some(phase)) = (index.get(&event.filename), Phase::from_tag(&event.tag))
        else {
            debug!(
                review = event.number,
                file = %event.filename,
                tag = %event.tag,
                "ignoring resolution for unknown file or tag"
            );
            unmatched.push(event);
            continue;
        };

        records[i].set_status(
            phase,
            Status::Resolved {
                review: event.number,
            },
        );
        let reviews = resolutions
            .entry((event.filename.clone(), phase))
            .or_default();
        if !reviews.contains(&event.number) {
            reviews.push(event.number);
        }
    }

    for ((file, phase), reviews) in &resolutions {
        if reviews.len() > 1 {
            debug!(%file, %phase, ?reviews, "marker removed by several reviews");
        }
    }

    MergeResult {
        records,
        resolutions,
        unmatched,
    }
}
