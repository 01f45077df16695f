use rayon::{ThreadPoolBuilder, prelude::*};
use serde::Deserialize;
use tracing::{debug, info};

use super::{
    decode::{Body, decode_body},
    diff::{DiffPatterns, extract_resolutions},
    error::{Result, ReviewError},
    transport::Transport,
};
use crate::core::{ResolutionEvent, scanner::SCANNED_EXTENSION};

/// Detail options requested with the change listing.
pub const QUERY_OPTIONS: &[&str] = &[
    "CURRENT_REVISION",
    "ALL_COMMITS",
    "ALL_FILES",
    "LABELS",
    "DETAILED_LABELS",
    "DETAILED_ACCOUNTS",
];

/// Status of a change that is neither merged nor abandoned.
pub const OPEN_STATUS: &str = "NEW";

/// Where to look for changes touching the scanned files.
#[derive(Debug, Clone)]
pub struct ReviewQuery {
    /// Changes endpoint, with trailing slash.
    pub base_url: String,
    pub project: String,
    /// Repository directory of the scanned files, with trailing slash.
    pub path_prefix: String,
    /// Gerrit age expression; changes idle longer than this are excluded.
    pub max_age: String,
}

impl ReviewQuery {
    pub fn list_url(&self) -> String {
        let options: String = QUERY_OPTIONS.iter().map(|o| format!("&o={}", o)).collect();
        format!(
            "{}?q=project:{}+file:^{}.*.{}+NOT+age:{}{}",
            self.base_url, self.project, self.path_prefix, SCANNED_EXTENSION, self.max_age, options
        )
    }

    pub fn patch_url(&self, change_id: &str) -> String {
        format!("{}{}/revisions/current/patch", self.base_url, change_id)
    }
}

/// Subset of Gerrit's `ChangeInfo` this tool reads.
#[derive(Debug, Deserialize)]
struct ChangeInfo {
    id: String,
    #[serde(rename = "_number")]
    number: u64,
    status: String,
}

/// An open change whose patch will be inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewChange {
    pub number: u64,
    pub url: String,
}

/// Outcome of one review batch.
#[derive(Debug, Default)]
pub struct ReviewBatch {
    /// Number of open changes inspected.
    pub changes: usize,
    pub events: Vec<ResolutionEvent>,
}

/// Finds open changes and the markers their patches remove.
pub struct ReviewFetcher<T> {
    transport: T,
    query: ReviewQuery,
    patterns: DiffPatterns,
    jobs: usize,
}

impl<T: Transport> ReviewFetcher<T> {
    /// `jobs` bounds the number of patches fetched concurrently.
    pub fn new(transport: T, query: ReviewQuery, jobs: usize) -> Result<Self> {
        let patterns = DiffPatterns::new(&query.path_prefix)?;
        Ok(Self {
            transport,
            query,
            patterns,
            jobs: jobs.max(1),
        })
    }

    /// List the open changes touching the scanned files.
    pub fn open_changes(&self) -> Result<Vec<ReviewChange>> {
        let url = self.query.list_url();
        let value = self.get(&url)?.into_json(&url)?;
        let changes: Vec<ChangeInfo> =
            serde_json::from_value(value).map_err(|source| ReviewError::Json {
                url: url.clone(),
                source,
            })?;

        let listed = changes.len();
        let open: Vec<ReviewChange> = changes
            .into_iter()
            .filter(|change| change.status == OPEN_STATUS)
            .map(|change| ReviewChange {
                number: change.number,
                url: self.query.patch_url(&change.id),
            })
            .collect();
        info!(listed, open = open.len(), "listed review changes");
        Ok(open)
    }

    /// Fetch one change's patch and extract the markers it removes.
    pub fn fetch_resolutions(&self, change: &ReviewChange) -> Result<Vec<ResolutionEvent>> {
        let diff = self.get(&change.url)?.into_text(&change.url)?;
        let events = extract_resolutions(change.number, &diff, &self.patterns);
        debug!(review = change.number, removed = events.len(), "inspected patch");
        Ok(events)
    }

    /// Fetch every change on a bounded pool; one result per change.
    ///
    /// The first failure aborts the batch.
    pub fn fetch_all(&self, changes: &[ReviewChange]) -> Result<Vec<Vec<ResolutionEvent>>> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| ReviewError::Pool {
                message: e.to_string(),
            })?;

        pool.install(|| {
            changes
                .par_iter()
                .map(|change| self.fetch_resolutions(change))
                .collect()
        })
    }

    /// List open changes and collect every marker removal they contain.
    pub fn gather(&self) -> Result<ReviewBatch> {
        let changes = self.open_changes()?;
        let events: Vec<ResolutionEvent> =
            self.fetch_all(&changes)?.into_iter().flatten().collect();
        info!(
            changes = changes.len(),
            removals = events.len(),
            "gathered review resolutions"
        );
        Ok(ReviewBatch {
            changes: changes.len(),
            events,
        })
    }

    fn get(&self, url: &str) -> Result<Body> {
        let response = self.transport.get(url)?;
        if !response.is_success() {
            return Err(ReviewError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }
        decode_body(&response)
    }
}
