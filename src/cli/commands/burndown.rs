use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::{BurndownSummary, ReviewSummary};
use crate::{
    cli::args::ReportArgs,
    config::{Config, load_config},
    core::{merge_resolutions, scan_markers},
    output::write_reports,
    review::{HttpTransport, ReviewFetcher, ReviewQuery, Transport},
};

/// Settings for one burndown run (CLI args > config file > defaults).
#[derive(Debug, Clone)]
pub struct BurndownSettings {
    pub source_root: PathBuf,
    pub output_dir: PathBuf,
    pub query: ReviewQuery,
    pub jobs: usize,
    pub fetch_reviews: bool,
}

impl BurndownSettings {
    pub fn resolve(config: Config, args: &ReportArgs) -> Self {
        Self {
            source_root: args
                .source_root
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.source_root)),
            output_dir: args
                .output_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.output_dir)),
            query: ReviewQuery {
                base_url: config.review_url,
                project: config.project,
                path_prefix: config.path_prefix,
                max_age: config.max_age,
            },
            jobs: args.jobs.unwrap_or(config.jobs),
            fetch_reviews: !args.no_reviews,
        }
    }
}

/// Load configuration from `start_dir` and run the burndown against the
/// live review service.
pub fn burndown(args: &ReportArgs, start_dir: &Path) -> Result<BurndownSummary> {
    let loaded = load_config(start_dir)?;
    if let Some(path) = &loaded.path {
        debug!(config = %path.display(), "loaded config");
    }
    if loaded.config.credentials.is_some() {
        debug!("credentials configured but unused; review reads are anonymous");
    }

    let settings = BurndownSettings::resolve(loaded.config, args);
    let transport = if settings.fetch_reviews {
        Some(HttpTransport::new().context("Failed to set up review client")?)
    } else {
        None
    };
    run_burndown(&settings, transport, chrono::Utc::now().timestamp())
}

/// Scan, gather review resolutions, merge, then write every report.
///
/// Nothing is written unless scanning and review gathering both succeed.
/// Without a transport, reviews are skipped.
pub fn run_burndown<T: Transport>(
    settings: &BurndownSettings,
    transport: Option<T>,
    timestamp: i64,
) -> Result<BurndownSummary> {
    let scan = scan_markers(&settings.source_root)?;
    let counts = scan.counts();
    info!(
        files = scan.records.len(),
        done = scan.done.len(),
        pending = counts.total(),
        "scanned markers"
    );

    let (batch, reviews_checked) = match transport {
        Some(transport) => {
            let fetcher = ReviewFetcher::new(transport, settings.query.clone(), settings.jobs)?;
            let batch = fetcher
                .gather()
                .context("Failed to gather review resolutions")?;
            (batch, true)
        }
        None => (Default::default(), false),
    };

    let file_count = scan.records.len();
    let done_count = scan.done.len();
    let merged = merge_resolutions(scan.records, batch.events);

    let paths = write_reports(&settings.output_dir, &merged.records, &counts, timestamp)?;

    Ok(BurndownSummary {
        source_root: settings.source_root.clone(),
        file_count,
        done_count,
        counts,
        reviews: reviews_checked.then(|| ReviewSummary {
            changes: batch.changes,
            resolved: merged.resolved_count(),
            unmatched: merged.unmatched.len(),
        }),
        paths,
    })
}
