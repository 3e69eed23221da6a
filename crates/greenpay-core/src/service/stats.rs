//! Site statistics, computed on demand from the store.

use greenpay_types::config::DisplayFigures;
use greenpay_types::error::RepositoryError;
use greenpay_types::stats::SiteStats;

use crate::repository::stats::StatsRepository;

/// Take one counts snapshot and merge it with the display figures.
pub async fn collect_stats<R: StatsRepository>(
    repo: &R,
    display: &DisplayFigures,
) -> Result<SiteStats, RepositoryError> {
    let counts = repo.counts().await?;
    Ok(SiteStats::new(counts, display))
}
