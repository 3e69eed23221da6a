//! StatsRepository trait definition.

use greenpay_types::error::RepositoryError;
use greenpay_types::stats::StoreCounts;

/// Repository trait for aggregate counts.
///
/// Implementations return all four counts from one consistent view of the
/// store, never a mix of states.
pub trait StatsRepository: Send + Sync {
    fn counts(&self)
    -> impl std::future::Future<Output = Result<StoreCounts, RepositoryError>> + Send;
}
