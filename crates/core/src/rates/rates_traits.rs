use std::sync::Arc;

use async_trait::async_trait;

use super::rates_model::{Rule, RuleSet, RuleSetSummary};
use crate::errors::Result;

/// Source of raw fee rules (a spreadsheet, a directory of CSV exports, ...).
///
/// Returns rules in table order: referral, closing, weight-handling, other,
/// each in row order.
#[async_trait]
pub trait RateTableProvider: Send + Sync {
    async fn get_rules(&self) -> Result<Vec<Rule>>;

    /// Short label used in logs.
    fn name(&self) -> &str;
}

/// Trait for rate table service operations
#[async_trait]
pub trait RateTableServiceTrait: Send + Sync {
    /// Reloads rules from the provider and swaps in a new snapshot.
    async fn refresh(&self) -> Result<RuleSetSummary>;
    /// Current snapshot, or `RuleSetUnavailable` if nothing is loaded yet.
    fn snapshot(&self) -> Result<Arc<RuleSet>>;
    fn summary(&self) -> Result<RuleSetSummary>;
    fn is_loaded(&self) -> bool;
}
