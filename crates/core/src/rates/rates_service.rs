use std::sync::Arc;

use async_trait::async_trait;

use super::rates_errors::RateTableError;
use super::rates_model::{RuleSet, RuleSetSummary};
use super::rates_store::RuleSetStore;
use super::rates_traits::{RateTableProvider, RateTableServiceTrait};
use crate::errors::Result;

/// Loads the rate table from a provider and publishes immutable snapshots.
pub struct RateTableService {
    provider: Arc<dyn RateTableProvider>,
    store: Arc<RuleSetStore>,
}

impl RateTableService {
    pub fn new(provider: Arc<dyn RateTableProvider>, store: Arc<RuleSetStore>) -> Self {
        Self { provider, store }
    }
}

#[async_trait]
impl RateTableServiceTrait for RateTableService {
    async fn refresh(&self) -> Result<RuleSetSummary> {
        let rules = match self.provider.get_rules().await {
            Ok(rules) => rules,
            Err(e) => {
                log::error!("Rate table refresh from {} failed: {}", self.provider.name(), e);
                return Err(e);
            }
        };

        // Keep serving the previous table rather than swapping in an empty one
        if rules.is_empty() {
            log::warn!(
                "Rate table provider {} returned no rules, keeping current snapshot",
                self.provider.name()
            );
            return Err(RateTableError::EmptyRuleSet.into());
        }

        let rule_set = RuleSet::new(rules);
        let summary = rule_set.summary();
        let previous = self.store.replace(rule_set)?;

        log::info!(
            "Loaded {} fee rules from {} (referral={}, closing={}, weight={}, other={}, previous={})",
            summary.total,
            self.provider.name(),
            summary.referral,
            summary.closing,
            summary.weight,
            summary.other,
            previous.map(|p| p.len()).unwrap_or(0),
        );
        Ok(summary)
    }

    fn snapshot(&self) -> Result<Arc<RuleSet>> {
        self.store.current()
    }

    fn summary(&self) -> Result<RuleSetSummary> {
        Ok(self.store.current()?.summary())
    }

    fn is_loaded(&self) -> bool {
        self.store.is_loaded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::fees::FeeError;
    use crate::rates::{OtherRule, RateSheet, ReferralRule, Rule};
    use std::sync::Mutex;

    struct MockProvider {
        responses: Mutex<Vec<Result<Vec<Rule>>>>,
    }

    impl MockProvider {
        fn new(responses: Vec<Result<Vec<Rule>>>) -> Self {
            Self {
                responses: Mutex::new(responses),
            }
        }
    }

    #[async_trait]
    impl RateTableProvider for MockProvider {
        async fn get_rules(&self) -> Result<Vec<Rule>> {
            self.responses.lock().unwrap().remove(0)
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    fn sample_rules() -> Vec<Rule> {
        vec![
            Rule::Referral(ReferralRule {
                category: "Books".into(),
                referral_fee_percentage: Some("10%".into()),
            }),
            Rule::Other(OtherRule {
                fee_type: "Pick & Pack Fee".into(),
                applicable_on: "Standard Size".into(),
                value: Some("₹20".into()),
            }),
        ]
    }

    fn service(responses: Vec<Result<Vec<Rule>>>) -> RateTableService {
        RateTableService::new(
            Arc::new(MockProvider::new(responses)),
            Arc::new(RuleSetStore::new()),
        )
    }

    #[tokio::test]
    async fn refresh_publishes_snapshot() {
        let service = service(vec![Ok(sample_rules())]);
        assert!(!service.is_loaded());

        let summary = service.refresh().await.unwrap();
        assert_eq!(summary.referral, 1);
        assert_eq!(summary.other, 1);
        assert_eq!(summary.total, 2);
        assert!(service.is_loaded());
        assert_eq!(service.snapshot().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_snapshot() {
        let service = service(vec![
            Ok(sample_rules()),
            Err(RateTableError::Http {
                sheet: RateSheet::Referral,
                status: 503,
            }
            .into()),
            Ok(Vec::new()),
        ]);
        service.refresh().await.unwrap();

        assert!(service.refresh().await.is_err());
        assert!(matches!(
            service.refresh().await,
            Err(Error::RateTable(RateTableError::EmptyRuleSet))
        ));
        assert_eq!(service.summary().unwrap().total, 2);
    }

    #[tokio::test]
    async fn summary_before_first_load_is_unavailable() {
        let service = service(vec![]);
        assert!(matches!(
            service.summary(),
            Err(Error::Fee(FeeError::RuleSetUnavailable))
        ));
    }
}
