use std::sync::{Arc, RwLock};

use super::rates_errors::RateTableError;
use super::rates_model::RuleSet;
use crate::errors::Result;
use crate::fees::FeeError;

/// Holder of the current [`RuleSet`] snapshot.
///
/// Readers clone the inner `Arc` and release the lock immediately; `replace`
/// swaps the whole snapshot, so a calculation never sees a half-updated table.
#[derive(Debug, Default)]
pub struct RuleSetStore {
    current: RwLock<Option<Arc<RuleSet>>>,
}

impl RuleSetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule_set(rule_set: RuleSet) -> Self {
        Self {
            current: RwLock::new(Some(Arc::new(rule_set))),
        }
    }

    pub fn current(&self) -> Result<Arc<RuleSet>> {
        let guard = self
            .current
            .read()
            .map_err(|e| RateTableError::Lock(e.to_string()))?;
        guard
            .as_ref()
            .cloned()
            .ok_or_else(|| FeeError::RuleSetUnavailable.into())
    }

    /// Installs `rule_set` and returns the snapshot it replaced, if any.
    pub fn replace(&self, rule_set: RuleSet) -> Result<Option<Arc<RuleSet>>> {
        let mut guard = self
            .current
            .write()
            .map_err(|e| RateTableError::Lock(e.to_string()))?;
        Ok(guard.replace(Arc::new(rule_set)))
    }

    pub fn is_loaded(&self) -> bool {
        self.current.read().map(|g| g.is_some()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::rates::{ReferralRule, Rule};

    fn referral(category: &str) -> Rule {
        Rule::Referral(ReferralRule {
            category: category.to_string(),
            referral_fee_percentage: Some("10%".to_string()),
        })
    }

    #[test]
    fn empty_store_reports_unavailable() {
        let store = RuleSetStore::new();
        assert!(!store.is_loaded());
        assert!(matches!(
            store.current(),
            Err(Error::Fee(FeeError::RuleSetUnavailable))
        ));
    }

    #[test]
    fn replace_does_not_affect_held_snapshots() {
        let store = RuleSetStore::with_rule_set(RuleSet::new(vec![referral("Books")]));
        let held = store.current().unwrap();

        let previous = store
            .replace(RuleSet::new(vec![referral("Toys"), referral("Games")]))
            .unwrap();

        assert_eq!(previous.unwrap().len(), 1);
        assert_eq!(held.len(), 1);
        assert_eq!(store.current().unwrap().len(), 2);
    }
}
