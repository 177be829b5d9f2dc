use std::sync::Arc;

use super::fee_aggregator::aggregate;
use super::fee_resolver::resolve;
use super::fees_model::{CalculatorInput, CalculatorRequest, CalculatorResponse};
use super::fees_traits::FeeCalculatorServiceTrait;
use crate::errors::Result;
use crate::rates::RuleSetStore;

/// Calculates fee breakdowns against the current rate table snapshot.
pub struct FeeCalculatorService {
    rule_sets: Arc<RuleSetStore>,
}

impl FeeCalculatorService {
    pub fn new(rule_sets: Arc<RuleSetStore>) -> Self {
        Self { rule_sets }
    }
}

impl FeeCalculatorServiceTrait for FeeCalculatorService {
    fn calculate(&self, request: CalculatorRequest) -> Result<CalculatorResponse> {
        let input = request.into_input()?;
        self.calculate_input(&input)
    }

    fn calculate_input(&self, input: &CalculatorInput) -> Result<CalculatorResponse> {
        // One snapshot for the whole calculation
        let rules = self.rule_sets.current()?;

        let breakdown = resolve(input, &rules).map_err(|e| {
            log::warn!(
                "Fee resolution failed for category {:?} at price {}: {}",
                input.category,
                input.selling_price,
                e
            );
            e
        })?;
        let totals = aggregate(&breakdown, input.selling_price).map_err(|e| {
            log::warn!(
                "Fee aggregation failed for category {:?} at price {}: {}",
                input.category,
                input.selling_price,
                e
            );
            e
        })?;

        log::debug!(
            "Calculated fees for {:?}: total={} net={}",
            input.category,
            totals.total_fees,
            totals.net_earnings
        );
        Ok(CalculatorResponse::new(breakdown, totals))
    }
}
