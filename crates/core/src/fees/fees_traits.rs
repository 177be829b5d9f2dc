use crate::errors::Result;
use crate::fees::fees_model::{CalculatorInput, CalculatorRequest, CalculatorResponse};

/// Trait for fee calculator service operations
pub trait FeeCalculatorServiceTrait: Send + Sync {
    /// Validates a raw request and calculates its fees.
    fn calculate(&self, request: CalculatorRequest) -> Result<CalculatorResponse>;
    /// Calculates fees for an already validated input.
    fn calculate_input(&self, input: &CalculatorInput) -> Result<CalculatorResponse>;
}
