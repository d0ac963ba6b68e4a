use crate::domain::ml::AdSpend;

/// Interface for sales models
pub trait SalesPredictor: Send + Sync {
    /// Estimated sales for the given investments (currency units).
    fn predict(&self, spend: &AdSpend) -> f64;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
