pub mod linear_predictor;
pub mod predictor;

pub use linear_predictor::LinearSalesPredictor;
pub use predictor::SalesPredictor;
