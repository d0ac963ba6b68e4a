// Prediction page state
pub mod form;

// Sales predictors over fitted artifacts
pub mod ml;
