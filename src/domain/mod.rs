// Domain-specific error types
pub mod errors;

// Slider ranges for the three advertising channels
pub mod input_bounds;

// Feature layout and fitted artifacts
pub mod ml;

// Prediction result and currency display
pub mod sales;
