use super::predictor::SalesPredictor;
use crate::domain::errors::PredictorError;
use crate::domain::ml::{AdSpend, FittedScaler, LinearModel};
use crate::infrastructure::artifact_store;
use std::path::Path;
use tracing::{debug, info};

/// Scale-then-predict over a fitted scaler and linear model.
///
/// Both artifacts are loaded once and never mutated, so one instance can be
/// shared across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct LinearSalesPredictor {
    model: LinearModel,
    scaler: FittedScaler,
}

impl LinearSalesPredictor {
    pub fn new(model: LinearModel, scaler: FittedScaler) -> Self {
        Self { model, scaler }
    }

    /// Loads both artifacts. Fails on the first one that is absent or unusable.
    pub fn load(
        model_path: impl AsRef<Path>,
        scaler_path: impl AsRef<Path>,
    ) -> Result<Self, PredictorError> {
        let model = artifact_store::load_model(model_path.as_ref())?;
        let scaler = artifact_store::load_scaler(scaler_path.as_ref())?;
        info!(
            "Sales predictor ready ({:?} + {})",
            model.kind,
            scaler.kind()
        );
        Ok(Self::new(model, scaler))
    }

    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    pub fn scaler(&self) -> &FittedScaler {
        &self.scaler
    }

    /// Positional form of [`SalesPredictor::predict`]; arguments follow the artifact column order.
    pub fn predict_values(&self, tv: f64, radio: f64, newspaper: f64) -> f64 {
        self.predict(&AdSpend::new(tv, radio, newspaper))
    }
}

impl SalesPredictor for LinearSalesPredictor {
    fn predict(&self, spend: &AdSpend) -> f64 {
        let scaled = self.scaler.transform(spend.to_row());
        let prediction = self.model.predict(&scaled);
        debug!(
            "predict tv={} radio={} newspaper={} scaled={:?} -> {}",
            spend.tv,
            spend.radio,
            spend.newspaper,
            scaled.values(),
            prediction
        );
        prediction
    }

    fn name(&self) -> &str {
        "Linear Regression"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ml::ModelKind;

    fn predictor() -> LinearSalesPredictor {
        LinearSalesPredictor::new(
            LinearModel {
                kind: ModelKind::LinearRegression,
                coef: [2.0, 1.0, -0.5],
                intercept: 10.0,
            },
            FittedScaler::Standard {
                mean: Some([100.0, 20.0, 30.0]),
                scale: Some([50.0, 10.0, 20.0]),
            },
        )
    }

    #[test]
    fn test_predict_scales_then_applies_model() {
        let p = predictor();
        // scaled = [1.0, 0.5, 1.5] -> 10 + 2 + 0.5 - 0.75
        assert_eq!(p.predict_values(150.0, 25.0, 60.0), 11.75);
    }

    #[test]
    fn test_zero_input_gives_shifted_intercept() {
        let p = predictor();
        let expected = 10.0 + 2.0 * (-100.0 / 50.0) + 1.0 * (-20.0 / 10.0) + -0.5 * (-30.0 / 20.0);
        assert!((p.predict_values(0.0, 0.0, 0.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_column_order_matters() {
        let p = predictor();
        assert_ne!(
            p.predict_values(150.0, 25.0, 60.0),
            p.predict_values(25.0, 150.0, 60.0)
        );
    }

    #[test]
    fn test_no_range_checks() {
        let p = predictor();
        let value = p.predict_values(-1000.0, 1e6, -3.0);
        assert!(value.is_finite());
    }

    #[test]
    fn test_predictor_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LinearSalesPredictor>();

        let shared: std::sync::Arc<dyn SalesPredictor> = std::sync::Arc::new(predictor());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let p = shared.clone();
                std::thread::spawn(move || p.predict(&AdSpend::new(150.0, 25.0, 60.0)))
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 11.75);
        }
    }
}
