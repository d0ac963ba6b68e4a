use salescast::application::ml::{LinearSalesPredictor, SalesPredictor};
use salescast::config::ArtifactConfig;
use salescast::domain::errors::PredictorError;
use salescast::domain::ml::{AdSpend, ScalerArtifact};
use salescast::domain::sales::SalesEstimate;
use serde_json::Value;
use std::path::PathBuf;

fn artifact_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("artifacts")
}

fn shipped_predictor() -> LinearSalesPredictor {
    let config = ArtifactConfig::default().with_artifact_dir(artifact_dir());
    LinearSalesPredictor::load(config.model_path(), config.scaler_path())
        .expect("shipped artifacts should load")
}

fn read_json(name: &str) -> Value {
    let content = std::fs::read_to_string(artifact_dir().join(name)).unwrap();
    serde_json::from_str(&content).unwrap()
}

fn floats(value: &Value, key: &str) -> Vec<f64> {
    value[key]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_f64().unwrap())
        .collect()
}

#[test]
fn test_golden_prediction_for_canonical_inputs() {
    let predictor = shipped_predictor();

    let prediction = predictor.predict_values(150.0, 25.0, 60.0);
    assert!(
        (prediction - 14.454587031159488).abs() < 1e-9,
        "prediction = {}",
        prediction
    );

    let estimate = SalesEstimate::new(prediction);
    assert!(estimate.raw >= 0.0);
    assert_eq!(estimate.formatted(), "$14.45");
}

#[test]
fn test_prediction_is_deterministic() {
    let predictor = shipped_predictor();
    let spend = AdSpend::new(87.0, 12.3, 45.6);

    let first = predictor.predict(&spend);
    for _ in 0..100 {
        assert_eq!(predictor.predict(&spend).to_bits(), first.to_bits());
    }

    // A second load of the same files yields the same value
    assert_eq!(shipped_predictor().predict(&spend).to_bits(), first.to_bits());
}

#[test]
fn test_swapping_columns_changes_prediction() {
    let predictor = shipped_predictor();
    assert_ne!(
        predictor.predict_values(150.0, 25.0, 60.0),
        predictor.predict_values(25.0, 150.0, 60.0)
    );
    assert!((predictor.predict_values(25.0, 150.0, 60.0) - 32.30025841832544).abs() < 1e-9);
}

#[test]
fn test_zero_inputs_equal_shifted_intercept() {
    let model = read_json("linear_regression_model.json");
    let scaler = read_json("scaler.json");
    assert_eq!(scaler["kind"], "standard_scaler");

    let coef = floats(&model, "coef");
    let intercept = model["intercept"].as_f64().unwrap();
    let mean = floats(&scaler, "mean");
    let scale = floats(&scaler, "scale");

    let mut expected = 0.0;
    for i in 0..3 {
        expected += coef[i] * ((0.0 - mean[i]) / scale[i]);
    }
    let expected = intercept + expected;

    let prediction = shipped_predictor().predict_values(0.0, 0.0, 0.0);
    assert!((prediction - expected).abs() < 1e-12);
    assert!((prediction - 2.9388893804426868).abs() < 1e-9);
}

#[test]
fn test_shipped_scaler_parses_as_tagged_artifact() {
    let content = std::fs::read_to_string(artifact_dir().join("scaler.json")).unwrap();
    let artifact: ScalerArtifact = serde_json::from_str(&content).unwrap();
    assert!(matches!(artifact, ScalerArtifact::StandardScaler { .. }));
}

#[test]
fn test_missing_model_fails_load() {
    let missing = artifact_dir().join("no_such_model.json");
    let result = LinearSalesPredictor::load(&missing, artifact_dir().join("scaler.json"));

    match result {
        Err(PredictorError::ArtifactMissing { path, .. }) => assert_eq!(path, missing),
        Ok(_) => panic!("load should fail when the model artifact is absent"),
    }
}

#[test]
fn test_missing_scaler_fails_load() {
    let missing = artifact_dir().join("no_such_scaler.json");
    let err = LinearSalesPredictor::load(artifact_dir().join("linear_regression_model.json"), &missing)
        .unwrap_err();

    assert_eq!(err.path(), missing.as_path());
    assert!(err.to_string().contains("no_such_scaler.json"));
}

#[test]
fn test_min_max_artifacts_reproduce_fitted_transform() {
    let dir = std::env::temp_dir().join(format!("salescast_minmax_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    // MinMaxScaler fit on data ranges TV [0.7, 296.4], Radio [0, 49.6], Newspaper [0.3, 114]
    std::fs::write(
        dir.join("scaler.json"),
        r#"{
            "kind": "min_max_scaler",
            "min": [-0.0023672641190395673, -0.0, -0.0026385224274406327],
            "scale": [0.003381805884342239, 0.020161290322580645, 0.008795074758135443]
        }"#,
    )
    .unwrap();
    std::fs::write(
        dir.join("linear_regression_model.json"),
        r#"{"kind": "linear_regression", "coef": [13.35, 11.09, 0.07], "intercept": 2.93}"#,
    )
    .unwrap();

    let config = ArtifactConfig::default().with_artifact_dir(&dir);
    let predictor = LinearSalesPredictor::load(config.model_path(), config.scaler_path()).unwrap();

    assert!((predictor.predict_values(150.0, 25.0, 60.0) - 15.296935666755887).abs() < 1e-9);
    assert!((predictor.predict_values(0.0, 0.0, 0.0) - 2.898212327440901).abs() < 1e-9);

    std::fs::remove_dir_all(dir).ok();
}
