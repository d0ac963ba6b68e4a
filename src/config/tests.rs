use super::*;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

fn clear_vars() {
    // SAFETY: callers hold ENV_LOCK, no other test thread touches the environment
    unsafe {
        env::remove_var("ARTIFACT_DIR");
        env::remove_var("MODEL_FILE");
        env::remove_var("SCALER_FILE");
    }
}

#[test]
fn test_config_defaults() {
    let _guard = get_env_lock().lock().unwrap();
    clear_vars();

    let config = ArtifactConfig::from_env().unwrap();
    assert_eq!(config, ArtifactConfig::default());
    assert_eq!(config.model_path(), PathBuf::from("./linear_regression_model.json"));
    assert_eq!(config.scaler_path(), PathBuf::from("./scaler.json"));
}

#[test]
fn test_config_from_env_overrides() {
    let _guard = get_env_lock().lock().unwrap();
    clear_vars();
    unsafe {
        env::set_var("ARTIFACT_DIR", "/opt/salescast");
        env::set_var("MODEL_FILE", "model_v2.json");
    }

    let config = ArtifactConfig::from_env().unwrap();
    assert_eq!(config.model_path(), PathBuf::from("/opt/salescast/model_v2.json"));
    assert_eq!(config.scaler_path(), PathBuf::from("/opt/salescast/scaler.json"));

    clear_vars();
}

#[test]
fn test_config_rejects_empty_file_name() {
    let _guard = get_env_lock().lock().unwrap();
    clear_vars();
    unsafe {
        env::set_var("SCALER_FILE", "  ");
    }

    let err = ArtifactConfig::from_env().unwrap_err();
    assert!(format!("{:#}", err).contains("SCALER_FILE must not be empty"));

    clear_vars();
}

#[test]
fn test_with_artifact_dir() {
    let config = ArtifactConfig::default().with_artifact_dir("artifacts");
    assert_eq!(config.model_path(), PathBuf::from("artifacts/linear_regression_model.json"));
}
