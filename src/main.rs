use salescast::application::form::{PAGE_TITLE, PredictionForm};
use salescast::application::ml::{LinearSalesPredictor, SalesPredictor};
use salescast::config::ArtifactConfig;
use salescast::infrastructure::logging::init_logging;
use std::sync::Arc;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok(); // Load .env file

    // 1. Logging (stdout + status strip)
    let (log_tx, log_rx) = crossbeam_channel::unbounded();
    init_logging(Some(log_tx));

    info!("Salescast {} starting...", env!("CARGO_PKG_VERSION"));

    // 2. Load artifacts. No window is opened without them.
    let config = ArtifactConfig::from_env()?;
    let predictor =
        match LinearSalesPredictor::load(config.model_path(), config.scaler_path()) {
            Ok(p) => p,
            Err(e) => {
                error!("❌ Model or scaler artifact not found: {}", e);
                error!(
                    "Place '{}' and '{}' in {:?} or set ARTIFACT_DIR / MODEL_FILE / SCALER_FILE.",
                    config.model_file, config.scaler_file, config.artifact_dir
                );
                return Err(e.into());
            }
        };
    let predictor: Arc<dyn SalesPredictor> = Arc::new(predictor);

    // 3. Run UI (Blocks Main Thread)
    let form = PredictionForm::new(predictor).with_log_receiver(log_rx);

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([720.0, 760.0])
            .with_title(PAGE_TITLE),
        ..Default::default()
    };

    eframe::run_native(PAGE_TITLE, native_options, Box::new(|_cc| Ok(Box::new(form))))
        .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
