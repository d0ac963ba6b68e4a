use crate::application::ml::SalesPredictor;
use crate::domain::ml::{AdSpend, Channel};
use crate::domain::sales::SalesEstimate;
use crossbeam_channel::Receiver;
use std::sync::Arc;
use tracing::info;

pub const PAGE_TITLE: &str = "Advertising Sales Prediction";
pub const INTRO: &str =
    "Enter the investment in TV, Radio and Newspaper to estimate your store's sales.";
pub const INVESTMENT_HEADER: &str = "Investment amount ($)";
pub const PREDICT_BUTTON: &str = "🚀 Predict sales";
pub const FOOTER: &str =
    "This model predicts sales based on the investment in different advertising channels.";

/// Keep only the most recent log lines in the status strip.
const MAX_LOG_LINES: usize = 50;

/// State behind the prediction page, independent of any rendering toolkit.
pub struct PredictionForm {
    predictor: Arc<dyn SalesPredictor>,
    log_rx: Option<Receiver<String>>,

    // UI State
    pub spend: AdSpend,
    pub last_estimate: Option<SalesEstimate>,
    pub log_lines: Vec<String>,
}

impl PredictionForm {
    pub fn new(predictor: Arc<dyn SalesPredictor>) -> Self {
        Self {
            predictor,
            log_rx: None,
            spend: AdSpend::defaults(),
            last_estimate: None,
            log_lines: Vec::new(),
        }
    }

    pub fn with_log_receiver(mut self, log_rx: Receiver<String>) -> Self {
        self.log_rx = Some(log_rx);
        self
    }

    pub fn predictor(&self) -> &dyn SalesPredictor {
        self.predictor.as_ref()
    }

    /// Sets one channel, snapped to its slider range and step.
    pub fn set(&mut self, channel: Channel, value: f64) {
        self.spend.set(channel, channel.bounds().snap(value));
    }

    /// The "Predict sales" button.
    pub fn submit(&mut self) -> SalesEstimate {
        let estimate = SalesEstimate::new(self.predictor.predict(&self.spend));
        info!(
            "Prediction for TV={} Radio={} Newspaper={}: {}",
            self.spend.tv, self.spend.radio, self.spend.newspaper, estimate
        );
        self.last_estimate = Some(estimate);
        estimate
    }

    /// Success banner text for the last prediction, if any.
    pub fn result_message(&self) -> Option<String> {
        self.last_estimate
            .map(|e| format!("✨ Expected sales prediction: {}", e.formatted()))
    }

    /// Drain pending log lines from the channel writer
    pub fn update(&mut self) {
        if let Some(rx) = &self.log_rx {
            while let Ok(line) = rx.try_recv() {
                self.log_lines.push(line);
            }
        }
        if self.log_lines.len() > MAX_LOG_LINES {
            let excess = self.log_lines.len() - MAX_LOG_LINES;
            self.log_lines.drain(0..excess);
        }
    }
}
