use crate::application::form::{
    FOOTER, INTRO, INVESTMENT_HEADER, PAGE_TITLE, PREDICT_BUTTON, PredictionForm,
};
use crate::domain::ml::Channel;
use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

impl eframe::App for PredictionForm {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        // --- 1. Process log lines ---
        self.update();

        // --- 2. Bottom status strip: latest log line ---
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "{} {}",
                        self.predictor().name(),
                        self.predictor().version()
                    ))
                    .color(DesignSystem::TEXT_MUTED)
                    .small(),
                );
                ui.separator();
                if let Some(line) = self.log_lines.last() {
                    ui.label(
                        egui::RichText::new(line)
                            .color(DesignSystem::TEXT_MUTED)
                            .small(),
                    );
                }
            });
        });

        // --- 3. Main page ---
        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.heading(
                        egui::RichText::new(format!("📈 {}", PAGE_TITLE))
                            .size(26.0)
                            .color(DesignSystem::TEXT_PRIMARY),
                    );
                    ui.separator();
                    ui.label(egui::RichText::new(INTRO).color(DesignSystem::TEXT_SECONDARY));
                    ui.add_space(DesignSystem::SPACING_MEDIUM);

                    render_inputs(ui, self);

                    ui.add_space(DesignSystem::SPACING_MEDIUM);
                    ui.separator();

                    let button = egui::Button::new(egui::RichText::new(PREDICT_BUTTON).size(16.0))
                        .min_size(egui::vec2(180.0, 36.0));
                    if ui.add(button).clicked() {
                        self.submit();
                    }

                    if let Some(message) = self.result_message() {
                        ui.add_space(DesignSystem::SPACING_SMALL);
                        Card::success().show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(message)
                                    .size(18.0)
                                    .strong()
                                    .color(DesignSystem::TEXT_PRIMARY),
                            );
                        });
                    }

                    ui.add_space(DesignSystem::SPACING_MEDIUM);
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("ℹ {}", FOOTER)).color(DesignSystem::INFO),
                    );
                });
            });
    }
}

/// Renders the three investment sliders
fn render_inputs(ui: &mut egui::Ui, form: &mut PredictionForm) {
    Card::new().title(INVESTMENT_HEADER).show(ui, |ui| {
        ui.spacing_mut().slider_width = DesignSystem::SLIDER_WIDTH;

        for channel in Channel::ALL {
            let bounds = channel.bounds();
            let mut value = form.spend.get(channel);

            ui.label(
                egui::RichText::new(format!("{} investment", channel))
                    .strong()
                    .color(DesignSystem::TEXT_SECONDARY),
            );
            let slider = egui::Slider::new(&mut value, bounds.min..=bounds.max)
                .step_by(bounds.step)
                .fixed_decimals(bounds.decimals as usize)
                .show_value(true);

            if ui.add(slider).changed() {
                form.set(channel, value);
            }
            ui.add_space(DesignSystem::SPACING_SMALL);
        }
    });
}
