use eframe::{egui, App};
use tracing::warn;

use crate::chart::{self, CHART_SIZE};
use crate::pipeline::{Analysis, Prediction};

const BADGE_RADIUS: f32 = 30.0;

pub struct LottoApp {
    analysis: Analysis,
    frequency_chart: Option<egui::TextureHandle>,
}

impl LottoApp {
    pub fn new(cc: &eframe::CreationContext<'_>, analysis: Analysis) -> Self {
        let frequency_chart = match chart::render_rgb(&analysis.stats.counts, analysis.stats.window, CHART_SIZE) {
            Ok(rgb) => {
                let size = [CHART_SIZE.0 as usize, CHART_SIZE.1 as usize];
                let image = egui::ColorImage::from_rgb(size, &rgb);
                Some(cc.egui_ctx.load_texture("frequency", image, egui::TextureOptions::LINEAR))
            }
            Err(err) => {
                warn!(%err, "frequency chart unavailable");
                None
            }
        };

        Self {
            analysis,
            frequency_chart,
        }
    }

    fn show_prediction(ui: &mut egui::Ui, prediction: &Prediction) {
        let [r, g, b] = prediction.kind.color();
        let color = egui::Color32::from_rgb(r, g, b);

        ui.heading(prediction.kind.label());
        ui.horizontal(|ui| {
            for number in &prediction.numbers {
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(BADGE_RADIUS * 2.0, BADGE_RADIUS * 2.0),
                    egui::Sense::hover(),
                );
                let painter = ui.painter();
                painter.circle_filled(rect.center() + egui::vec2(2.0, 2.0), BADGE_RADIUS, egui::Color32::from_black_alpha(70));
                painter.circle_filled(rect.center(), BADGE_RADIUS, color);
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    number.to_string(),
                    egui::FontId::proportional(20.0),
                    egui::Color32::WHITE,
                );
                ui.add_space(8.0);
            }
        });
        ui.add_space(10.0);
    }
}

impl App for LottoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("🎯 Loto6 Predictor");

                if self.analysis.draw_count == 0 {
                    ui.colored_label(
                        egui::Color32::RED,
                        "No draw history loaded. Predictions below rest on the model score alone.",
                    );
                }

                ui.label(format!(
                    "{} draws analysed, frequency over the last {}",
                    self.analysis.draw_count, self.analysis.stats.window
                ));
                if let Some((first, last)) = self.analysis.date_range {
                    ui.label(format!("Analyzing data from {} to {}", first, last));
                }
                ui.add_space(10.0);

                for prediction in &self.analysis.predictions {
                    Self::show_prediction(ui, prediction);
                }

                ui.separator();
                ui.heading(format!("📊 Frequency (last {} draws)", self.analysis.stats.window));
                match &self.frequency_chart {
                    Some(texture) => {
                        ui.image((texture.id(), texture.size_vec2()));
                    }
                    None => {
                        ui.colored_label(egui::Color32::RED, "Chart could not be rendered.");
                    }
                }

                ui.separator();
                ui.heading("⏳ Coldest numbers");
                egui::Grid::new("coldest")
                    .striped(true)
                    .num_columns(2)
                    .show(ui, |ui| {
                        ui.strong("Number");
                        ui.strong("Draws since last seen");
                        ui.end_row();
                        for cold in &self.analysis.coldest {
                            ui.label(cold.number.to_string());
                            ui.label(cold.gap.to_string());
                            ui.end_row();
                        }
                    });
            });
        });
    }
}
