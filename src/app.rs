use eframe::egui::{self, ScrollArea, Ui};

use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AeroDashApp {
    pub state: AppState,
}

impl AeroDashApp {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for AeroDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and row counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: the four analysis sections plus the table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    self.sections(ui);
                });
        });
    }
}

impl AeroDashApp {
    fn sections(&self, ui: &mut Ui) {
        let pollutant = self.state.selection.pollutant.name();

        ui.heading("Monthly and Seasonal Pollution");
        ui.label(format!(
            "Mean {pollutant} concentration per calendar month over the \
             selected years. Peaks in particular months point at seasonal \
             factors or periods of more intensive human activity."
        ));
        plot::monthly_trend(ui, &self.state);
        ui.add_space(8.0);

        ui.label(format!(
            "Mean {pollutant} concentration per season. Seasonal differences \
             usually follow weather changes, heating periods, or industrial \
             activity."
        ));
        plot::seasonal_trend(ui, &self.state);
        ui.separator();

        ui.heading("Daily Pollution Trend");
        ui.label(format!(
            "Mean {pollutant} concentration by day of month, highlighting \
             days with consistently high or low readings."
        ));
        plot::daily_trend(ui, &self.state);
        ui.separator();

        ui.heading("Pollutant / Weather Correlation");
        ui.label(
            "Pearson correlation between the six pollutants and the five \
             weather variables over the filtered rows. Values run from -1 \
             (strong negative) through 0 (none) to +1 (strong positive); \
             grey cells have no defined correlation for this selection.",
        );
        plot::correlation_heatmap(ui, &self.state);
        ui.separator();

        ui.heading("Filtered Data");
        plot::data_table(ui, &self.state);
    }
}
