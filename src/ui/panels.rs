use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::model::Column;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the filter panel: year and month multi-selects plus the pollutant
/// picker for the trend charts.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Data");
    ui.separator();

    // Clone the option lists so we can mutate state inside the loops.
    let years: Vec<i32> = state.dataset.years.iter().copied().collect();
    let months: Vec<u32> = state.dataset.months.iter().copied().collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Pollutant selector ----
            ui.strong("Pollutant");
            let current = state.selection.pollutant;
            egui::ComboBox::from_id_salt("pollutant")
                .selected_text(current.name())
                .show_ui(ui, |ui: &mut Ui| {
                    for col in Column::POLLUTANTS {
                        if ui.selectable_label(current == col, col.name()).clicked() {
                            state.set_pollutant(col);
                        }
                    }
                });
            ui.separator();

            // ---- Year multi-select ----
            let header = format!(
                "Year  ({}/{})",
                state.selection.years.len(),
                years.len()
            );
            egui::CollapsingHeader::new(RichText::new(header).strong())
                .id_salt("years")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_years();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_no_years();
                        }
                    });
                    for year in &years {
                        let mut checked = state.selection.years.contains(year);
                        if ui.checkbox(&mut checked, year.to_string()).changed() {
                            state.toggle_year(*year);
                        }
                    }
                });

            // ---- Month multi-select ----
            let header = format!(
                "Month  ({}/{})",
                state.selection.months.len(),
                months.len()
            );
            egui::CollapsingHeader::new(RichText::new(header).strong())
                .id_salt("months")
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_months();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_no_months();
                        }
                    });
                    for month in &months {
                        let mut checked = state.selection.months.contains(month);
                        if ui.checkbox(&mut checked, month_name(*month)).changed() {
                            state.toggle_month(*month);
                        }
                    }
                });
        });
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with the loaded/visible row counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Guanyuan Air Quality Analysis");
        ui.separator();
        ui.label(format!(
            "{} observations loaded, {} shown",
            state.dataset.len(),
            state.filtered.len()
        ));
        if state.filtered.is_empty() {
            ui.separator();
            ui.label(RichText::new("No data for the current selection").italics());
        }
    });
}
