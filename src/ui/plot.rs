use eframe::egui::{self, Align2, FontId, Rect, Sense, Ui};
use egui_plot::{Bar, BarChart, GridMark, Line, Plot, PlotPoints, Points};

use crate::color;
use crate::data::model::{Column, Season};
use crate::state::AppState;

const CHART_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Trend charts (monthly / seasonal / daily)
// ---------------------------------------------------------------------------

/// Line chart of the selected pollutant's mean per calendar month. Months
/// with no defined mean are skipped, leaving gaps rather than zeros.
pub fn monthly_trend(ui: &mut Ui, state: &AppState) {
    let pollutant = state.selection.pollutant;
    let series: PlotPoints = state
        .monthly
        .iter()
        .filter_map(|(month, means)| means.get(pollutant).map(|v| [*month as f64, v]))
        .collect();
    let markers: PlotPoints = state
        .monthly
        .iter()
        .filter_map(|(month, means)| means.get(pollutant).map(|v| [*month as f64, v]))
        .collect();

    Plot::new("monthly_trend")
        .height(CHART_HEIGHT)
        .x_axis_label("Month")
        .y_axis_label("Concentration (µg/m³)")
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(series)
                    .name(pollutant.name())
                    .color(color::MONTHLY)
                    .width(1.5),
            );
            plot_ui.points(
                Points::new(markers)
                    .color(color::MONTHLY)
                    .radius(3.0),
            );
        });
}

/// Bar chart of the selected pollutant's mean per season, in canonical
/// Winter → Autumn order.
pub fn seasonal_trend(ui: &mut Ui, state: &AppState) {
    let pollutant = state.selection.pollutant;
    let bars: Vec<Bar> = state
        .seasonal
        .iter()
        .filter_map(|(season, means)| {
            means
                .get(pollutant)
                .map(|v| Bar::new(*season as usize as f64, v).name(season.name()))
        })
        .collect();

    Plot::new("seasonal_trend")
        .height(CHART_HEIGHT)
        .x_axis_label("Season")
        .y_axis_label("Concentration (µg/m³)")
        .x_axis_formatter(season_axis_formatter)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .name(pollutant.name())
                    .color(color::SEASONAL)
                    .width(0.6),
            );
        });
}

fn season_axis_formatter(mark: GridMark, _range: &std::ops::RangeInclusive<f64>) -> String {
    let idx = mark.value.round();
    if (mark.value - idx).abs() > 1e-6 {
        return String::new();
    }
    match idx as i64 {
        0 => Season::Winter.name().to_string(),
        1 => Season::Spring.name().to_string(),
        2 => Season::Summer.name().to_string(),
        3 => Season::Autumn.name().to_string(),
        _ => String::new(),
    }
}

/// Line chart of the selected pollutant's mean per day of month.
pub fn daily_trend(ui: &mut Ui, state: &AppState) {
    let pollutant = state.selection.pollutant;
    let series: PlotPoints = state
        .daily
        .iter()
        .filter_map(|(day, means)| means.get(pollutant).map(|v| [*day as f64, v]))
        .collect();
    let markers: PlotPoints = state
        .daily
        .iter()
        .filter_map(|(day, means)| means.get(pollutant).map(|v| [*day as f64, v]))
        .collect();

    Plot::new("daily_trend")
        .height(CHART_HEIGHT)
        .x_axis_label("Day of month")
        .y_axis_label("Concentration (µg/m³)")
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(series)
                    .name(pollutant.name())
                    .color(color::DAILY)
                    .width(1.5),
            );
            plot_ui.points(
                Points::new(markers)
                    .color(color::DAILY)
                    .radius(3.0),
            );
        });
}

// ---------------------------------------------------------------------------
// Correlation heatmap
// ---------------------------------------------------------------------------

/// Annotated 11×11 heatmap of the pollutant/weather correlation matrix.
/// Undefined cells render grey with a dash instead of a coefficient.
pub fn correlation_heatmap(ui: &mut Ui, state: &AppState) {
    const LABEL_W: f32 = 52.0;
    const LABEL_H: f32 = 18.0;

    let n = Column::COUNT as f32;
    let cell = ((ui.available_width() - LABEL_W) / n).clamp(28.0, 56.0);
    let size = egui::vec2(LABEL_W + cell * n, cell * n + LABEL_H);
    let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);
    let text_color = ui.visuals().text_color();
    let origin = rect.min + egui::vec2(LABEL_W, 0.0);

    for (i, a) in Column::ALL.iter().enumerate() {
        painter.text(
            egui::pos2(rect.min.x + LABEL_W - 6.0, origin.y + (i as f32 + 0.5) * cell),
            Align2::RIGHT_CENTER,
            a.name(),
            FontId::proportional(10.0),
            text_color,
        );

        for (j, b) in Column::ALL.iter().enumerate() {
            let r = state.correlation.get(*a, *b);
            let cell_rect = Rect::from_min_size(
                origin + egui::vec2(j as f32 * cell, i as f32 * cell),
                egui::vec2(cell, cell),
            );
            let fill = if r.is_nan() {
                color::UNDEFINED
            } else {
                color::diverging(r)
            };
            painter.rect_filled(cell_rect.shrink(0.5), egui::CornerRadius::same(2), fill);

            let label = if r.is_nan() {
                "–".to_string()
            } else {
                format!("{r:.2}")
            };
            painter.text(
                cell_rect.center(),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(9.0),
                color::annotation_for(fill),
            );
        }
    }

    for (j, b) in Column::ALL.iter().enumerate() {
        painter.text(
            egui::pos2(origin.x + (j as f32 + 0.5) * cell, origin.y + n * cell + 4.0),
            Align2::CENTER_TOP,
            b.name(),
            FontId::proportional(10.0),
            text_color,
        );
    }
}

// ---------------------------------------------------------------------------
// Filtered data table
// ---------------------------------------------------------------------------

/// Virtualised table of the filtered rows: date columns, the derived season,
/// and all 11 numeric columns. Missing cells show a dash.
pub fn data_table(ui: &mut Ui, state: &AppState) {
    use egui_extras::{Column as TableColumn, TableBuilder};

    let date_headers = ["year", "month", "day", "hour", "season"];
    let n_columns = date_headers.len() + Column::COUNT;

    ui.push_id("filtered_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(true)
            .max_scroll_height(320.0)
            .columns(TableColumn::auto().resizable(true), n_columns)
            .header(20.0, |mut header| {
                for name in date_headers {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
                for col in Column::ALL {
                    header.col(|ui| {
                        ui.strong(col.name());
                    });
                }
            })
            .body(|body| {
                body.rows(16.0, state.filtered.len(), |mut row| {
                    let fr = &state.filtered[row.index()];
                    let obs = &state.dataset.observations[fr.row];

                    row.col(|ui| {
                        ui.label(obs.year.to_string());
                    });
                    row.col(|ui| {
                        ui.label(obs.month.to_string());
                    });
                    row.col(|ui| {
                        ui.label(obs.day.to_string());
                    });
                    row.col(|ui| {
                        ui.label(obs.hour.to_string());
                    });
                    row.col(|ui| {
                        ui.label(fr.season.name());
                    });
                    for col in Column::ALL {
                        row.col(|ui| {
                            ui.label(format_cell(obs.value(col)));
                        });
                    }
                });
            });
    });
}

fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "–".to_string(),
    }
}
