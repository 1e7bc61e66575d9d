use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// GDP line chart (central panel)
// ---------------------------------------------------------------------------

/// Render the current figure in the central panel.
pub fn gdp_line_chart(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view GDP per capita  (File → Open…)");
        });
        return;
    }

    let figure = &state.figure;
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(figure.title);
    });

    Plot::new("gdp_line_chart")
        .legend(Legend::default())
        .x_axis_label(figure.x_label)
        .y_axis_label(figure.y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &figure.series {
                let color = state
                    .color_map
                    .as_ref()
                    .map(|cm| cm.color_for(&series.country))
                    .unwrap_or(Color32::LIGHT_BLUE);

                let points: PlotPoints = series
                    .points
                    .iter()
                    .map(|&(year, value)| [f64::from(year), value])
                    .collect();

                let line = Line::new(points)
                    .name(&series.country)
                    .color(color)
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}
