use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::chart::export_json;
use crate::state::AppState;

const DESCRIPTION: &str = "This data analyzes the GDP per Capita of different countries over time. \
To use the app, first select the countries you want to study. Then, select the range of years \
you want to look at. The final component shows a line chart of different countries GDP per \
capita through the years.";

/// Spacing of the labelled marks under the year sliders.
const MARK_STEP: usize = 50;

// ---------------------------------------------------------------------------
// Left side panel – dashboard controls
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("GDP Analysis Dashboard");
    ui.label(DESCRIPTION);
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };
    let (min_year, max_year) = (dataset.min_year, dataset.max_year);
    let n_countries = dataset.countries.len();

    // ---- Year range ----
    ui.strong("Years");
    let mut start = state.selection.years.start;
    let mut end = state.selection.years.end;
    if ui
        .add(egui::Slider::new(&mut start, min_year..=max_year).text("from"))
        .changed()
    {
        state.set_start_year(start);
    }
    if ui
        .add(egui::Slider::new(&mut end, min_year..=max_year).text("to"))
        .changed()
    {
        state.set_end_year(end);
    }
    let marks: Vec<String> = year_marks(min_year, max_year)
        .iter()
        .map(i32::to_string)
        .collect();
    ui.small(marks.join("  ·  "));
    ui.separator();

    // ---- Country multi-select ----
    let n_selected = state.selection.countries.names().len();
    let header = if n_selected == 0 {
        format!("Countries  (all {n_countries})")
    } else {
        format!("Countries  ({n_selected}/{n_countries})")
    };
    ui.strong(header);

    ui.horizontal(|ui: &mut Ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.country_search)
                .hint_text("Select Countries")
                .desired_width(160.0),
        );
        if ui.small_button("Clear").clicked() {
            state.clear_countries();
        }
    });

    let options: Vec<String> = state
        .matching_countries()
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut toggled = None;
    ScrollArea::vertical()
        .id_salt("country_list")
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for country in &options {
                let mut text = RichText::new(country);
                if let Some(cm) = &state.color_map {
                    text = text.color(cm.color_for(country));
                }
                let mut checked = state.selection.countries.is_picked(country);
                if ui.checkbox(&mut checked, text).changed() {
                    toggled = Some(country.clone());
                }
            }
        });

    if let Some(country) = toggled {
        state.toggle_country(&country);
    }
}

/// Years labelled under the range sliders, every [`MARK_STEP`] years from `min`.
pub fn year_marks(min: i32, max: i32) -> Vec<i32> {
    (min..=max).step_by(MARK_STEP).collect()
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.dataset.is_some(), egui::Button::new("Export figure…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(path) = &state.source_path {
            ui.label(path.display().to_string());
            ui.separator();
        }

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} countries, {} records, {} series shown ({} points)",
                ds.countries.len(),
                ds.len(),
                state.figure.series.len(),
                state.figure.point_count()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open GDP table")
        .add_filter("Supported files", &["csv", "tsv", "tab"])
        .add_filter("CSV", &["csv"])
        .add_filter("TSV", &["tsv", "tab"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export figure")
        .set_file_name("figure.json")
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        if let Err(e) = export_json(&state.figure, &path) {
            log::error!("Failed to export figure: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_start_at_min_and_stay_in_range() {
        assert_eq!(year_marks(1800, 2000), vec![1800, 1850, 1900, 1950, 2000]);
        assert_eq!(year_marks(1960, 2021), vec![1960, 2010]);
        assert_eq!(year_marks(2000, 2000), vec![2000]);
    }
}
