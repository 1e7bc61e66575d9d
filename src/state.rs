use std::path::{Path, PathBuf};

use crate::chart::{Figure, build_figure};
use crate::color::ColorMap;
use crate::data::filter::{CountrySelection, Selection, YearRange};
use crate::data::loader::{LoadError, load_file};
use crate::data::model::LongTable;
use crate::data::reshape::melt;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Long-form dataset (None until a file is loaded).
    pub dataset: Option<LongTable>,

    /// Where the current dataset came from.
    pub source_path: Option<PathBuf>,

    /// Current value of both controls.
    pub selection: Selection,

    /// Chart derived from `dataset` and `selection` (cached).
    pub figure: Figure,

    /// Colour per country of the current dataset.
    pub color_map: Option<ColorMap>,

    /// Text typed into the country search box.
    pub country_search: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            source_path: None,
            selection: Selection {
                countries: CountrySelection::All,
                years: YearRange::new(0, 0),
            },
            figure: Figure::empty(),
            color_map: None,
            country_search: String::new(),
            status_message: None,
        }
    }
}

/// Read and reshape a data file.
pub fn load_dataset(path: &Path) -> Result<LongTable, LoadError> {
    let wide = load_file(path)?;
    let table = melt(&wide);
    if table.is_empty() {
        log::warn!("{} has no numeric values", path.display());
    }
    log::info!(
        "Loaded {} countries, {} records, years {}..={} from {}",
        table.countries.len(),
        table.len(),
        table.min_year,
        table.max_year,
        path.display()
    );
    Ok(table)
}

impl AppState {
    /// Ingest a newly loaded dataset and reset both controls.
    pub fn set_dataset(&mut self, dataset: LongTable, source: Option<PathBuf>) {
        self.selection = Selection::initial(&dataset);
        self.color_map = Some(ColorMap::new(&dataset.countries));
        self.dataset = Some(dataset);
        self.source_path = source;
        self.country_search.clear();
        self.status_message = None;
        self.refresh();
    }

    /// Load a file, keeping the current dataset if that fails.
    pub fn open(&mut self, path: &Path) {
        match load_dataset(path) {
            Ok(table) => self.set_dataset(table, Some(path.to_path_buf())),
            Err(e) => {
                log::error!("Failed to load file: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Replace the selection wholesale, clamping the years into the dataset.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
        if let Some(ds) = &self.dataset {
            self.selection.years = self.selection.years.clamped(ds.min_year, ds.max_year);
        }
        self.refresh();
    }

    /// Recompute the figure from scratch.
    pub fn refresh(&mut self) {
        self.figure = match &self.dataset {
            Some(ds) => build_figure(ds, &self.selection),
            None => Figure::empty(),
        };
    }

    /// Toggle a single country in the multi-select.
    pub fn toggle_country(&mut self, country: &str) {
        self.selection.countries.toggle(country);
        self.refresh();
    }

    /// Empty the multi-select (show every country).
    pub fn clear_countries(&mut self) {
        self.selection.countries = CountrySelection::All;
        self.refresh();
    }

    /// Move the lower end of the year range; the upper end follows if needed.
    pub fn set_start_year(&mut self, year: i32) {
        let years = &mut self.selection.years;
        years.start = year;
        years.end = years.end.max(year);
        self.refresh();
    }

    /// Move the upper end of the year range; the lower end follows if needed.
    pub fn set_end_year(&mut self, year: i32) {
        let years = &mut self.selection.years;
        years.end = year;
        years.start = years.start.min(year);
        self.refresh();
    }

    /// Countries of the dataset matching the search box, case-insensitively.
    pub fn matching_countries(&self) -> Vec<&str> {
        let Some(ds) = &self.dataset else {
            return Vec::new();
        };
        let needle = self.country_search.trim().to_lowercase();
        ds.countries
            .iter()
            .map(String::as_str)
            .filter(|c| needle.is_empty() || c.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{WideRow, WideTable};

    fn loaded() -> AppState {
        let wide = WideTable {
            years: vec![2000, 2010],
            rows: vec![
                WideRow {
                    country: "Albania".to_string(),
                    cells: vec!["100".to_string(), String::new()],
                },
                WideRow {
                    country: "Brazil".to_string(),
                    cells: vec!["200".to_string(), "300".to_string()],
                },
            ],
        };
        let mut state = AppState::default();
        state.set_dataset(melt(&wide), None);
        state
    }

    #[test]
    fn initial_figure_shows_everything() {
        let state = loaded();
        assert_eq!(state.selection.years, YearRange::new(2000, 2010));
        assert_eq!(state.figure.series.len(), 2);
        assert_eq!(state.figure.point_count(), 3);
    }

    #[test]
    fn every_control_change_recomputes() {
        let mut state = loaded();

        state.toggle_country("Brazil");
        assert_eq!(state.figure.series.len(), 1);
        assert_eq!(state.figure.series[0].country, "Brazil");

        state.set_start_year(2010);
        assert_eq!(state.figure.series[0].points, vec![(2010, 300.0)]);

        state.clear_countries();
        assert_eq!(state.figure.series.len(), 1);

        state.set_end_year(2000);
        assert_eq!(state.selection.years, YearRange::new(2000, 2000));
        assert_eq!(state.figure.series.len(), 2);
    }

    #[test]
    fn set_selection_clamps_years() {
        let mut state = loaded();
        state.set_selection(Selection {
            countries: CountrySelection::All,
            years: YearRange::new(1900, 2100),
        });
        assert_eq!(state.selection.years, YearRange::new(2000, 2010));
    }

    #[test]
    fn search_filters_options() {
        let mut state = loaded();
        state.country_search = "  BRA ".to_string();
        assert_eq!(state.matching_countries(), vec!["Brazil"]);
        state.country_search.clear();
        assert_eq!(state.matching_countries().len(), 2);
    }

    #[test]
    fn failed_open_keeps_dataset() {
        let mut state = loaded();
        let dir = tempfile::tempdir().unwrap();
        state.open(&dir.path().join("missing.csv"));
        assert!(state.dataset.is_some());
        assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));
    }

    #[test]
    fn open_replaces_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gdp_pcap.csv");
        std::fs::write(&path, "country,1950,1951\nKenya,1.5,2.5\n").unwrap();

        let mut state = loaded();
        state.toggle_country("Brazil");
        state.open(&path);

        assert_eq!(state.selection.countries, CountrySelection::All);
        assert_eq!(state.selection.years, YearRange::new(1950, 1951));
        assert_eq!(state.figure.series[0].country, "Kenya");
        assert_eq!(state.source_path.as_deref(), Some(path.as_path()));
    }
}
