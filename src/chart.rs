use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::data::filter::{Selection, filter_records};
use crate::data::model::LongTable;

pub const TITLE: &str = "GDP per Capita by Country Through the Years";
pub const X_AXIS_LABEL: &str = "Year";
pub const Y_AXIS_LABEL: &str = "GDP per Capita";

// ---------------------------------------------------------------------------
// Figure description
// ---------------------------------------------------------------------------

/// One line of the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub country: String,
    /// `(year, value)` in ascending year order.
    pub points: Vec<(i32, f64)>,
}

/// Everything needed to draw the line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub series: Vec<Series>,
}

impl Figure {
    pub fn empty() -> Self {
        Self {
            title: TITLE,
            x_label: X_AXIS_LABEL,
            y_label: Y_AXIS_LABEL,
            series: Vec::new(),
        }
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Recompute the whole figure for the current controls.
///
/// Series appear in the order their country first shows up in the filtered,
/// year-sorted records. Selected countries with no data in range get no
/// series at all.
pub fn build_figure(table: &LongTable, selection: &Selection) -> Figure {
    let mut series: Vec<Series> = Vec::new();

    for rec in filter_records(&table.records, selection) {
        let point = (rec.year, rec.value);
        match series.iter_mut().find(|s| s.country == rec.country) {
            Some(s) => s.points.push(point),
            None => series.push(Series {
                country: rec.country.clone(),
                points: vec![point],
            }),
        }
    }

    for s in &mut series {
        s.points.sort_by_key(|&(year, _)| year);
    }

    log::debug!(
        "Rebuilt figure for {:?} {}..={}: {} series",
        selection.countries,
        selection.years.start,
        selection.years.end,
        series.len()
    );

    Figure {
        series,
        ..Figure::empty()
    }
}

/// Write the figure as pretty JSON to `path`, or to stdout when `path` is `-`.
pub fn export_json(figure: &Figure, path: &Path) -> Result<()> {
    if path == Path::new("-") {
        let mut out = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut out, figure).context("writing figure to stdout")?;
        writeln!(out)?;
        return Ok(());
    }
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(file, figure).context("serialising figure")?;
    log::info!("Exported {} series to {}", figure.series.len(), path.display());
    Ok(())
}
