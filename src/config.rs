use std::path::PathBuf;

use clap::Parser;

use crate::data::filter::{CountrySelection, Selection, YearRange};
use crate::data::model::LongTable;

/// Interactive GDP-per-capita dashboard.
#[derive(Parser, Debug)]
#[command(name = "gdp-dashboard", version, about)]
pub struct Config {
    /// Wide CSV/TSV table: country column followed by one column per year
    #[arg(env = "GDP_DASHBOARD_DATA", default_value = "gdp_pcap.csv")]
    pub data: PathBuf,

    /// Country to preselect (repeatable)
    #[arg(short, long = "country", value_name = "NAME")]
    pub countries: Vec<String>,

    /// Initial year range, `START..END` or a single `YEAR`
    #[arg(short, long, value_name = "RANGE", value_parser = parse_year_range)]
    pub years: Option<YearRange>,

    /// Write the figure as JSON to PATH (`-` for stdout) instead of opening a window
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}

impl Config {
    /// Starting selection for `table`, with the years clamped to its bounds.
    pub fn initial_selection(&self, table: &LongTable) -> Selection {
        let years = self
            .years
            .unwrap_or_else(|| YearRange::full(table))
            .clamped(table.min_year, table.max_year);
        Selection {
            countries: CountrySelection::from_names(self.countries.iter().cloned()),
            years,
        }
    }
}

fn parse_year_range(s: &str) -> Result<YearRange, String> {
    let parse = |t: &str| {
        t.trim()
            .parse::<i32>()
            .map_err(|_| format!("'{t}' is not a year"))
    };
    match s.split_once("..") {
        Some((start, end)) => {
            let end = end.strip_prefix('=').unwrap_or(end);
            Ok(YearRange::new(parse(start)?, parse(end)?))
        }
        None => {
            let year = parse(s)?;
            Ok(YearRange::new(year, year))
        }
    }
}
