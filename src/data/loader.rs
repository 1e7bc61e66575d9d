use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{WideRow, WideTable};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while reading the wide GDP table.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Failed to open the file
    #[error("failed to open '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed delimited text
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    /// The header row is empty
    #[error("header has no country column")]
    MissingCountryColumn,

    #[error("header has no year columns")]
    NoYearColumns,

    /// A header label after the country column is not an integer year
    #[error("column {column}: '{label}' is not a year")]
    InvalidYearLabel { column: usize, label: String },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the wide table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` – comma separated (the Gapminder `gdp_pcap.csv` layout)
/// * `.tsv` – tab separated, same layout
pub fn load_file(path: &Path) -> Result<WideTable, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let delimiter = match ext.as_str() {
        "csv" => b',',
        "tsv" | "tab" => b'\t',
        other => return Err(LoadError::UnsupportedExtension(other.to_string())),
    };

    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_wide(file, delimiter)
}

/// Parse a wide table from any reader.
///
/// Layout: a header row `country,<year>,<year>,...` followed by one row per
/// country. Cells are kept as raw text; numeric coercion happens in
/// [`super::reshape::melt`]. Short rows are padded with blanks and surplus
/// cells are ignored.
pub fn read_wide<R: Read>(reader: R, delimiter: u8) -> Result<WideTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(LoadError::MissingCountryColumn);
    }

    let years = headers
        .iter()
        .enumerate()
        .skip(1)
        .map(|(column, label)| {
            label
                .trim()
                .parse::<i32>()
                .map_err(|_| LoadError::InvalidYearLabel {
                    column,
                    label: label.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if years.is_empty() {
        return Err(LoadError::NoYearColumns);
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let country = record.get(0).unwrap_or("").trim().to_string();
        let cells = (1..=years.len())
            .map(|i| record.get(i).unwrap_or("").to_string())
            .collect();
        rows.push(WideRow { country, cells });
    }

    Ok(WideTable { years, rows })
}
