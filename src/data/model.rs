use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// WideTable – the raw table as read from disk
// ---------------------------------------------------------------------------

/// One row of the source file: a country and one raw cell per year column.
#[derive(Debug, Clone, PartialEq)]
pub struct WideRow {
    pub country: String,
    /// Raw cell text, same length and order as [`WideTable::years`].
    pub cells: Vec<String>,
}

/// The raw wide table (one row per country, one column per year).
#[derive(Debug, Clone, PartialEq)]
pub struct WideTable {
    /// Year column labels in file order.
    pub years: Vec<i32>,
    pub rows: Vec<WideRow>,
}

impl WideTable {
    /// Distinct country names in the order they first appear.
    pub fn countries(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.rows
            .iter()
            .filter(|row| seen.insert(row.country.as_str()))
            .map(|row| row.country.clone())
            .collect()
    }

    /// Smallest and largest year column label.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.years.iter().copied().min()?;
        let max = self.years.iter().copied().max()?;
        Some((min, max))
    }
}

// ---------------------------------------------------------------------------
// LongTable – the melted (country, year, value) form
// ---------------------------------------------------------------------------

/// A single (country, year, value) observation.
#[derive(Debug, Clone, PartialEq)]
pub struct LongRecord {
    pub country: String,
    pub year: i32,
    pub value: f64,
}

/// Long-form table sorted by `(year, value)` ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct LongTable {
    pub records: Vec<LongRecord>,
    /// Distinct countries of the raw table, including those without data.
    pub countries: Vec<String>,
    /// Year bounds of the raw table's columns (inclusive).
    pub min_year: i32,
    pub max_year: i32,
}

impl LongTable {
    /// Number of long-form records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no cell survived the numeric coercion.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: &str, cells: &[&str]) -> WideRow {
        WideRow {
            country: country.to_string(),
            cells: cells.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn countries_are_distinct_in_first_seen_order() {
        let table = WideTable {
            years: vec![2000],
            rows: vec![row("Chad", &["1"]), row("Peru", &["2"]), row("Chad", &["3"])],
        };
        assert_eq!(table.countries(), vec!["Chad", "Peru"]);
    }

    #[test]
    fn year_bounds_ignore_column_order() {
        let table = WideTable {
            years: vec![2010, 1990, 2000],
            rows: Vec::new(),
        };
        assert_eq!(table.year_bounds(), Some((1990, 2010)));
        assert_eq!(
            WideTable { years: Vec::new(), rows: Vec::new() }.year_bounds(),
            None
        );
    }
}
