use std::collections::BTreeSet;

use super::model::{LongRecord, LongTable};

// ---------------------------------------------------------------------------
// Selection: the two dashboard controls combined
// ---------------------------------------------------------------------------

/// Which countries the chart should show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CountrySelection {
    /// No explicit choice: every country with data in range.
    #[default]
    All,
    /// Only these countries. Never empty; see [`CountrySelection::from_names`].
    Only(BTreeSet<String>),
}

impl CountrySelection {
    /// Build a selection from the multi-select's current value.
    /// An empty list means "all countries".
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        if set.is_empty() {
            CountrySelection::All
        } else {
            CountrySelection::Only(set)
        }
    }

    pub fn contains(&self, country: &str) -> bool {
        match self {
            CountrySelection::All => true,
            CountrySelection::Only(set) => set.contains(country),
        }
    }

    /// Whether `country` was chosen explicitly (always false for `All`).
    pub fn is_picked(&self, country: &str) -> bool {
        matches!(self, CountrySelection::Only(set) if set.contains(country))
    }

    /// Add or remove one country, collapsing back to `All` when emptied.
    pub fn toggle(&mut self, country: &str) {
        let mut set = match std::mem::take(self) {
            CountrySelection::All => BTreeSet::new(),
            CountrySelection::Only(set) => set,
        };
        if !set.remove(country) {
            set.insert(country.to_string());
        }
        *self = CountrySelection::from_names(set);
    }

    /// Explicitly chosen names (empty for `All`).
    pub fn names(&self) -> Vec<&str> {
        match self {
            CountrySelection::All => Vec::new(),
            CountrySelection::Only(set) => set.iter().map(String::as_str).collect(),
        }
    }
}

/// Inclusive year interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// The range covering every year column of the table.
    pub fn full(table: &LongTable) -> Self {
        Self::new(table.min_year, table.max_year)
    }

    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }

    /// Clamp both ends into `[min, max]` and order them.
    pub fn clamped(self, min: i32, max: i32) -> Self {
        let a = self.start.clamp(min, max);
        let b = self.end.clamp(min, max);
        Self::new(a.min(b), a.max(b))
    }
}

/// Current value of both controls, always passed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub countries: CountrySelection,
    pub years: YearRange,
}

impl Selection {
    /// Initial control values: no countries picked, full year range.
    pub fn initial(table: &LongTable) -> Self {
        Self {
            countries: CountrySelection::All,
            years: YearRange::full(table),
        }
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Records passing both controls, in table order.
///
/// The year range is applied first, then the country selection.
pub fn filter_records<'a>(records: &'a [LongRecord], selection: &Selection) -> Vec<&'a LongRecord> {
    records
        .iter()
        .filter(|rec| selection.years.contains(rec.year))
        .filter(|rec| selection.countries.contains(&rec.country))
        .collect()
}
