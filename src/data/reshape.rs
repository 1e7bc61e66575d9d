use super::model::{LongRecord, LongTable, WideTable};

// ---------------------------------------------------------------------------
// Wide → long
// ---------------------------------------------------------------------------

/// Coerce a raw cell to a number. Blank, non-numeric and NaN cells are absent.
pub fn parse_cell(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Melt the wide table into `(country, year, value)` records.
///
/// Cells that do not coerce to a number are dropped, never nulled. The result
/// is stably sorted by year and then value, so equal keys keep row order.
pub fn melt(table: &WideTable) -> LongTable {
    let mut records = Vec::with_capacity(table.rows.len() * table.years.len());

    for row in &table.rows {
        let before = records.len();
        for (&year, cell) in table.years.iter().zip(&row.cells) {
            if let Some(value) = parse_cell(cell) {
                records.push(LongRecord {
                    country: row.country.clone(),
                    year,
                    value,
                });
            }
        }
        if records.len() == before {
            log::warn!("No numeric values for '{}'", row.country);
        }
    }

    records.sort_by(|a, b| a.year.cmp(&b.year).then(a.value.total_cmp(&b.value)));

    let (min_year, max_year) = table.year_bounds().unwrap_or((0, 0));
    LongTable {
        records,
        countries: table.countries(),
        min_year,
        max_year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::WideRow;

    fn wide(years: &[i32], rows: &[(&str, &[&str])]) -> WideTable {
        WideTable {
            years: years.to_vec(),
            rows: rows
                .iter()
                .map(|(country, cells)| WideRow {
                    country: country.to_string(),
                    cells: cells.iter().map(|c| c.to_string()).collect(),
                })
                .collect(),
        }
    }

    fn triples(table: &LongTable) -> Vec<(&str, i32, f64)> {
        table
            .records
            .iter()
            .map(|r| (r.country.as_str(), r.year, r.value))
            .collect()
    }

    #[test]
    fn blank_cells_are_excluded() {
        let table = melt(&wide(&[2000, 2010], &[("A", &["100", ""]), ("B", &["200", "300"])]));

        assert_eq!(
            triples(&table),
            vec![("A", 2000, 100.0), ("B", 2000, 200.0), ("B", 2010, 300.0)]
        );
        assert_eq!(table.countries, vec!["A", "B"]);
        assert_eq!((table.min_year, table.max_year), (2000, 2010));
    }

    #[test]
    fn non_numeric_cells_produce_no_records() {
        let table = melt(&wide(
            &[1990, 1991, 1992, 1993],
            &[("X", &["12k", "n/a", " 7.5 ", "NaN"])],
        ));
        assert_eq!(triples(&table), vec![("X", 1992, 7.5)]);
    }

    #[test]
    fn country_without_values_keeps_its_option() {
        let table = melt(&wide(&[2000], &[("Empty", &["-"]), ("Full", &["1"])]));
        assert_eq!(table.len(), 1);
        assert_eq!(table.countries, vec!["Empty", "Full"]);
    }

    #[test]
    fn sorted_by_year_then_value() {
        let table = melt(&wide(
            &[2010, 2000],
            &[("A", &["5", "30"]), ("B", &["1", "10"]), ("C", &["5", "20"])],
        ));
        assert_eq!(
            triples(&table),
            vec![
                ("B", 2000, 10.0),
                ("C", 2000, 20.0),
                ("A", 2000, 30.0),
                ("B", 2010, 1.0),
                ("A", 2010, 5.0),
                ("C", 2010, 5.0),
            ]
        );
    }

    #[test]
    fn every_record_matches_its_source_cell() {
        let source = wide(
            &[2000, 2001, 2002],
            &[("P", &["1.5", "abc", "-3"]), ("Q", &["", "4e2", "0"])],
        );
        let table = melt(&source);

        for rec in &table.records {
            let row = source.rows.iter().find(|r| r.country == rec.country).unwrap();
            let col = source.years.iter().position(|&y| y == rec.year).unwrap();
            assert_eq!(parse_cell(&row.cells[col]), Some(rec.value));
        }
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn parse_cell_rules() {
        assert_eq!(parse_cell("42"), Some(42.0));
        assert_eq!(parse_cell("\t3.25\n"), Some(3.25));
        assert_eq!(parse_cell(""), None);
        assert_eq!(parse_cell("   "), None);
        assert_eq!(parse_cell("1,000"), None);
        assert_eq!(parse_cell("nan"), None);
    }
}
