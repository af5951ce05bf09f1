// File: crates/trends-core/src/table.rs
// Summary: Delimited text -> rectangular table -> ordered records, plus row/column transposition.
// Notes:
// - The stored figure file has one row per category (quarter) and one column per series;
//   it is transposed before parsing so that every series becomes one record.
// - Blank lines are skipped by the csv reader. Quoting follows the csv crate; fields that
//   contain the delimiter are not part of the supported input format.

use crate::error::TableError;

/// One transposed row: field name -> raw value, in header order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Value of the first field called `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Rectangular grid of raw cells. Row 0 is the header once converted to records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Read comma-delimited text. Every non-blank row must have the width of the first one.
    pub fn read(text: &str) -> Result<Self, TableError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut rows: Vec<Vec<String>> = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            let row = rec.iter().map(str::to_string).collect::<Vec<_>>();
            if let Some(first) = rows.first() {
                if row.len() != first.len() {
                    let line = rec.position().map(|p| p.line() as usize).unwrap_or(rows.len() + 1);
                    return Err(TableError::Ragged { line, expected: first.len(), found: row.len() });
                }
            }
            rows.push(row);
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<String>] { &self.rows }

    pub fn width(&self) -> usize { self.rows.first().map_or(0, Vec::len) }

    /// Swap rows and columns. Relies on the rectangular invariant from `read`.
    pub fn transposed(&self) -> Self {
        let width = self.width();
        let rows: Vec<Vec<String>> = (0..width)
            .map(|c| self.rows.iter().map(|r| r[c].clone()).collect::<Vec<_>>())
            .collect();
        Self { rows }
    }

    /// Header row becomes field names; each following row becomes one record.
    pub fn into_records(self) -> Vec<Record> {
        let mut it = self.rows.into_iter();
        let Some(header) = it.next() else { return Vec::new() };
        it.map(|row| Record::new(header.iter().cloned().zip(row).collect()))
            .collect()
    }

    /// Serialize back to comma-delimited text, one line per row.
    pub fn to_csv(&self) -> Result<String, TableError> {
        let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(Vec::new());
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| TableError::Csv(e.into_error().into()))?;
        // Every cell came from a &str, so the output is valid UTF-8.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Parse transposed text into records (header row = field names).
pub fn parse_records(text: &str) -> Result<Vec<Record>, TableError> {
    Ok(Table::read(text)?.into_records())
}

/// Transpose delimited text so that its rows become columns.
pub fn transpose(text: &str) -> Result<String, TableError> {
    Table::read(text)?.transposed().to_csv()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_lookup_and_order() {
        let r: Record = [("Name", "A"), ("Q1", "1"), ("Q2", "2")].into_iter().collect();
        assert_eq!(r.get("Q2"), Some("2"));
        assert_eq!(r.get("Q3"), None);
        assert_eq!(r.field_names().collect::<Vec<_>>(), vec!["Name", "Q1", "Q2"]);
    }

    #[test]
    fn transposed_swaps_axes() {
        let t = Table::read("a,b,c\n1,2,3").unwrap().transposed();
        assert_eq!(t.rows(), &[vec!["a", "1"], vec!["b", "2"], vec!["c", "3"]]);
    }
}
