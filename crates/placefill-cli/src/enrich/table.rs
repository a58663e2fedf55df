//! In-memory delimited table: the input dataset plus appended columns.

use std::io;
use std::path::Path;

use placefill_core::InputRecord;

pub(crate) const ORGANIZATION_NAME: &str = "organization_name";
pub(crate) const CITY: &str = "city";
pub(crate) const STATE: &str = "state";
pub(crate) const ORGANIZATION_WEBSITE_URL: &str = "organization_website_url";

#[derive(Debug, thiserror::Error)]
pub(crate) enum TableError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row} has {cells} cells but the header has {columns}")]
    RowTooLong {
        row: usize,
        cells: usize,
        columns: usize,
    },
}

/// Header row and data rows, every row exactly as wide as the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub(crate) fn read(path: &Path) -> Result<Self, TableError> {
        let file = std::fs::File::open(path).map_err(csv::Error::from)?;
        Self::from_reader(file)
    }

    /// Parses CSV with a header row. Short rows are padded with empty
    /// cells; rows wider than the header are rejected.
    pub(crate) fn from_reader<R: io::Read>(reader: R) -> Result<Self, TableError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_owned())
            .collect();

        let mut rows = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            if record.len() > headers.len() {
                return Err(TableError::RowTooLong {
                    row: idx + 1,
                    cells: record.len(),
                    columns: headers.len(),
                });
            }
            let mut row: Vec<String> = record.iter().map(str::to_owned).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    pub(crate) fn headers(&self) -> &[String] {
        &self.headers
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub(crate) fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Reads the matching columns of every row. A missing column reads as
    /// absent for every row.
    pub(crate) fn input_records(&self) -> Vec<InputRecord> {
        let name = self.column_index(ORGANIZATION_NAME);
        let city = self.column_index(CITY);
        let state = self.column_index(STATE);
        let website = self.column_index(ORGANIZATION_WEBSITE_URL);

        for (column, index) in [
            (ORGANIZATION_NAME, name),
            (CITY, city),
            (STATE, state),
            (ORGANIZATION_WEBSITE_URL, website),
        ] {
            if index.is_none() {
                tracing::warn!(column, "input has no such column; treating it as empty");
            }
        }

        (0..self.rows.len())
            .map(|row| {
                let get = |col: Option<usize>| col.and_then(|c| self.cell(row, c));
                InputRecord::from_cells(get(name), get(city), get(state), get(website))
            })
            .collect()
    }

    /// Sets `name` to `values`, one per row. An existing column of that name
    /// is overwritten in place; otherwise the column is appended.
    ///
    /// `values` shorter than the table leaves the remaining cells empty.
    pub(crate) fn set_column(&mut self, name: &str, values: Vec<String>) {
        let index = if let Some(index) = self.column_index(name) {
            index
        } else {
            self.headers.push(name.to_owned());
            for row in &mut self.rows {
                row.push(String::new());
            }
            self.headers.len() - 1
        };

        let mut values = values.into_iter();
        for row in &mut self.rows {
            row[index] = values.next().unwrap_or_default();
        }
    }

    pub(crate) fn write(&self, path: &Path) -> Result<(), TableError> {
        let file = std::fs::File::create(path).map_err(csv::Error::from)?;
        self.write_to(file)
    }

    pub(crate) fn write_to<W: io::Write>(&self, writer: W) -> Result<(), TableError> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}
