use thiserror::Error;

/// Parsed tabular data: named columns in source order plus data rows.
///
/// Invariant: every row holds exactly one value per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A header parsed but no data rows followed. Callers treat this as a
    /// warning, never a failure.
    #[error("the dataset has a header but no data rows")]
    EmptyDataset,
    #[error("the response body has no header row")]
    MissingHeader,
    #[error("row {row} has {got} fields but the header declares {expected}")]
    RowTooWide {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("malformed csv: {0}")]
    Malformed(String),
}

/// Parses CSV text into a [`Table`], first row as header.
///
/// Quoted fields may contain commas and newlines. Rows shorter than the
/// header are padded with empty cells; rows wider than the header are
/// rejected.
pub fn parse_table(text: &str) -> Result<Table, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|err| ParseError::Malformed(err.to_string()))?
        .iter()
        .map(ToOwned::to_owned)
        .collect();
    if columns.is_empty() || columns.iter().all(|name| name.is_empty()) {
        return Err(ParseError::MissingHeader);
    }

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|err| ParseError::Malformed(err.to_string()))?;
        if record.len() > columns.len() {
            return Err(ParseError::RowTooWide {
                row: index + 1,
                expected: columns.len(),
                got: record.len(),
            });
        }
        let mut row: Vec<String> = record.iter().map(ToOwned::to_owned).collect();
        row.resize(columns.len(), String::new());
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ParseError::EmptyDataset);
    }

    Ok(Table { columns, rows })
}
