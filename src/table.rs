//! Loading of comma-separated data tables
//!
//! Tables are plain CSV files whose first line is a header naming the columns.
//! Each table type comes with a [`Schema`] which tells which columns must be
//! present and how their values are coerced. Columns are matched by header
//! name, so their order in the file does not matter.
//!
//! Quoting is not supported: a value which contains a comma splits into two
//! fields, and the row is then rejected for not matching the header.

use crate::{error::LoadError, Integer};
use csv_async::{AsyncReaderBuilder, StringRecord};
use futures::StreamExt;
use std::{collections::HashMap, path::Path};

/// Expected shape of a data table
pub type Schema = &'static [Column];

/// Column that a [`Schema`] requires
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Column {
    /// Name of the column in the header
    pub name: &'static str,

    /// How values from this column are coerced
    pub kind: ColumnKind,
}

/// Coercion rule of a [`Column`]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ColumnKind {
    /// Kept as-is
    Text,

    /// Parsed as a base-10 integer
    Integer,
}

/// Typed value from a data table
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Value {
    Text(Box<str>),
    Integer(Integer),
}

/// Row from a data table, with values keyed by column name
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Row {
    /// Line of the source file where this row was found (1-based)
    line: u64,

    /// Values of the schema columns
    values: HashMap<&'static str, Value>,
}
//
impl Row {
    /// Line of the source file where this row was found (1-based)
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Value of a text column from the schema
    pub fn text(&self, column: &str) -> &str {
        match self.value(column) {
            Value::Text(text) => text,
            Value::Integer(_) => panic!("column {column:?} shouldn't be queried as text"),
        }
    }

    /// Value of an integer column from the schema
    pub fn integer(&self, column: &str) -> Integer {
        match self.value(column) {
            Value::Integer(int) => *int,
            Value::Text(_) => panic!("column {column:?} shouldn't be queried as an integer"),
        }
    }

    /// Value of a column from the schema
    fn value(&self, column: &str) -> &Value {
        self.values
            .get(column)
            .expect("rows shouldn't be queried for columns outside of their schema")
    }
}

/// Load all rows of a data table, in file order
pub async fn load(path: &Path, schema: Schema) -> Result<Vec<Row>, LoadError> {
    let contents = tokio::fs::read(path)
        .await
        .map_err(|source| LoadError::Open {
            path: path.to_owned(),
            source,
        })?;
    let read_error = |source| LoadError::Read {
        path: path.to_owned(),
        source,
    };
    let mut reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .create_reader(&contents[..]);

    // Locate schema columns in the header before looking at any data
    let header = reader.headers().await.map_err(read_error)?.clone();
    let positions = locate_columns(path, &header, schema)?;

    // Coerce every data row
    let mut lines = LineCounter::new(&contents);
    let mut rows = Vec::new();
    let mut records = reader.records();
    while let Some(record) = records.next().await {
        let record = record.map_err(read_error)?;
        let line = lines.line_at(record.position().map_or(0, |pos| pos.byte()));
        rows.push(coerce_row(path, line, header.len(), &positions, &record)?);
    }
    log::debug!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Translation of record byte offsets into physical line numbers
///
/// The CSV reader's own line count is off by one on CRLF-terminated files, so
/// lines are counted from the raw bytes instead. Offsets must be queried in
/// increasing order.
struct LineCounter<'contents> {
    /// Raw file contents
    contents: &'contents [u8],

    /// Offset up to which line breaks have been counted
    offset: usize,

    /// Number of line breaks before `offset`
    breaks: u64,
}
//
impl<'contents> LineCounter<'contents> {
    /// Start counting from the beginning of a file
    fn new(contents: &'contents [u8]) -> Self {
        Self {
            contents,
            offset: 0,
            breaks: 0,
        }
    }

    /// Line (1-based) where the record starting at some byte offset lies
    ///
    /// Record offsets may point at the line terminator(s) preceding the
    /// record, which are skipped.
    fn line_at(&mut self, byte: u64) -> u64 {
        let len = self.contents.len();
        let start = usize::try_from(byte).map_or(len, |byte| byte.min(len));
        let start = start
            + (self.contents[start..].iter())
                .take_while(|&&b| b == b'\r' || b == b'\n')
                .count();
        if start > self.offset {
            self.breaks += (self.contents[self.offset..start].iter())
                .filter(|&&b| b == b'\n')
                .count() as u64;
            self.offset = start;
        }
        self.breaks + 1
    }
}

/// Find the header index of each schema column
fn locate_columns(
    path: &Path,
    header: &StringRecord,
    schema: Schema,
) -> Result<Vec<(usize, Column)>, LoadError> {
    let mut positions = Vec::with_capacity(schema.len());
    for &column in schema {
        let mut matches = (header.iter().enumerate())
            .filter(|(_idx, name)| *name == column.name)
            .map(|(idx, _name)| idx);
        let Some(idx) = matches.next() else {
            return Err(LoadError::MissingColumn {
                path: path.to_owned(),
                column: column.name,
            });
        };
        if matches.next().is_some() {
            return Err(LoadError::DuplicateColumn {
                path: path.to_owned(),
                column: column.name,
            });
        }
        positions.push((idx, column));
    }
    for name in header.iter() {
        if !schema.iter().any(|column| column.name == name) {
            log::warn!("Ignoring unknown column {name:?} of {}", path.display());
        }
    }
    Ok(positions)
}

/// Turn a raw record into a typed row
fn coerce_row(
    path: &Path,
    line: u64,
    header_len: usize,
    positions: &[(usize, Column)],
    record: &StringRecord,
) -> Result<Row, LoadError> {
    if record.len() != header_len {
        return Err(LoadError::FieldCount {
            path: path.to_owned(),
            line,
            expected: header_len,
            found: record.len(),
        });
    }
    let mut values = HashMap::with_capacity(positions.len());
    for &(idx, column) in positions {
        let raw = &record[idx];
        let value = match column.kind {
            ColumnKind::Text => Value::Text(raw.into()),
            ColumnKind::Integer => {
                Value::Integer(raw.parse().map_err(|source| LoadError::Integer {
                    path: path.to_owned(),
                    line,
                    column: column.name,
                    value: raw.into(),
                    source,
                })?)
            }
        };
        values.insert(column.name, value);
    }
    Ok(Row { line, values })
}
