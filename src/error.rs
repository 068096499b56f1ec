//! Faults raised while loading the catalogs

use crate::{lookup::DuplicateKey, CuisineId};
use std::{num::ParseIntError, path::PathBuf};
use thiserror::Error;

/// Anything that can go wrong while turning a data file into a catalog
///
/// All of these are fatal: a catalog is used for the whole lifetime of the
/// process, so a partially loaded one is never handed out.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data file could not be opened
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader failed (I/O error, invalid UTF-8...)
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv_async::Error,
    },

    /// The header does not provide a column that the schema requires
    #[error("{}: header lacks the required column {column:?}", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    /// The header names a schema column more than once
    #[error("{}: header names column {column:?} more than once", path.display())]
    DuplicateColumn { path: PathBuf, column: &'static str },

    /// A line does not have as many fields as the header
    #[error("{}:{line}: expected {expected} fields like the header, found {found}", path.display())]
    FieldCount {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A numeric column holds something that is not an integer
    #[error("{}:{line}: column {column:?} should be an integer, found {value:?}", path.display())]
    Integer {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: Box<str>,
        #[source]
        source: ParseIntError,
    },

    /// Two records of a keyed table share the same key
    #[error("{}: {source}", path.display())]
    DuplicateKey {
        path: PathBuf,
        #[source]
        source: DuplicateKey<CuisineId>,
    },

    /// A restaurant refers to a cuisine that does not exist
    #[error("{}:{line}: restaurant {restaurant:?} refers to unknown cuisine id {cuisine_id}", path.display())]
    UnknownCuisine {
        path: PathBuf,
        line: u64,
        restaurant: Box<str>,
        cuisine_id: CuisineId,
    },
}
