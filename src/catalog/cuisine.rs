//! Catalog of known cuisines

use crate::{
    error::LoadError,
    lookup,
    table::{self, Column, ColumnKind, Row, Schema},
    CuisineId,
};
use std::{collections::HashMap, path::Path};

/// Cuisine from the cuisine table
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Cuisine {
    /// Unique identifier, as referenced by restaurants
    pub id: CuisineId,

    /// Human-readable name
    pub name: Box<str>,
}
//
impl Cuisine {
    /// Columns of the cuisine table
    pub const SCHEMA: Schema = &[
        Column {
            name: "id",
            kind: ColumnKind::Integer,
        },
        Column {
            name: "name",
            kind: ColumnKind::Text,
        },
    ];

    /// Extract a cuisine from a row of the cuisine table
    fn from_row(row: &Row) -> Self {
        Self {
            id: row.integer("id"),
            name: row.text("name").into(),
        }
    }
}

/// Cuisines indexed by identifier
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CuisineCatalog(HashMap<CuisineId, Cuisine>);
//
impl CuisineCatalog {
    /// Load the cuisine table
    pub async fn load(path: &Path) -> Result<Self, LoadError> {
        let rows = table::load(path, Cuisine::SCHEMA).await?;
        let catalog = Self::new(rows.iter().map(Cuisine::from_row)).map_err(|source| {
            LoadError::DuplicateKey {
                path: path.to_owned(),
                source,
            }
        })?;
        log::info!("Loaded {} cuisines from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Index a set of cuisines, which must have distinct identifiers
    pub fn new(
        cuisines: impl IntoIterator<Item = Cuisine>,
    ) -> Result<Self, lookup::DuplicateKey<CuisineId>> {
        lookup::build_lookup(cuisines, |cuisine| cuisine.id).map(Self)
    }

    /// Name of the cuisine with a certain identifier, if it exists
    pub fn name(&self, id: CuisineId) -> Option<&str> {
        self.0.get(&id).map(|cuisine| &*cuisine.name)
    }

    /// Number of known cuisines
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
