//! Catalog of restaurants, with cuisine names resolved at load time

use super::cuisine::CuisineCatalog;
use crate::{
    error::LoadError,
    table::{self, Column, ColumnKind, Row, Schema},
    Distance, Price, Rating,
};
use serde::Serialize;
use std::path::Path;

/// Restaurant from the restaurant table
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Restaurant {
    /// Restaurant name
    pub name: Box<str>,

    /// Average customer rating, from 1 to 5 stars
    pub customer_rating: Rating,

    /// Distance from the user in miles
    pub distance: Distance,

    /// Average price per person in dollars
    pub price: Price,

    /// Name of the cuisine served here
    pub cuisine: Box<str>,
}
//
impl Restaurant {
    /// Columns of the restaurant table
    pub const SCHEMA: Schema = &[
        Column {
            name: "name",
            kind: ColumnKind::Text,
        },
        Column {
            name: "customer_rating",
            kind: ColumnKind::Integer,
        },
        Column {
            name: "distance",
            kind: ColumnKind::Integer,
        },
        Column {
            name: "price",
            kind: ColumnKind::Integer,
        },
        Column {
            name: "cuisine_id",
            kind: ColumnKind::Integer,
        },
    ];

    /// Extract a restaurant from a row of the restaurant table, replacing the
    /// cuisine identifier with the matching cuisine name
    fn from_row(path: &Path, row: &Row, cuisines: &CuisineCatalog) -> Result<Self, LoadError> {
        let name = row.text("name");
        let cuisine_id = row.integer("cuisine_id");
        let cuisine = cuisines
            .name(cuisine_id)
            .ok_or_else(|| LoadError::UnknownCuisine {
                path: path.to_owned(),
                line: row.line(),
                restaurant: name.into(),
                cuisine_id,
            })?;
        Ok(Self {
            name: name.into(),
            customer_rating: row.integer("customer_rating"),
            distance: row.integer("distance"),
            price: row.integer("price"),
            cuisine: cuisine.into(),
        })
    }
}

/// All known restaurants, in data file order
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RestaurantCatalog(Box<[Restaurant]>);
//
impl RestaurantCatalog {
    /// Load the restaurant table
    ///
    /// The cuisine catalog must be loaded first, as every restaurant's cuisine
    /// is resolved while loading.
    pub async fn load(path: &Path, cuisines: &CuisineCatalog) -> Result<Self, LoadError> {
        let rows = table::load(path, Restaurant::SCHEMA).await?;
        let catalog = (rows.iter())
            .map(|row| Restaurant::from_row(path, row, cuisines))
            .collect::<Result<Self, _>>()?;
        log::info!(
            "Loaded {} restaurants from {}",
            catalog.restaurants().len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Access the restaurants in data file order
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.0[..]
    }
}
//
impl FromIterator<Restaurant> for RestaurantCatalog {
    fn from_iter<I: IntoIterator<Item = Restaurant>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
