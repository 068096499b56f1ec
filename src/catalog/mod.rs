//! In-memory catalogs built from the data tables
//!
//! Loading happens in two phases: the cuisine catalog is built first, then
//! handed to the restaurant loader so that every restaurant comes out with its
//! cuisine name already resolved.

pub mod cuisine;
pub mod restaurant;

pub use self::{
    cuisine::CuisineCatalog,
    restaurant::{Restaurant, RestaurantCatalog},
};
use crate::error::LoadError;
use std::path::Path;

/// Load the restaurant catalog along with the cuisines it refers to
pub async fn load(
    cuisines_path: &Path,
    restaurants_path: &Path,
) -> Result<RestaurantCatalog, LoadError> {
    let cuisines = CuisineCatalog::load(cuisines_path).await?;
    RestaurantCatalog::load(restaurants_path, &cuisines).await
}
