//! Program configuration

use crate::{display::OutputFormat, search::Criteria, Args};
use std::path::PathBuf;

/// Final process configuration
///
/// This is the digested form of [`Args`]. Please refer to [`Args`] to know more
/// about individual settings.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Config {
    /// Location of the cuisine table
    pub cuisines_path: PathBuf,

    /// Location of the restaurant table
    pub restaurants_path: PathBuf,

    /// Criteria that were specified on the command line
    pub criteria: Criteria,

    /// Truth that missing criteria should be asked for interactively
    pub prompt: bool,

    /// Format of the search results
    pub output: OutputFormat,
}
//
impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let Args {
            restaurants,
            cuisines,
            name,
            min_rating,
            max_distance,
            max_price,
            cuisine,
            no_prompt,
            csv,
        } = args;
        Self {
            cuisines_path: cuisines,
            restaurants_path: restaurants,
            criteria: Criteria {
                name: name.map(String::into_boxed_str),
                customer_rating: min_rating,
                distance: max_distance,
                price: max_price,
                cuisine: cuisine.map(String::into_boxed_str),
            },
            prompt: !no_prompt,
            output: if csv {
                OutputFormat::Csv
            } else {
                OutputFormat::Table
            },
        }
    }
}
