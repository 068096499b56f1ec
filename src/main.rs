//! Restaurant recommendations from a local restaurant catalog
//!
//! Restaurants and cuisines are loaded from two CSV tables, then filtered with
//! user-supplied criteria and ranked by distance, customer rating and price.

mod catalog;
mod config;
mod display;
mod error;
mod lookup;
mod questionnaire;
mod search;
mod table;

use crate::{
    config::Config,
    questionnaire::{DISTANCES, PRICES, RATINGS},
};
use anyhow::Context;
use clap::{value_parser, Parser};
use log::LevelFilter;
use std::path::PathBuf;
use tokio::io::BufWriter;

/// Find the best nearby restaurants matching your criteria
///
/// Restaurants are ranked by increasing distance, then by decreasing customer
/// rating, then by increasing price, and the top 5 are displayed. Criteria
/// which are not specified on the command line are asked for interactively,
/// unless --no-prompt is specified.
#[derive(Parser, Debug)]
#[command(version, author)]
struct Args {
    /// Restaurant table
    ///
    /// CSV file with a header line naming the columns name, customer_rating,
    /// distance, price and cuisine_id.
    #[arg(long, default_value = "./csv/restaurants.csv")]
    restaurants: PathBuf,

    /// Cuisine table
    ///
    /// CSV file with a header line naming the columns id and name.
    #[arg(long, default_value = "./csv/cuisines.csv")]
    cuisines: PathBuf,

    /// Text that the restaurant name must contain (ignoring case)
    #[arg(short, long)]
    name: Option<String>,

    /// Minimum customer rating, from 1 to 5 stars
    #[arg(short = 'r', long, value_parser = value_parser!(i64).range(RATINGS))]
    min_rating: Option<Rating>,

    /// Maximum distance, from 1 to 10 miles
    #[arg(short = 'd', long, value_parser = value_parser!(i64).range(DISTANCES))]
    max_distance: Option<Distance>,

    /// Maximum average price per person, from 1 to 50 dollars
    #[arg(short = 'p', long, value_parser = value_parser!(i64).range(PRICES))]
    max_price: Option<Price>,

    /// Text that the cuisine name must contain (ignoring case)
    #[arg(short, long)]
    cuisine: Option<String>,

    /// Don't ask for the criteria which were not specified on the command line
    #[arg(long, default_value_t = false)]
    no_prompt: bool,

    /// Print the results as CSV instead of a table
    #[arg(long, default_value_t = false)]
    csv: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Set up logging
    if let Err(e) = setup_logging() {
        eprintln!("Logging is disabled because syslog is unavailable: {e}");
    }

    // Decode CLI arguments
    let config = Config::from(Args::parse());

    // Load the catalogs before asking anything, so that broken data files are
    // reported right away
    let restaurants = catalog::load(&config.cuisines_path, &config.restaurants_path)
        .await
        .context("loading the restaurant catalog")?;

    // Collect the remaining search criteria
    let criteria = if config.prompt {
        questionnaire::complete(config.criteria).context("asking for search criteria")?
    } else {
        config.criteria
    };

    // Search and display the best restaurants
    let results = search::search(&restaurants, &criteria);
    let stdout = BufWriter::new(tokio::io::stdout());
    display::write_results(stdout, config.output, &results).await?;
    Ok(())
}

/// Use anyhow for Result type erasure
pub use anyhow::Result;

/// Integer value from a data table
pub type Integer = i64;

/// Identifier of a cuisine
pub type CuisineId = Integer;

/// Customer rating, in stars from 1 to 5
pub type Rating = Integer;

/// Distance in miles
pub type Distance = Integer;

/// Average price per person in dollars
pub type Price = Integer;

/// Set up logging
fn setup_logging() -> syslog::Result<()> {
    syslog::init(
        syslog::Facility::LOG_USER,
        if cfg!(feature = "log-trace") {
            LevelFilter::Trace
        } else if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        None,
    )
}
