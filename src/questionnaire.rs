//! Interactive collection of search criteria

use crate::{search::Criteria, Distance, Integer, Price, Rating};
use dialoguer::{Input, Select};
use std::ops::RangeInclusive;

/// Accepted customer rating criteria
pub const RATINGS: RangeInclusive<Rating> = 1..=5;

/// Accepted distance criteria, in miles
pub const DISTANCES: RangeInclusive<Distance> = 1..=10;

/// Accepted price criteria, in dollars per person
pub const PRICES: RangeInclusive<Price> = 1..=50;

/// Ask the user for every criterion that is not known yet
///
/// Each question can be skipped, which leaves the matching criterion unset.
pub fn complete(mut criteria: Criteria) -> dialoguer::Result<Criteria> {
    if criteria.name.is_none() {
        criteria.name = ask_text("Restaurant name (press enter to skip)")?;
    }
    if criteria.customer_rating.is_none() {
        criteria.customer_rating = ask_rating()?;
    }
    if criteria.distance.is_none() {
        criteria.distance = ask_integer(
            "Maximum distance from 1 to 10 miles (press enter to skip)",
            DISTANCES,
            "Please enter a distance between 1 and 10 miles.",
        )?;
    }
    if criteria.price.is_none() {
        criteria.price = ask_integer(
            "Average price per person from $1 to $50 (press enter to skip)",
            PRICES,
            "Please enter a price per person between $1 and $50.",
        )?;
    }
    if criteria.cuisine.is_none() {
        criteria.cuisine = ask_text("Cuisine (Chinese, American, Thai, etc.) (press enter to skip)")?;
    }
    log::debug!("User criteria are {criteria:?}");
    Ok(criteria)
}

/// Ask for an optional piece of text
fn ask_text(prompt: &str) -> dialoguer::Result<Option<Box<str>>> {
    let answer = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(non_empty(&answer))
}

/// Ask for an optional minimal customer rating
fn ask_rating() -> dialoguer::Result<Option<Rating>> {
    let choices = rating_choices();
    let labels = choices.iter().map(|(label, _)| label).collect::<Vec<_>>();
    let choice_idx = Select::new()
        .with_prompt("Minimum customer rating")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(choices[choice_idx].1)
}

/// Ask for an optional integer within a certain range
fn ask_integer(
    prompt: &str,
    range: RangeInclusive<Integer>,
    complaint: &'static str,
) -> dialoguer::Result<Option<Integer>> {
    let answer = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .validate_with(|input: &String| {
            parse_bounded(input, &range).map(|_| ()).map_err(|()| complaint)
        })
        .interact_text()?;
    Ok(parse_bounded(&answer, &range).ok().flatten())
}

/// Choices offered by the rating question, best ratings first
fn rating_choices() -> Vec<(String, Option<Rating>)> {
    std::iter::once(("any".to_owned(), None))
        .chain(RATINGS.rev().map(|stars| {
            let stars_count = usize::try_from(stars).unwrap_or_default();
            ("*".repeat(stars_count), Some(stars))
        }))
        .collect()
}

/// Turn an answer into a text criterion, blank answers meaning "skip"
fn non_empty(answer: &str) -> Option<Box<str>> {
    let answer = answer.trim();
    (!answer.is_empty()).then(|| answer.into())
}

/// Parse an optional integer answer, rejecting values outside of a range
fn parse_bounded(answer: &str, range: &RangeInclusive<Integer>) -> Result<Option<Integer>, ()> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(None);
    }
    match answer.parse() {
        Ok(value) if range.contains(&value) => Ok(Some(value)),
        _ => Err(()),
    }
}
