//! Restaurant search: filtering by user criteria, then ranking

use crate::{
    catalog::{Restaurant, RestaurantCatalog},
    Distance, Price, Rating,
};
use std::{cmp::Reverse, collections::BinaryHeap};

/// Maximal number of restaurants returned by a search
pub const MAX_RESULTS: usize = 5;

/// Constraints that restaurants must satisfy, all optional
///
/// An absent field does not restrict the search. Values are used literally,
/// range checking is the job of whoever collects them from the user.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Criteria {
    /// Text that the restaurant name must contain, ignoring case
    pub name: Option<Box<str>>,

    /// Minimal customer rating
    pub customer_rating: Option<Rating>,

    /// Maximal distance
    pub distance: Option<Distance>,

    /// Maximal price per person
    pub price: Option<Price>,

    /// Text that the cuisine name must contain, ignoring case
    pub cuisine: Option<Box<str>>,
}

/// Find the best restaurants matching some criteria
///
/// Restaurants are ranked by increasing distance, then decreasing customer
/// rating, then increasing price. Restaurants which are equal on all three
/// counts keep their catalog order. At most [`MAX_RESULTS`] restaurants are
/// returned, and the result is empty if nothing matches.
pub fn search<'catalog>(
    catalog: &'catalog RestaurantCatalog,
    criteria: &Criteria,
) -> Vec<&'catalog Restaurant> {
    let restaurants = catalog.restaurants();
    let filter = Filter::new(criteria);

    // Keep the best matches in a bounded max-heap, whose top is the worst of
    // the current best restaurants. Catalog position breaks full ties.
    let mut best = BinaryHeap::with_capacity(MAX_RESULTS + 1);
    for (position, restaurant) in restaurants.iter().enumerate() {
        if !filter.accepts(restaurant) {
            continue;
        }
        best.push((RankKey::from(restaurant), position));
        if best.len() > MAX_RESULTS {
            best.pop();
        }
    }
    log::debug!("Found {} restaurants matching {criteria:?}", best.len());

    best.into_sorted_vec()
        .into_iter()
        .map(|(_key, position)| &restaurants[position])
        .collect()
}

/// Sort key which puts better restaurants first
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
struct RankKey {
    distance: Distance,
    customer_rating: Reverse<Rating>,
    price: Price,
}
//
impl From<&Restaurant> for RankKey {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            distance: restaurant.distance,
            customer_rating: Reverse(restaurant.customer_rating),
            price: restaurant.price,
        }
    }
}

/// Criteria prepared for matching many restaurants
struct Filter<'criteria> {
    /// Original criteria
    criteria: &'criteria Criteria,

    /// Lowercase version of the name criterion
    name: Option<String>,

    /// Lowercase version of the cuisine criterion
    cuisine: Option<String>,
}
//
impl<'criteria> Filter<'criteria> {
    /// Prepare the criteria
    fn new(criteria: &'criteria Criteria) -> Self {
        Self {
            criteria,
            name: criteria.name.as_deref().map(str::to_lowercase),
            cuisine: criteria.cuisine.as_deref().map(str::to_lowercase),
        }
    }

    /// Truth that a restaurant satisfies all criteria
    fn accepts(&self, restaurant: &Restaurant) -> bool {
        /// Reasons why a restaurant could be filtered out
        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        enum RejectCause {
            /// Name does not contain the requested text
            Name,

            /// Customer rating is too low
            Rating,

            /// Restaurant is too far away
            Distance,

            /// Restaurant is too expensive
            Price,

            /// Cuisine name does not contain the requested text
            Cuisine,
        }

        let contains = |haystack: &str, needle: &str| haystack.to_lowercase().contains(needle);
        let Criteria {
            name: _,
            customer_rating,
            distance,
            price,
            cuisine: _,
        } = *self.criteria;
        let rejection = if (self.name.as_deref())
            .is_some_and(|name| !contains(&restaurant.name, name))
        {
            Some(RejectCause::Name)
        } else if customer_rating.is_some_and(|min| restaurant.customer_rating < min) {
            Some(RejectCause::Rating)
        } else if distance.is_some_and(|max| restaurant.distance > max) {
            Some(RejectCause::Distance)
        } else if price.is_some_and(|max| restaurant.price > max) {
            Some(RejectCause::Price)
        } else if (self.cuisine.as_deref())
            .is_some_and(|cuisine| !contains(&restaurant.cuisine, cuisine))
        {
            Some(RejectCause::Cuisine)
        } else {
            None
        };

        if let Some(rejection) = rejection {
            let cause = match rejection {
                RejectCause::Name => "its name doesn't match",
                RejectCause::Rating => "its rating is too low",
                RejectCause::Distance => "it's too far away",
                RejectCause::Price => "it's too expensive",
                RejectCause::Cuisine => "its cuisine doesn't match",
            };
            log::trace!("Rejected {restaurant:?} because {cause}");
        }
        rejection.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::{prelude::*, sample::select};
    use rstest::{fixture, rstest};
    use std::cmp::Ordering;

    /// Ranking order of restaurants, best first
    fn rank_order(left: &Restaurant, right: &Restaurant) -> Ordering {
        RankKey::from(left).cmp(&RankKey::from(right))
    }

    fn restaurant(
        name: &str,
        rating: Rating,
        distance: Distance,
        price: Price,
        cuisine: &str,
    ) -> Restaurant {
        Restaurant {
            name: name.into(),
            customer_rating: rating,
            distance,
            price,
            cuisine: cuisine.into(),
        }
    }

    #[fixture]
    fn catalog() -> RestaurantCatalog {
        [
            restaurant("Wok Inn", 4, 3, 20, "Chinese"),
            restaurant("Pasta House", 5, 3, 15, "Italian"),
            restaurant("Thai Spice", 4, 1, 25, "Thai"),
        ]
        .into_iter()
        .collect()
    }

    fn names<'a>(results: &[&'a Restaurant]) -> Vec<&'a str> {
        results.iter().map(|r| &*r.name).collect()
    }

    #[rstest]
    #[case::by_distance(
        Criteria { distance: Some(5), ..Criteria::default() },
        &["Thai Spice", "Pasta House", "Wok Inn"],
    )]
    #[case::cuisine_substring(
        Criteria { cuisine: Some("ital".into()), ..Criteria::default() },
        &["Pasta House"],
    )]
    #[case::nothing_cheap_enough(
        Criteria { price: Some(10), ..Criteria::default() },
        &[],
    )]
    #[case::name_ignores_case(
        Criteria { name: Some("WOK".into()), ..Criteria::default() },
        &["Wok Inn"],
    )]
    #[case::inclusive_rating(
        Criteria { customer_rating: Some(5), ..Criteria::default() },
        &["Pasta House"],
    )]
    #[case::inclusive_distance(
        Criteria { distance: Some(1), ..Criteria::default() },
        &["Thai Spice"],
    )]
    #[case::inclusive_price(
        Criteria { price: Some(15), ..Criteria::default() },
        &["Pasta House"],
    )]
    #[case::negative_distance(
        Criteria { distance: Some(-1), ..Criteria::default() },
        &[],
    )]
    #[case::combined(
        Criteria {
            name: Some("i".into()),
            customer_rating: Some(4),
            distance: Some(3),
            price: Some(20),
            cuisine: Some("n".into()),
        },
        &["Wok Inn"],
    )]
    #[case::empty_text_matches_all(
        Criteria { name: Some("".into()), cuisine: Some("".into()), ..Criteria::default() },
        &["Thai Spice", "Pasta House", "Wok Inn"],
    )]
    fn finds_expected_restaurants(
        catalog: RestaurantCatalog,
        #[case] criteria: Criteria,
        #[case] expected: &[&str],
    ) {
        assert_eq!(names(&search(&catalog, &criteria)), expected);
    }

    #[test]
    fn keeps_five_best() {
        let catalog = (1..=8)
            .rev()
            .map(|distance| restaurant(&format!("R{distance}"), 3, distance, 20, "Greek"))
            .collect::<RestaurantCatalog>();
        let results = search(&catalog, &Criteria::default());
        assert_eq!(names(&results), ["R1", "R2", "R3", "R4", "R5"]);
    }

    #[test]
    fn breaks_ties_by_rating_then_price_then_catalog_order() {
        let catalog = [
            restaurant("Pricey", 4, 2, 40, "French"),
            restaurant("First twin", 4, 2, 30, "French"),
            restaurant("Starred", 5, 2, 50, "French"),
            restaurant("Second twin", 4, 2, 30, "French"),
            restaurant("Close", 1, 1, 50, "French"),
        ]
        .into_iter()
        .collect::<RestaurantCatalog>();
        let results = search(&catalog, &Criteria::default());
        assert_eq!(
            names(&results),
            ["Close", "Starred", "First twin", "Second twin", "Pricey"]
        );
    }

    #[test]
    fn empty_catalog_gives_empty_results() {
        let catalog = RestaurantCatalog::default();
        assert!(search(&catalog, &Criteria::default()).is_empty());
    }

    /// Restaurant with attributes in (and slightly out of) their usual range
    fn any_restaurant() -> impl Strategy<Value = Restaurant> {
        (
            "[A-Za-z ]{1,10}",
            0..=6i64,
            0..=11i64,
            5..=60i64,
            select(vec!["American", "Chinese", "Thai", "Italian", "Korean"]),
        )
            .prop_map(|(name, rating, distance, price, cuisine)| {
                restaurant(&name, rating, distance, price, cuisine)
            })
    }

    fn any_catalog() -> impl Strategy<Value = RestaurantCatalog> {
        prop::collection::vec(any_restaurant(), 0..30)
            .prop_map(|v| v.into_iter().collect::<RestaurantCatalog>())
    }

    fn any_criteria() -> impl Strategy<Value = Criteria> {
        (
            prop::option::of("[A-Za-z]{0,2}"),
            prop::option::of(1..=5i64),
            prop::option::of(1..=10i64),
            prop::option::of(10..=50i64),
            prop::option::of(select(vec!["a", "AN", "i", "thai", "x"])),
        )
            .prop_map(|(name, customer_rating, distance, price, cuisine)| Criteria {
                name: name.map(Into::into),
                customer_rating,
                distance,
                price,
                cuisine: cuisine.map(Into::into),
            })
    }

    /// Straightforward statement of what a criterion means
    fn satisfies(restaurant: &Restaurant, criteria: &Criteria) -> bool {
        let contains = |haystack: &str, needle: &str| {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        };
        criteria.name.as_deref().map_or(true, |n| contains(&restaurant.name, n))
            && criteria.customer_rating.map_or(true, |r| restaurant.customer_rating >= r)
            && criteria.distance.map_or(true, |d| restaurant.distance <= d)
            && criteria.price.map_or(true, |p| restaurant.price <= p)
            && criteria.cuisine.as_deref().map_or(true, |c| contains(&restaurant.cuisine, c))
    }

    proptest! {
        #[test]
        fn no_criteria_is_sort_and_truncate(catalog in any_catalog()) {
            let mut expected = catalog.restaurants().iter().collect::<Vec<_>>();
            expected.sort_by(|a, b| rank_order(a, b));
            expected.truncate(MAX_RESULTS);
            prop_assert_eq!(search(&catalog, &Criteria::default()), expected);
        }

        #[test]
        fn matches_filter_sort_truncate(catalog in any_catalog(), criteria in any_criteria()) {
            let results = search(&catalog, &criteria);
            prop_assert!(results.len() <= MAX_RESULTS);
            for restaurant in &results {
                prop_assert!(satisfies(restaurant, &criteria));
            }
            let mut expected = (catalog.restaurants().iter())
                .filter(|r| satisfies(r, &criteria))
                .collect::<Vec<_>>();
            expected.sort_by(|a, b| rank_order(a, b));
            expected.truncate(MAX_RESULTS);
            prop_assert_eq!(results, expected);
        }

        #[test]
        fn search_is_idempotent(catalog in any_catalog(), criteria in any_criteria()) {
            prop_assert_eq!(search(&catalog, &criteria), search(&catalog, &criteria));
        }

        #[test]
        fn rank_order_is_a_total_order(
            a in any_restaurant(),
            b in any_restaurant(),
            c in any_restaurant(),
        ) {
            prop_assert_eq!(rank_order(&a, &b), rank_order(&b, &a).reverse());
            if rank_order(&a, &b).is_le() && rank_order(&b, &c).is_le() {
                prop_assert!(rank_order(&a, &c).is_le());
            }
            if rank_order(&a, &b).is_eq() {
                prop_assert_eq!(
                    (a.distance, a.customer_rating, a.price),
                    (b.distance, b.customer_rating, b.price)
                );
            }
        }
    }
}
