//! Show scheduling and venue grouping for the booking listings.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::Timestamp;

/// Anything with a start time that can be classified as past or upcoming.
pub trait Scheduled {
    fn start_time(&self) -> Timestamp;
}

/// Shows split around a reference instant.
#[derive(Debug, Serialize)]
pub struct ShowSplit<T> {
    pub past_shows: Vec<T>,
    pub upcoming_shows: Vec<T>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Partition `shows` into those strictly before `now` and the rest.
///
/// A show starting exactly at `now` counts as upcoming. Input order is kept
/// within each half.
pub fn split_shows<T: Scheduled>(shows: Vec<T>, now: Timestamp) -> ShowSplit<T> {
    let (past_shows, upcoming_shows): (Vec<T>, Vec<T>) =
        shows.into_iter().partition(|s| s.start_time() < now);
    ShowSplit {
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }
}

/// Anything located in a city/state pair.
pub trait Located {
    fn city(&self) -> &str;
    fn state(&self) -> &str;
}

/// One city/state bucket of the venue listing.
#[derive(Debug, Serialize)]
pub struct Area<T> {
    pub city: String,
    pub state: String,
    pub venues: Vec<T>,
}

/// Group items by `(city, state)`, ordered by state then city.
pub fn group_by_area<T: Located>(items: Vec<T>) -> Vec<Area<T>> {
    let mut buckets: BTreeMap<(String, String), Vec<T>> = BTreeMap::new();
    for item in items {
        let key = (item.state().to_string(), item.city().to_string());
        buckets.entry(key).or_default().push(item);
    }
    buckets
        .into_iter()
        .map(|((state, city), venues)| Area {
            city,
            state,
            venues,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    struct Gig(Timestamp);

    impl Scheduled for Gig {
        fn start_time(&self) -> Timestamp {
            self.0
        }
    }

    struct Place {
        name: &'static str,
        city: &'static str,
        state: &'static str,
    }

    impl Located for Place {
        fn city(&self) -> &str {
            self.city
        }
        fn state(&self) -> &str {
            self.state
        }
    }

    #[test]
    fn split_separates_past_from_upcoming() {
        let now = Utc::now();
        let shows = vec![
            Gig(now - Duration::days(2)),
            Gig(now + Duration::days(1)),
            Gig(now - Duration::hours(1)),
        ];
        let split = split_shows(shows, now);
        assert_eq!(split.past_shows_count, 2);
        assert_eq!(split.upcoming_shows_count, 1);
        assert!(split.upcoming_shows[0].0 > now);
    }

    #[test]
    fn show_starting_now_is_upcoming() {
        let now = Utc::now();
        let split = split_shows(vec![Gig(now)], now);
        assert_eq!(split.upcoming_shows_count, 1);
        assert_eq!(split.past_shows_count, 0);
    }

    #[test]
    fn venues_are_grouped_by_city_and_state() {
        let places = vec![
            Place { name: "The Musical Hop", city: "San Francisco", state: "CA" },
            Place { name: "The Dueling Pianos Bar", city: "New York", state: "NY" },
            Place { name: "Park Square Live Music", city: "San Francisco", state: "CA" },
        ];
        let areas = group_by_area(places);
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].state, "CA");
        assert_eq!(areas[0].venues.len(), 2);
        assert_eq!(areas[0].venues[1].name, "Park Square Live Music");
        assert_eq!(areas[1].city, "New York");
    }

    #[test]
    fn same_city_name_in_different_states_stays_separate() {
        let places = vec![
            Place { name: "A", city: "Portland", state: "OR" },
            Place { name: "B", city: "Portland", state: "ME" },
        ];
        let areas = group_by_area(places);
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].state, "ME");
    }
}
