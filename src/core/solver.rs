use crate::domain::model::City;
use std::collections::HashMap;

pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Every scramble carries exactly this many decoy vowels on top of the
/// city's own letters.
pub const EXTRA_VOWELS: usize = 3;

/// Letter multiset: char mapped to occurrence count.
struct LetterCounts(HashMap<char, usize>);

impl LetterCounts {
    fn of(s: &str) -> Self {
        let mut counts = HashMap::new();
        for ch in s.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        LetterCounts(counts)
    }

    /// True when every letter of `other` occurs here at least as often.
    fn covers(&self, other: &LetterCounts) -> bool {
        other
            .0
            .iter()
            .all(|(ch, count)| self.0.get(ch).copied().unwrap_or(0) >= *count)
    }

    /// The letters left after removing `other`, with multiplicity.
    fn minus(&self, other: &LetterCounts) -> Vec<char> {
        let mut leftover = Vec::new();
        for (ch, count) in &self.0 {
            let remaining = count.saturating_sub(other.0.get(ch).copied().unwrap_or(0));
            for _ in 0..remaining {
                leftover.push(*ch);
            }
        }
        leftover
    }
}

/// Strips all whitespace and uppercases the rest.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|ch| !ch.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// True iff `scramble` could be `city_name` plus exactly three extra vowels:
/// the lengths differ by three, the scramble's letters cover the city's, and
/// the leftover letters are all in {A, E, I, O, U}.
///
/// Both arguments are expected already normalized (uppercase, no whitespace);
/// `ScrambleSolver::solve` takes care of that.
pub fn is_possible_city(scramble: &str, city_name: &str) -> bool {
    if scramble.chars().count() != city_name.chars().count() + EXTRA_VOWELS {
        return false;
    }

    let scramble_counts = LetterCounts::of(scramble);
    let city_counts = LetterCounts::of(city_name);
    if !scramble_counts.covers(&city_counts) {
        return false;
    }

    let leftover = scramble_counts.minus(&city_counts);
    leftover.len() == EXTRA_VOWELS && leftover.iter().all(|ch| VOWELS.contains(ch))
}

/// Holds the loaded city list and answers scramble queries against it.
pub struct ScrambleSolver {
    cities: Vec<City>,
    max_results: Option<usize>,
}

impl ScrambleSolver {
    pub fn new(cities: Vec<City>) -> Self {
        Self {
            cities,
            max_results: None,
        }
    }

    pub fn with_max_results(mut self, max_results: Option<usize>) -> Self {
        self.max_results = max_results;
        self
    }

    /// Every city, in load order, that could have produced the scramble.
    /// Case- and space-insensitive on both the scramble and the city names.
    pub fn solve(&self, scramble: &str) -> Vec<&City> {
        let scramble = normalize(scramble);
        let cap = self.max_results.unwrap_or(usize::MAX);
        self.cities
            .iter()
            .filter(|city| is_possible_city(&scramble, &normalize(&city.name)))
            .take(cap)
            .collect()
    }
}
