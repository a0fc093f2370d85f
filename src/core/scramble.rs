use crate::core::solver::{EXTRA_VOWELS, VOWELS};
use crate::utils::error::{PuzzleError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Builds a practice scramble for a city name: the letters of each word are
/// shuffled independently, and three random decoy vowels are mixed into the
/// longest word. Hard mode skips the decoys. Words come back joined with
/// single spaces.
pub fn scramble_city<R: Rng>(name: &str, hard_mode: bool, rng: &mut R) -> Result<String> {
    let mut words: Vec<Vec<char>> = name
        .to_uppercase()
        .split_whitespace()
        .map(|word| word.chars().collect())
        .collect();

    if words.is_empty() {
        return Err(PuzzleError::DataError {
            message: format!("'{}' contains no letters to scramble", name),
        });
    }

    for word in &mut words {
        word.shuffle(rng);
    }

    if !hard_mode {
        let longest = words
            .iter()
            .enumerate()
            .max_by_key(|(_, word)| word.len())
            .map(|(idx, _)| idx)
            .unwrap_or(0);

        for _ in 0..EXTRA_VOWELS {
            let vowel = *VOWELS.choose(rng).unwrap_or(&'A');
            words[longest].push(vowel);
        }
        words[longest].shuffle(rng);
    }

    Ok(words
        .iter()
        .map(|word| word.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join(" "))
}
