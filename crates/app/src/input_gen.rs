//! Sample text generation.
//!
//! When no input file is specified, we generate a text with an uneven symbol
//! distribution so the code table shows a clear spread of code lengths.
//!
//! # Design
//!
//! Generated text is built from segments of:
//! - runs of a single letter (very skewed)
//! - pseudo-words from a small alphabet with English-like letter weights
//! - a repeated phrase
//! - random printable ASCII (close to uniform)

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Letters with rough English weights; earlier letters are drawn more often.
const WEIGHTED_LETTERS: &[(char, u32)] = &[
    ('e', 12),
    ('t', 9),
    ('a', 8),
    ('o', 8),
    ('i', 7),
    ('n', 7),
    ('s', 6),
    ('h', 6),
    ('r', 6),
    ('d', 4),
    ('l', 4),
    ('u', 3),
    ('c', 3),
    ('m', 2),
    ('w', 2),
    ('y', 2),
    ('f', 2),
    ('g', 2),
    ('p', 2),
    ('b', 1),
    ('v', 1),
    ('k', 1),
];

const PHRASES: &[&str] = &[
    "the quick brown fox jumps over the lazy dog. ",
    "she sells sea shells by the sea shore. ",
    "to be or not to be, that is the question.\n",
];

/// Generate a sample text of exactly `chars` characters.
///
/// The same seed always gives the same text.
pub fn generate_sample_text(seed: u64, chars: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut text = String::with_capacity(chars);
    let mut remaining = chars;

    while remaining > 0 {
        let segment = remaining.min(rng.gen_range(64..=512));

        // Choose segment type randomly
        let segment_type: u8 = rng.gen_range(0..10);

        match segment_type {
            // 10% runs of one letter
            0 => {
                let letter = weighted_letter(&mut rng);
                text.extend(std::iter::repeat(letter).take(segment));
            }

            // 50% pseudo-words
            1..=5 => {
                let mut written = 0;
                while written < segment {
                    let word_len = rng.gen_range(1..=9).min(segment - written);
                    for _ in 0..word_len {
                        text.push(weighted_letter(&mut rng));
                    }
                    written += word_len;
                    if written < segment {
                        text.push(if rng.gen_ratio(1, 12) { '\n' } else { ' ' });
                        written += 1;
                    }
                }
            }

            // 30% repeated phrase
            6..=8 => {
                let phrase = PHRASES[rng.gen_range(0..PHRASES.len())];
                text.extend(phrase.chars().cycle().take(segment));
            }

            // 10% random printable ASCII
            _ => {
                for _ in 0..segment {
                    text.push(rng.gen_range(b' '..=b'~') as char);
                }
            }
        }

        remaining -= segment;
    }

    text
}

fn weighted_letter(rng: &mut ChaCha8Rng) -> char {
    let total: u32 = WEIGHTED_LETTERS.iter().map(|&(_, w)| w).sum();
    let mut pick = rng.gen_range(0..total);
    for &(letter, weight) in WEIGHTED_LETTERS {
        if pick < weight {
            return letter;
        }
        pick -= weight;
    }
    'e'
}
