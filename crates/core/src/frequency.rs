//! Symbol frequency counting.
//!
//! The table iterates in ascending symbol order. Tree construction numbers its
//! leaves in that order, so equal-frequency ties resolve the same way on every
//! run.

use std::collections::BTreeMap;

/// Occurrence count of every distinct symbol in an input.
///
/// # Invariants
/// - keys are exactly the distinct symbols of the input
/// - every count is at least 1
/// - `total()` equals the input length in symbols
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, u64>,
}

impl FrequencyTable {
    /// Tally the symbols of `input`.
    ///
    /// An empty input gives an empty table.
    pub fn count(input: &str) -> Self {
        let mut counts = BTreeMap::new();
        for symbol in input.chars() {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Frequency of `symbol`, or `None` if it never occurs.
    pub fn get(&self, symbol: char) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}

impl FromIterator<(char, u64)> for FrequencyTable {
    /// Build a table from explicit counts. Zero counts are dropped so the
    /// table never holds a symbol that does not occur.
    fn from_iter<I: IntoIterator<Item = (char, u64)>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for (symbol, count) in iter {
            if count > 0 {
                *counts.entry(symbol).or_insert(0) += count;
            }
        }
        Self { counts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let freqs = FrequencyTable::count("");
        assert!(freqs.is_empty());
        assert_eq!(freqs.total(), 0);
    }

    #[test]
    fn test_counts() {
        let freqs = FrequencyTable::count("abracadabra");
        assert_eq!(freqs.get('a'), Some(5));
        assert_eq!(freqs.get('b'), Some(2));
        assert_eq!(freqs.get('r'), Some(2));
        assert_eq!(freqs.get('c'), Some(1));
        assert_eq!(freqs.get('d'), Some(1));
        assert_eq!(freqs.get('z'), None);
        assert_eq!(freqs.len(), 5);
        assert_eq!(freqs.total(), 11);
    }

    #[test]
    fn test_counts_symbols_not_bytes() {
        // 'é' is two bytes in UTF-8 but one symbol
        let freqs = FrequencyTable::count("éé a");
        assert_eq!(freqs.get('é'), Some(2));
        assert_eq!(freqs.total(), 4);
    }

    #[test]
    fn test_iteration_order() {
        let freqs = FrequencyTable::count("zyxzy");
        let symbols: Vec<char> = freqs.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec!['x', 'y', 'z']);
    }

    #[test]
    fn test_from_iter_drops_zero_counts() {
        let freqs: FrequencyTable = [('a', 3), ('b', 0), ('a', 2)].into_iter().collect();
        assert_eq!(freqs.get('a'), Some(5));
        assert_eq!(freqs.get('b'), None);
        assert_eq!(freqs.len(), 1);
    }
}
