//! Alphabet profiler
//!
//! One pass over the text yields per-byte occurrence counts, iterable in
//! ascending byte order. The first-stage sort derives its bucket base
//! offsets from the cumulative counts, so the ascending traversal is
//! load-bearing: a bucket starts where the counts of all smaller bytes
//! end.

use std::collections::BTreeMap;

use super::types::SuffixIndex;

/// Byte frequencies of a text, ordered by byte value.
#[derive(Debug, Clone)]
pub struct Alphabet {
    freq: BTreeMap<u8, SuffixIndex>,
}

impl Alphabet {
    /// Counts every byte of `text`.
    pub fn profile(text: &[u8]) -> Self {
        let mut freq = BTreeMap::new();
        for &byte in text {
            *freq.entry(byte).or_insert(0) += 1;
        }
        Self { freq }
    }

    /// Number of distinct bytes in the text.
    pub fn distinct(&self) -> usize {
        self.freq.len()
    }

    /// Distinct bytes with their occurrence counts, smallest byte first.
    pub fn frequencies(&self) -> impl Iterator<Item = (u8, SuffixIndex)> + '_ {
        self.freq.iter().map(|(&byte, &count)| (byte, count))
    }

    /// Bucket base offsets: for each byte, the number of strictly smaller
    /// bytes occurring in the text. Entries for absent bytes are unused.
    pub(crate) fn bucket_bases(&self) -> [SuffixIndex; 256] {
        let mut bases = [0; 256];
        let mut base = 0;
        for (byte, count) in self.frequencies() {
            bases[byte as usize] = base;
            base += count;
        }
        bases
    }
}
