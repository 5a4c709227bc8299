//! Keyword-in-context scanner
//!
//! Walks the suffix array in rank order from the pattern's lower bound,
//! emitting one match per suffix that has the pattern as a prefix, until
//! the first suffix that does not.

use std::ops::Range;

use crate::index::{SuffixArray, DEFAULT_CONTEXT_WIDTH};

/// One keyword-in-context hit: where the pattern starts and the clamped
/// text window around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KwicMatch {
    /// Byte position of the occurrence in the text
    pub position: usize,
    /// Window spanning the occurrence plus up to the configured context
    /// on each side, clamped to the text
    pub window: Range<usize>,
}

/// Scanner emitting every occurrence of a pattern with its context
/// window.
pub struct KwicScanner<'s, 'a> {
    sa: &'s SuffixArray<'a>,
    context: usize,
}

impl<'s, 'a> KwicScanner<'s, 'a> {
    /// Creates a scanner emitting `context` bytes on each side of a hit.
    pub fn new(sa: &'s SuffixArray<'a>, context: usize) -> Self {
        Self { sa, context }
    }

    /// Creates a scanner with the default context width.
    pub fn with_default_context(sa: &'s SuffixArray<'a>) -> Self {
        Self::new(sa, DEFAULT_CONTEXT_WIDTH)
    }

    /// All occurrences of `pattern`, in rank order.
    ///
    /// An empty pattern yields no matches.
    pub fn scan(&self, pattern: &[u8]) -> Vec<KwicMatch> {
        let text = self.sa.text();
        let n = text.len();
        if pattern.is_empty() || n == 0 {
            return Vec::new();
        }

        let mut matches = Vec::new();
        for rank in self.sa.lower_bound(pattern)..n {
            let Some(position) = self.sa.suffix_at_rank(rank) else {
                break;
            };
            let suffix = &text[position..];
            if suffix.len() < pattern.len() || &suffix[..pattern.len()] != pattern {
                break;
            }

            let from = position.saturating_sub(self.context);
            let to = (position + pattern.len() + self.context).min(n);
            matches.push(KwicMatch {
                position,
                window: from..to,
            });
        }

        matches
    }
}
