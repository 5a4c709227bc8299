//! Binary-search pattern locator

use crate::index::SuffixArray;

/// Finds one occurrence of `pattern`, or `None` when it is absent.
///
/// Binary-searches the suffix array for the pattern's rank range; when
/// several suffixes share the pattern as a prefix, the occurrence with
/// the smallest rank is reported. An empty pattern locates nothing.
///
/// # Examples
///
/// ```
/// use kwix::index::SuffixArray;
/// use kwix::search::locate;
///
/// let sa = SuffixArray::build(b"mississippi");
/// assert_eq!(locate(&sa, b"ssi"), Some(5));
/// assert_eq!(locate(&sa, b"zz"), None);
/// ```
pub fn locate(sa: &SuffixArray<'_>, pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() || sa.is_empty() {
        return None;
    }

    let position = sa.suffix_at_rank(sa.lower_bound(pattern))?;
    let suffix = &sa.text()[position..];

    if suffix.len() >= pattern.len() && &suffix[..pattern.len()] == pattern {
        Some(position)
    } else {
        None
    }
}
