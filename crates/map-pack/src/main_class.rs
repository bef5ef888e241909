//! Main type inference: which tag do most keys (or values) carry?

use indexmap::IndexMap;

/// Returns the tag with the strictly greatest occurrence count, or `None`
/// for an empty sequence.
///
/// The histogram keeps first-seen order and the scan only replaces the
/// running maximum on a strictly greater count, so ties resolve to the tag
/// encountered earliest in iteration order. Callers iterating an
/// order-stable container therefore get a reproducible result.
pub(crate) fn main_class<'a, I>(tags: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut histogram: IndexMap<&str, usize> = IndexMap::new();
    for tag in tags {
        *histogram.entry(tag).or_insert(0) += 1;
    }
    let mut best = None;
    let mut max = 0usize;
    for (tag, count) in &histogram {
        if *count > max {
            max = *count;
            best = Some(*tag);
        }
    }
    best
}
