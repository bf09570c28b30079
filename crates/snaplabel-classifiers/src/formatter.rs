//! Display text for classifier output

use crate::labels::LabelStore;
use snaplabel_core::Classifications;
use std::fmt::Write;

/// Returned when the classifier produced no groups at all.
///
/// Carries no `%` and no line terminator, so it never collides with a
/// formatted category line.
pub const NO_RESULTS: &str = "No classification results";

/// Render classifier output as one `"{label}: {percent:.2}%\n"` line per
/// category, in the order the classifier returned them.
///
/// No sorting, deduplication or thresholding happens here. The percentage is
/// `score * 100` computed in `f64` and printed with two decimals, rounding
/// the exact binary value to nearest with ties to even.
pub fn format_results(labels: &LabelStore, groups: &[Classifications]) -> String {
    if groups.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut out = String::new();
    for group in groups {
        for category in &group.categories {
            let confidence = f64::from(category.score) * 100.0;
            // Writing into a String cannot fail.
            let _ = writeln!(out, "{}: {:.2}%", labels.resolve(category), confidence);
        }
    }
    out
}

/// Formatter bound to a loaded label store
#[derive(Debug, Clone, Default)]
pub struct ResultFormatter {
    labels: LabelStore,
}

impl ResultFormatter {
    pub fn new(labels: LabelStore) -> Self {
        Self { labels }
    }

    /// Format classifier output, see [`format_results`]
    pub fn format(&self, groups: &[Classifications]) -> String {
        format_results(&self.labels, groups)
    }

    pub fn labels(&self) -> &LabelStore {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snaplabel_core::Category;

    fn labels(names: &[&str]) -> LabelStore {
        LabelStore::new(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_empty_groups_yield_sentinel() {
        let out = format_results(&labels(&["cat"]), &[]);
        assert_eq!(out, NO_RESULTS);
        assert!(!out.contains('%'));
    }

    #[test]
    fn test_single_category() {
        let groups = vec![Classifications::new(vec![Category::new(2, 0.8765)])];
        let out = format_results(&labels(&["cat", "dog", "bird"]), &groups);
        assert_eq!(out, "bird: 87.65%\n");
    }

    #[test]
    fn test_groups_keep_input_order() {
        let groups = vec![
            Classifications::new(vec![Category::new(0, 0.1)]),
            Classifications::for_head(1, vec![Category::new(1, 0.9)]),
        ];
        let out = format_results(&labels(&["a", "b"]), &groups);
        assert_eq!(out, "a: 10.00%\nb: 90.00%\n");
    }

    #[test]
    fn test_categories_are_not_sorted_or_deduplicated() {
        let groups = vec![Classifications::new(vec![
            Category::new(1, 0.25),
            Category::new(0, 0.75),
            Category::new(1, 0.25),
        ])];
        let out = format_results(&labels(&["a", "b"]), &groups);
        assert_eq!(out, "b: 25.00%\na: 75.00%\nb: 25.00%\n");
    }

    #[test]
    fn test_low_scores_are_not_filtered() {
        let groups = vec![Classifications::new(vec![Category::new(0, 0.0)])];
        let out = format_results(&labels(&["a"]), &groups);
        assert_eq!(out, "a: 0.00%\n");
    }

    #[test]
    fn test_out_of_range_uses_fallback() {
        let groups = vec![Classifications::new(vec![
            Category::with_label(5, "zebra", 0.5),
            Category::new(-1, 1.0),
        ])];
        let out = format_results(&labels(&["a"]), &groups);
        assert_eq!(out, "Unknown (zebra): 50.00%\nUnknown (-1): 100.00%\n");
    }

    #[test]
    fn test_empty_label_store_never_drops_categories() {
        let groups = vec![Classifications::new(vec![
            Category::new(0, 0.5),
            Category::new(1, 0.5),
        ])];
        let out = format_results(&LabelStore::default(), &groups);
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn test_groups_without_categories_format_to_empty() {
        let groups = vec![Classifications::new(vec![])];
        let out = format_results(&labels(&["a"]), &groups);
        assert_eq!(out, "");
        assert_ne!(out, NO_RESULTS);
    }

    #[test]
    fn test_result_formatter_wraps_store() {
        let formatter = ResultFormatter::new(labels(&["cat"]));
        let groups = vec![Classifications::new(vec![Category::new(0, 0.5)])];
        assert_eq!(formatter.format(&groups), "cat: 50.00%\n");
        assert_eq!(formatter.labels().len(), 1);
    }
}
