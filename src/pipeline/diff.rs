//! Diff calculation between two link lists.
//!
//! Links are compared as a set of `(title, url)` pairs. A link whose title
//! changed while its URL stayed the same shows up as one removal plus one
//! addition.

use std::collections::HashSet;

use crate::models::{LinkRecord, sort_links};

/// Links added and removed between two observations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// In current but not in previous
    pub added: Vec<LinkRecord>,
    /// In previous but not in current
    pub removed: Vec<LinkRecord>,
}

impl DiffResult {
    /// Check if there are any changes.
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }

    /// Get the total number of changes.
    pub fn change_count(&self) -> usize {
        self.added.len() + self.removed.len()
    }
}

/// Calculate the diff between previous and current link lists.
///
/// Both result lists are sorted by `(lowercase title, lowercase url)`.
pub fn calculate_diff(previous: &[LinkRecord], current: &[LinkRecord]) -> DiffResult {
    let prev_set: HashSet<&LinkRecord> = previous.iter().collect();
    let curr_set: HashSet<&LinkRecord> = current.iter().collect();

    let mut added: Vec<LinkRecord> = curr_set
        .difference(&prev_set)
        .map(|l| (*l).clone())
        .collect();
    let mut removed: Vec<LinkRecord> = prev_set
        .difference(&curr_set)
        .map(|l| (*l).clone())
        .collect();

    sort_links(&mut added);
    sort_links(&mut removed);

    DiffResult { added, removed }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(title: &str, path: &str) -> LinkRecord {
        LinkRecord::new(title, format!("https://x/{path}"))
    }

    #[test]
    fn test_no_changes() {
        let prev = vec![link("Title 1", "1"), link("Title 2", "2")];
        let curr = prev.clone();

        let result = calculate_diff(&prev, &curr);
        assert!(!result.has_changes());
        assert_eq!(result.change_count(), 0);
    }

    #[test]
    fn test_additions() {
        let prev = vec![link("Press Release A", "a")];
        let curr = vec![link("Press Release A", "a"), link("Press Release B", "b")];

        let result = calculate_diff(&prev, &curr);
        assert_eq!(result.added, vec![link("Press Release B", "b")]);
        assert!(result.removed.is_empty());
    }

    #[test]
    fn test_removals() {
        let prev = vec![link("Title 1", "1"), link("Title 2", "2")];
        let curr = vec![link("Title 1", "1")];

        let result = calculate_diff(&prev, &curr);
        assert!(result.added.is_empty());
        assert_eq!(result.removed, vec![link("Title 2", "2")]);
    }

    #[test]
    fn test_retitle_is_removal_plus_addition() {
        let prev = vec![link("Old Title", "1")];
        let curr = vec![link("New Title", "1")];

        let result = calculate_diff(&prev, &curr);
        assert_eq!(result.added, vec![link("New Title", "1")]);
        assert_eq!(result.removed, vec![link("Old Title", "1")]);
        assert_eq!(result.change_count(), 2);
    }

    #[test]
    fn test_results_are_sorted() {
        let prev: Vec<LinkRecord> = vec![];
        let curr = vec![link("gamma", "g"), link("Alpha", "a"), link("beta", "b")];

        let result = calculate_diff(&prev, &curr);
        let titles: Vec<&str> = result.added.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_duplicates_in_input_are_collapsed() {
        let prev: Vec<LinkRecord> = vec![];
        let curr = vec![link("Same", "s"), link("Same", "s")];

        assert_eq!(calculate_diff(&prev, &curr).added.len(), 1);
    }

    #[test]
    fn test_symmetric_inverse() {
        let a = vec![link("Keep", "k"), link("Only A", "a"), link("Also A", "aa")];
        let b = vec![link("Keep", "k"), link("Only B", "b")];

        let forward = calculate_diff(&a, &b);
        let backward = calculate_diff(&b, &a);
        assert_eq!(forward.added, backward.removed);
        assert_eq!(forward.removed, backward.added);
    }

    #[test]
    fn test_empty_to_full_and_back() {
        let full = vec![link("First", "1")];

        let grown = calculate_diff(&[], &full);
        assert_eq!(grown.added.len(), 1);
        assert!(grown.removed.is_empty());

        let emptied = calculate_diff(&full, &[]);
        assert!(emptied.added.is_empty());
        assert_eq!(emptied.removed.len(), 1);
    }
}
