//! Categorical counting shared by the metric modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One bucket of a label -> count distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Counts items by a derived label, reporting buckets in first-encountered
/// order. Every item lands in exactly one bucket, so the counts always sum
/// to the number of items.
pub fn count_by<T>(items: &[T], label: impl Fn(&T) -> String) -> Vec<CategoryCount> {
    let mut buckets: Vec<CategoryCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let label = label(item);
        match index.get(&label) {
            Some(&i) => buckets[i].count += 1,
            None => {
                index.insert(label.clone(), buckets.len());
                buckets.push(CategoryCount { label, count: 1 });
            }
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_preserve_first_encountered_order_and_partition() {
        let items = vec!["b", "a", "b", "c", "a", "b"];
        let counts = count_by(&items, |s| s.to_string());

        let labels: Vec<&str> = counts.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a", "c"]);
        assert_eq!(counts[0].count, 3);

        let total: usize = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, items.len());
    }

    #[test]
    fn empty_input_yields_no_buckets() {
        let counts = count_by::<u32>(&[], |n| n.to_string());
        assert!(counts.is_empty());
    }
}
