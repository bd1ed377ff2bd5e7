// Category tally
//
// Run-scoped counter of category labels seen while walking packages,
// rendered as a csv-table block on the top-level index.

use std::collections::BTreeMap;

/// Counts category labels recorded during one generation run
///
/// Labels render in lexicographic order, so the output is deterministic
/// regardless of visit order.
#[derive(Debug, Clone, Default)]
pub struct CategoryTally {
    counts: BTreeMap<String, u64>,
}

impl CategoryTally {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for a label, starting it at zero if unseen
    pub fn record(&mut self, label: &str) {
        *self.counts.entry(label.to_string()).or_insert(0) += 1;
    }

    /// Number of distinct labels recorded
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count recorded for a label
    pub fn count(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Render the statistics table, or an empty string if no categories
    /// were recorded
    pub fn render(&self, title: &str) -> String {
        if self.counts.is_empty() {
            return String::new();
        }
        let header = self
            .counts
            .keys()
            .map(|k| format!("\"{}\"", k))
            .collect::<Vec<_>>()
            .join(", ");
        let values = self
            .counts
            .values()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "\n\n{}\n{}\n\n.. csv-table::\n   :header: {}\n\n   {}\n\n",
            title,
            "-".repeat(title.chars().count()),
            header,
            values
        )
    }
}
