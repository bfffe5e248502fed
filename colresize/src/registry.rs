//! Shared width registry, one per table.

use serde::{Deserialize, Serialize};

use crate::column::{ColumnDescriptor, ColumnKey};

/// A column key paired with its width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnWidth {
    pub column_key: ColumnKey,
    pub width: i32,
}

impl ColumnWidth {
    pub fn new(column_key: impl Into<ColumnKey>, width: i32) -> Self {
        Self {
            column_key: column_key.into(),
            width,
        }
    }
}

/// Current rendered width of every data column, in display order.
///
/// Written by the width measurer (initial layout and size changes) and by
/// the drag controller when a resize commits. Everything else only reads.
/// The scrollbar gutter never has an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidthRegistry {
    entries: Vec<(ColumnKey, i32)>,
}

impl WidthRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry seeded with the configured widths of `columns`.
    pub fn from_columns(columns: &[ColumnDescriptor]) -> Self {
        let mut registry = Self::new();
        registry.sync_columns(columns);
        registry
    }

    /// Reorder entries to match `columns`, drop keys no longer present and
    /// seed unseen columns with their configured width.
    ///
    /// Widths of columns that are already known are kept.
    pub fn sync_columns(&mut self, columns: &[ColumnDescriptor]) {
        let entries = columns
            .iter()
            .filter(|column| !column.is_scrollbar_gutter)
            .map(|column| {
                let width = self.get(&column.key).unwrap_or(column.width);
                (column.key.clone(), width)
            })
            .collect();
        self.entries = entries;
    }

    pub fn get(&self, key: &ColumnKey) -> Option<i32> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, width)| *width)
    }

    /// Set the width for `key`, appending it if the key is new.
    pub fn set(&mut self, key: &ColumnKey, width: i32) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = width,
            None => self.entries.push((key.clone(), width)),
        }
    }

    pub fn contains(&self, key: &ColumnKey) -> bool {
        self.index_of(key).is_some()
    }

    /// Display position of `key`.
    pub fn index_of(&self, key: &ColumnKey) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub fn keys(&self) -> Vec<ColumnKey> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ColumnKey, i32)> {
        self.entries.iter().map(|(k, width)| (k, *width))
    }

    /// Sum of all registered widths, saturating at `i32::MAX`.
    pub fn total_width(&self) -> i32 {
        self.entries
            .iter()
            .fold(0i32, |sum, (_, width)| sum.saturating_add(*width))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of every entry in display order.
    pub fn snapshot(&self) -> Vec<ColumnWidth> {
        self.entries
            .iter()
            .map(|(key, width)| ColumnWidth::new(key.clone(), *width))
            .collect()
    }

    /// Write a set of widths back, e.g. the widths of a committed resize.
    pub fn apply(&mut self, widths: &[ColumnWidth]) {
        for entry in widths {
            self.set(&entry.column_key, entry.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_keeps_measured_widths_and_display_order() {
        let mut registry = WidthRegistry::new();
        registry.set(&"b".into(), 40);
        registry.set(&"stale".into(), 7);

        registry.sync_columns(&[
            ColumnDescriptor::new("a", 10),
            ColumnDescriptor::new("b", 20),
            ColumnDescriptor::scrollbar_gutter(1, None),
        ]);

        assert_eq!(registry.keys(), vec![ColumnKey::from("a"), ColumnKey::from("b")]);
        assert_eq!(registry.get(&"a".into()), Some(10));
        assert_eq!(registry.get(&"b".into()), Some(40));
        assert!(!registry.contains(&"stale".into()));
    }

    #[test]
    fn set_appends_unknown_keys() {
        let mut registry = WidthRegistry::new();
        registry.set(&"a".into(), 5);
        registry.set(&"b".into(), 6);
        registry.set(&"a".into(), 9);
        assert_eq!(registry.snapshot(), vec![ColumnWidth::new("a", 9), ColumnWidth::new("b", 6)]);
        assert_eq!(registry.total_width(), 15);
    }
}
