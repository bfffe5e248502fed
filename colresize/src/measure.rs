//! Passive measurement of rendered header cell widths.
//!
//! Every observed column gets a probe. Probes report individually while a
//! layout pass runs; the [`BatchCollector`] buffers those reports and the
//! measurer hands them out as one batch at the end of the turn, so the
//! registry never sees half of a pass.

use std::collections::HashMap;

use crate::column::{ColumnDescriptor, ColumnKey};
use crate::layout::HeaderLayout;
use crate::registry::{ColumnWidth, WidthRegistry};

/// Buffers measurement events within one scheduling turn.
#[derive(Debug, Default)]
pub struct BatchCollector {
    pending: Vec<ColumnWidth>,
}

impl BatchCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one event. A later report for the same key replaces the
    /// earlier one but keeps its place in the batch.
    pub fn push(&mut self, column_key: &ColumnKey, width: i32) {
        match self.pending.iter_mut().find(|m| &m.column_key == column_key) {
            Some(entry) => entry.width = width,
            None => self.pending.push(ColumnWidth::new(column_key.clone(), width)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Hand out everything collected so far as a single list.
    pub fn flush(&mut self) -> Vec<ColumnWidth> {
        std::mem::take(&mut self.pending)
    }
}

/// Observes the natural width of header cells.
#[derive(Debug, Default)]
pub struct WidthMeasurer {
    /// Last width delivered per observed column; `None` until first report.
    probes: HashMap<ColumnKey, Option<i32>>,
    collector: BatchCollector,
}

impl WidthMeasurer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach probes to the data columns of `columns`, replacing the
    /// previous set. The scrollbar gutter is never observed.
    pub fn observe(&mut self, columns: &[ColumnDescriptor]) {
        let mut probes = HashMap::with_capacity(columns.len());
        for column in columns.iter().filter(|c| !c.is_scrollbar_gutter) {
            let last = self.probes.get(&column.key).copied().flatten();
            probes.insert(column.key.clone(), last);
        }
        self.probes = probes;
        log::trace!("[measure] observing {} columns", self.probes.len());
    }

    pub fn is_observing(&self, key: &ColumnKey) -> bool {
        self.probes.contains_key(key)
    }

    /// A probe reported the rendered width of its cell.
    ///
    /// Reports for unobserved keys and reports repeating the last delivered
    /// width are dropped.
    pub fn report(&mut self, key: &ColumnKey, width: i32) {
        let Some(last) = self.probes.get_mut(key) else {
            return;
        };
        if *last == Some(width) {
            return;
        }
        *last = Some(width);
        self.collector.push(key, width);
    }

    /// Forget the last delivered width of `keys`.
    ///
    /// Used after widths were written to the registry from elsewhere: the
    /// next report for each key is delivered even if it repeats the last one.
    pub fn invalidate<'a>(&mut self, keys: impl IntoIterator<Item = &'a ColumnKey>) {
        for key in keys {
            if let Some(last) = self.probes.get_mut(key) {
                *last = None;
            }
        }
    }

    /// Report every cell of a laid-out header row in one pass.
    pub fn measure_header(&mut self, layout: &HeaderLayout) {
        for cell in layout.cells() {
            self.report(&cell.key, cell.rect.width);
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.collector.is_empty()
    }

    /// End of turn: deliver the batch.
    pub fn flush(&mut self) -> Vec<ColumnWidth> {
        self.collector.flush()
    }

    /// Deliver the batch straight into `registry`.
    ///
    /// Columns missing from the batch keep their previous width. Returns the
    /// number of widths written.
    pub fn flush_into(&mut self, registry: &mut WidthRegistry) -> usize {
        let batch = self.flush();
        if !batch.is_empty() {
            log::debug!("[measure] batch of {} widths", batch.len());
        }
        registry.apply(&batch);
        batch.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_keeps_first_position_and_last_value() {
        let mut collector = BatchCollector::new();
        collector.push(&"a".into(), 1);
        collector.push(&"b".into(), 2);
        collector.push(&"a".into(), 3);
        assert_eq!(
            collector.flush(),
            vec![ColumnWidth::new("a", 3), ColumnWidth::new("b", 2)]
        );
        assert!(collector.is_empty());
    }
}
