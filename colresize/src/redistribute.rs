//! Reconcile a manual column resize with the table's available width.

use serde::{Deserialize, Serialize};

use crate::column::ColumnKey;
use crate::context::TableContext;
use crate::registry::{ColumnWidth, WidthRegistry};

/// Result of a completed resize, handed to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeOutcome {
    pub column_key: ColumnKey,
    pub width: i32,
    /// Width of every column after the resize, in display order.
    pub column_widths: Vec<ColumnWidth>,
}

/// Space the columns have to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthRedistributor {
    pub component_width: i32,
    pub scrollbar_size: i32,
}

impl WidthRedistributor {
    pub fn new(component_width: i32, scrollbar_size: i32) -> Self {
        Self {
            component_width,
            scrollbar_size,
        }
    }

    pub fn from_context(cx: &TableContext) -> Self {
        Self::new(cx.component_width, cx.scrollbar_size)
    }

    /// Space left unused (positive) or overflowed (negative) if only
    /// `old_width` changed to `new_width`.
    pub fn slack(&self, registry: &WidthRegistry, old_width: i32, new_width: i32) -> i32 {
        let total_width = registry.total_width();
        let resized_total = total_width.saturating_sub(old_width).saturating_add(new_width);
        self.component_width
            .saturating_sub(self.scrollbar_size)
            .saturating_sub(resized_total)
    }

    /// Apply `new_width` to `column_key` and, when shrinking would leave a
    /// gap, hand the slack to one neighbour.
    ///
    /// The neighbour is the next column in `ordered_keys`, or the previous
    /// one when the resized column is last. Growing is never compensated.
    pub fn redistribute(
        &self,
        column_key: &ColumnKey,
        new_width: i32,
        old_width: i32,
        registry: &WidthRegistry,
        ordered_keys: &[ColumnKey],
    ) -> ResizeOutcome {
        let slack = self.slack(registry, old_width, new_width);
        let is_shrinking = old_width - new_width > 0;

        let mut widths = registry.clone();
        widths.set(column_key, new_width);

        if slack > 0 && is_shrinking {
            match neighbour(column_key, ordered_keys) {
                Some(key) => {
                    if let Some(width) = registry.get(key) {
                        log::debug!(
                            "[resize] giving {} cells of slack from {} to {}",
                            slack,
                            column_key,
                            key
                        );
                        widths.set(key, width.saturating_add(slack));
                    }
                }
                None => {
                    log::trace!("[resize] no neighbour for {}, slack {} left", column_key, slack);
                }
            }
        }

        ResizeOutcome {
            column_key: column_key.clone(),
            width: new_width,
            column_widths: widths.snapshot(),
        }
    }
}

fn neighbour<'a>(key: &ColumnKey, ordered_keys: &'a [ColumnKey]) -> Option<&'a ColumnKey> {
    let index = ordered_keys.iter().position(|k| k == key)?;
    ordered_keys
        .get(index + 1)
        .or_else(|| index.checked_sub(1).and_then(|i| ordered_keys.get(i)))
}
