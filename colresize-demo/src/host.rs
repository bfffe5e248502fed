use colresize::{hit_test_cell, ColumnKey, HeaderLayout, ResizeListener, ResizeOutcome, TableConfig};

/// The table's owner: keeps the column configuration and reacts to resizes.
#[derive(Debug)]
pub struct DemoHost {
    pub config: TableConfig,
    pub last_outcome: Option<ResizeOutcome>,
    pub selected: Option<ColumnKey>,
    resizing: bool,
    columns_changed: bool,
}

impl DemoHost {
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            last_outcome: None,
            selected: None,
            resizing: false,
            columns_changed: false,
        }
    }

    /// Whether a completed resize changed the configured widths since the
    /// last call.
    pub fn take_columns_changed(&mut self) -> bool {
        std::mem::take(&mut self.columns_changed)
    }

    /// Header click outside any handle. Ignored while a drag is running.
    pub fn click(&mut self, layout: &HeaderLayout, x: i32, y: i32) {
        if self.resizing {
            return;
        }
        let Some(index) = hit_test_cell(layout, x, y) else {
            return;
        };
        let Some(cell) = layout.get(index) else {
            return;
        };
        if cell.is_scrollbar_gutter {
            return;
        }
        log::debug!("[demo] selected column '{}'", cell.key);
        self.selected = Some(cell.key.clone());
    }
}

impl ResizeListener for DemoHost {
    fn on_resizing_change(&mut self, is_resizing: bool) {
        log::debug!("[demo] resizing: {}", is_resizing);
        self.resizing = is_resizing;
    }

    fn on_column_resize_complete(&mut self, outcome: &ResizeOutcome) {
        log::info!(
            "[demo] column '{}' resized to {}",
            outcome.column_key,
            outcome.width
        );
        self.config.apply_widths(&outcome.column_widths);
        self.last_outcome = Some(outcome.clone());
        self.columns_changed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colresize::{ColumnConfig, ColumnWidth, Direction, Rect, WidthRegistry};

    fn config() -> TableConfig {
        TableConfig::new(vec![
            ColumnConfig::new("a", 10).resizable(),
            ColumnConfig::new("b", 10).resizable(),
        ])
    }

    #[test]
    fn completed_resize_updates_config() {
        let mut host = DemoHost::new(config());
        host.on_column_resize_complete(&ResizeOutcome {
            column_key: "a".into(),
            width: 14,
            column_widths: vec![ColumnWidth::new("a", 14), ColumnWidth::new("b", 6)],
        });

        assert_eq!(host.config.columns[0].width, 14);
        assert_eq!(host.config.columns[1].width, 6);
        assert!(host.take_columns_changed());
        assert!(!host.take_columns_changed());
    }

    #[test]
    fn clicks_are_suppressed_mid_drag() {
        let host_config = config();
        let cells = host_config.header_cells().unwrap();
        let layout = HeaderLayout::compute(
            &cells,
            &WidthRegistry::from_columns(&cells),
            Rect::new(0, 0, 0, 1),
            Direction::Ltr,
        );
        let mut host = DemoHost::new(host_config);

        host.on_resizing_change(true);
        host.click(&layout, 12, 0);
        assert_eq!(host.selected, None);

        host.on_resizing_change(false);
        host.click(&layout, 12, 0);
        assert_eq!(host.selected, Some("b".into()));
    }
}
