pub mod capture;
pub mod column;
pub mod config;
pub mod context;
pub mod drag;
pub mod error;
pub mod event;
pub mod handle;
pub mod hit;
pub mod layout;
pub mod measure;
pub mod redistribute;
pub mod registry;
pub mod resizer;

pub use capture::{CaptureGuard, PointerCapture};
pub use column::{with_scrollbar_gutter, ColumnDescriptor, ColumnKey, Fixed, SCROLLBAR_GUTTER_KEY};
pub use config::{ColumnConfig, TableConfig};
pub use context::{Direction, StickyOffsets, TableContext};
pub use drag::{DragController, DragSession, GuideLine, ResizeListener};
pub use error::ConfigError;
pub use event::{EventResult, PointerEvent};
pub use handle::{resolve, HandleEdge, HandlePlan};
pub use hit::{handle_zone, hit_test_cell, hit_test_handle};
pub use layout::{HeaderCell, HeaderLayout, Rect};
pub use measure::{BatchCollector, WidthMeasurer};
pub use redistribute::{ResizeOutcome, WidthRedistributor};
pub use registry::{ColumnWidth, WidthRegistry};
pub use resizer::ColumnResizer;
