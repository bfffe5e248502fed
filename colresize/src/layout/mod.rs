mod header;
mod rect;

pub use header::{HeaderCell, HeaderLayout};
pub use rect::Rect;
