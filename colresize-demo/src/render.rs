use std::io;

use crossterm::style::Color;

use colresize::{handle_zone, ColumnResizer, HandleEdge, Rect};

use crate::host::DemoHost;
use crate::terminal::{Style, Terminal};

const TITLE: Style = Style::fg(Color::Cyan).bold();
const HEADER: Style = Style::fg(Color::White).bold();
const SELECTED: Style = Style::fg(Color::Yellow).bold();
const MUTED: Style = Style::fg(Color::DarkGrey);
const BODY: Style = Style::fg(Color::Grey);
const HANDLE: Style = Style::fg(Color::Blue);
const GUIDE: Style = Style::fg(Color::Magenta);

pub const HEADER_ROW: i32 = 2;
const BODY_ROWS: i32 = 8;

/// Box the table occupies for a terminal of the given size.
pub fn table_bounds(width: u16, height: u16) -> Rect {
    let rows = (i32::from(height) - HEADER_ROW - 2).clamp(1, BODY_ROWS + 2);
    Rect::new(1, HEADER_ROW, i32::from(width) - 2, rows)
}

pub fn draw(
    term: &mut Terminal,
    resizer: &ColumnResizer,
    host: &DemoHost,
    table: Rect,
    screen_height: u16,
) -> io::Result<()> {
    term.clear()?;

    let direction = if resizer.context().direction.is_rtl() {
        "rtl"
    } else {
        "ltr"
    };
    term.print(
        table.x,
        0,
        table.width.max(0) as usize,
        &format!("colresize demo [{}]   drag a ┃ to resize   d: direction   q: quit", direction),
        TITLE,
    )?;

    let layout = resizer.layout();
    for cell in layout.cells() {
        if cell.is_scrollbar_gutter || cell.rect.is_empty() {
            continue;
        }
        let width = cell.rect.width as usize;
        let title = host
            .config
            .columns
            .iter()
            .find(|c| c.key == cell.key)
            .map(|c| c.display_title())
            .unwrap_or_else(|| cell.key.as_str());
        let style = if host.selected.as_ref() == Some(&cell.key) {
            SELECTED
        } else {
            HEADER
        };
        term.print(cell.rect.x, cell.rect.y, width, &format!(" {}", title), style)?;

        let registered = resizer.context().registry().get(&cell.key).unwrap_or(0);
        term.print(cell.rect.x, cell.rect.y + 1, width, &format!(" {}", registered), MUTED)?;

        for row in 0..(table.height - 2).max(0) {
            term.print(
                cell.rect.x,
                cell.rect.y + 2 + row,
                width,
                &format!(" {}-{}", cell.key, row + 1),
                BODY,
            )?;
        }
    }

    if resizer.drag().handle_affordance_visible() {
        for plan in resizer.plans().iter().filter(|p| p.visible) {
            let Some(cell) = layout.get(plan.cell_index) else {
                continue;
            };
            let zone = handle_zone(cell.rect, plan.edge);
            if !zone.is_empty() {
                term.print(zone.x, zone.y, 1, "┃", HANDLE)?;
            }
        }
    }

    if let Some(guide) = resizer.guide_line() {
        let edge_x = table.left() + guide.offset;
        let x = match resizer.drag().session().map(|s| s.edge()) {
            Some(HandleEdge::Trailing) => edge_x - 1,
            _ => edge_x,
        };
        for y in table.top()..table.bottom() {
            term.print(x, y, 1, "│", GUIDE)?;
        }
    }

    let status = match &host.last_outcome {
        Some(outcome) => serde_json::to_string(outcome).unwrap_or_default(),
        None => String::from("no resize yet"),
    };
    term.print(
        table.x,
        i32::from(screen_height) - 1,
        table.width.max(0) as usize,
        &status,
        MUTED,
    )?;

    term.flush()
}
