mod error;
mod host;
mod paths;
mod render;
mod terminal;
mod text;

use std::fs::{self, File};
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEventKind};
use simplelog::{Config, LevelFilter, WriteLogger};

use colresize::{
    ColumnConfig, ColumnResizer, Direction, Fixed, HeaderLayout, PointerCapture, PointerEvent,
    Rect, StickyOffsets, TableConfig, TableContext,
};

use crate::error::DemoError;
use crate::host::DemoHost;
use crate::terminal::Terminal;

const FRAME: Duration = Duration::from_millis(50);

fn default_config() -> TableConfig {
    TableConfig::new(vec![
        ColumnConfig::new("name", 24).title("Name").resizable().min_width(8),
        ColumnConfig::new("email", 30).title("Email address").resizable(),
        ColumnConfig::new("role", 12).title("Role").resizable().min_width(6),
        ColumnConfig::new("status", 10)
            .title("Status")
            .resizable()
            .fixed(Fixed::Right),
    ])
    .scrollbar_size(1)
}

/// Column file from the first argument, or the built-in table.
fn load_config() -> Result<TableConfig, DemoError> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = fs::read_to_string(&path)?;
            let config = serde_json::from_str(&json)?;
            log::info!("[demo] loaded columns from {}", path);
            Ok(config)
        }
        None => Ok(default_config()),
    }
}

/// Where the header row starts. Right-to-left tables hug the right edge.
fn header_origin(resizer: &ColumnResizer, table: Rect) -> Rect {
    let origin = Rect::new(table.x, table.y, 0, 1);
    if !resizer.context().direction.is_rtl() {
        return origin;
    }
    let total = resizer
        .cells()
        .iter()
        .fold(0i32, |sum, c| sum.saturating_add(c.width.max(0)));
    origin.offset_x(table.width.saturating_sub(total).max(0))
}

fn run(host: &mut DemoHost) -> Result<(), DemoError> {
    let cells = host.config.header_cells()?;

    let mut term = Terminal::new()?;
    let (width, height) = term.size()?;
    let mut screen_height = height;
    let mut table = render::table_bounds(width, height);

    let context = TableContext::new(table.width)
        .direction(host.config.direction)
        .scrollbar_size(host.config.scrollbar_size)
        .sticky(StickyOffsets::from_columns(&cells))
        .table_bounds(table);
    let capture = PointerCapture::new();
    let mut resizer = ColumnResizer::new(cells, context, capture.clone());

    'main: loop {
        // Configured widths are what renders; the measurer reconciles the registry.
        let origin = header_origin(&resizer, table);
        let layout =
            HeaderLayout::from_columns(resizer.cells(), origin, resizer.context().direction);
        resizer.set_layout(layout);
        render::draw(&mut term, &resizer, host, table, screen_height)?;

        for event in term.poll(FRAME)? {
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break 'main,
                    KeyCode::Char('d') if !resizer.is_resizing() => {
                        let direction = match resizer.context().direction {
                            Direction::Ltr => Direction::Rtl,
                            Direction::Rtl => Direction::Ltr,
                        };
                        log::info!("[demo] direction {:?}", direction);
                        host.config.direction = direction;
                        resizer.context_mut().direction = direction;
                        resizer.resolve_handles();
                    }
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    let Some(pointer) = PointerEvent::from_crossterm(&mouse) else {
                        continue;
                    };
                    // Moves and releases during a drag never reach the page.
                    let captured = capture.is_captured();
                    let result = resizer.handle_event(&pointer, host);
                    if let PointerEvent::Down { x, y } = pointer {
                        if !captured && !result.is_handled() {
                            host.click(resizer.layout(), x, y);
                        }
                    }
                }
                Event::Resize(width, height) => {
                    screen_height = height;
                    table = render::table_bounds(width, height);
                    let cx = resizer.context_mut();
                    cx.component_width = table.width;
                    cx.table_bounds = table;
                }
                _ => {}
            }
        }

        if host.take_columns_changed() {
            let cells = host.config.header_cells()?;
            resizer.context_mut().sticky = StickyOffsets::from_columns(&cells);
            resizer.set_columns(cells);
        }
    }

    resizer.teardown(host);
    Ok(())
}

fn main() -> Result<(), DemoError> {
    let log_path = paths::log_file();
    WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(&log_path)?)?;
    log::info!("[demo] logging to {}", log_path.display());

    let mut host = DemoHost::new(load_config()?);
    let result = run(&mut host);
    if let Err(e) = &result {
        log::error!("[demo] {}", e);
    }
    result
}
