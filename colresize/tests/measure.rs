use colresize::{
    with_scrollbar_gutter, ColumnDescriptor, ColumnKey, ColumnWidth, Direction, HeaderLayout,
    Rect, WidthMeasurer, WidthRegistry, SCROLLBAR_GUTTER_KEY,
};

fn columns() -> Vec<ColumnDescriptor> {
    with_scrollbar_gutter(
        vec![
            ColumnDescriptor::new("a", 10),
            ColumnDescriptor::new("b", 20),
            ColumnDescriptor::new("c", 30),
        ],
        1,
    )
}

// ============================================================================
// Batching
// ============================================================================

#[test]
fn test_reports_are_delivered_as_one_batch() {
    let mut measurer = WidthMeasurer::new();
    measurer.observe(&columns());

    measurer.report(&"a".into(), 11);
    measurer.report(&"b".into(), 22);
    assert!(measurer.has_pending());

    assert_eq!(
        measurer.flush(),
        vec![ColumnWidth::new("a", 11), ColumnWidth::new("b", 22)]
    );
    assert!(measurer.flush().is_empty());
}

#[test]
fn test_absent_columns_keep_previous_width() {
    let columns = columns();
    let mut registry = WidthRegistry::from_columns(&columns);
    let mut measurer = WidthMeasurer::new();
    measurer.observe(&columns);

    measurer.report(&"b".into(), 25);
    assert_eq!(measurer.flush_into(&mut registry), 1);

    assert_eq!(
        registry.snapshot(),
        vec![
            ColumnWidth::new("a", 10),
            ColumnWidth::new("b", 25),
            ColumnWidth::new("c", 30),
        ]
    );
}

#[test]
fn test_unchanged_width_is_not_reported_again() {
    let mut measurer = WidthMeasurer::new();
    measurer.observe(&columns());

    measurer.report(&"a".into(), 11);
    measurer.flush();
    measurer.report(&"a".into(), 11);

    assert!(!measurer.has_pending());

    measurer.report(&"a".into(), 12);
    assert_eq!(measurer.flush(), vec![ColumnWidth::new("a", 12)]);
}

#[test]
fn test_unobserved_keys_and_gutter_are_ignored() {
    let mut measurer = WidthMeasurer::new();
    measurer.observe(&columns());

    measurer.report(&"zzz".into(), 5);
    measurer.report(&ColumnKey::from(SCROLLBAR_GUTTER_KEY), 1);

    assert!(!measurer.is_observing(&SCROLLBAR_GUTTER_KEY.into()));
    assert!(measurer.flush().is_empty());
}

#[test]
fn test_reobserving_keeps_known_sizes() {
    let mut measurer = WidthMeasurer::new();
    measurer.observe(&columns());
    measurer.report(&"a".into(), 11);
    measurer.flush();

    measurer.observe(&columns());
    measurer.report(&"a".into(), 11);

    assert!(!measurer.has_pending());
}

// ============================================================================
// Header measurement
// ============================================================================

#[test]
fn test_measure_header_reports_every_data_cell() {
    let columns = columns();
    let mut registry = WidthRegistry::from_columns(&columns);
    registry.set(&"c".into(), 35);
    let layout = HeaderLayout::compute(&columns, &registry, Rect::new(0, 0, 0, 1), Direction::Ltr);

    let mut measurer = WidthMeasurer::new();
    measurer.observe(&columns);
    measurer.measure_header(&layout);

    assert_eq!(
        measurer.flush(),
        vec![
            ColumnWidth::new("a", 10),
            ColumnWidth::new("b", 20),
            ColumnWidth::new("c", 35),
        ]
    );
}

#[test]
fn test_invalidated_key_reports_repeated_width() {
    let mut measurer = WidthMeasurer::new();
    measurer.observe(&columns());
    measurer.report(&"a".into(), 10);
    measurer.flush();

    measurer.invalidate([&ColumnKey::from("a"), &ColumnKey::from("zzz")]);
    measurer.report(&"a".into(), 10);

    assert_eq!(measurer.flush(), vec![ColumnWidth::new("a", 10)]);
}

#[test]
fn test_huge_widths_saturate() {
    let half = i32::MAX / 2 + 1;
    let columns = vec![ColumnDescriptor::new("a", half), ColumnDescriptor::new("b", half)];
    let registry = WidthRegistry::from_columns(&columns);

    assert_eq!(registry.total_width(), i32::MAX);

    let ltr = HeaderLayout::compute(&columns, &registry, Rect::new(0, 0, 0, 1), Direction::Ltr);
    assert_eq!(ltr.cells()[1].rect.x, half);
    assert_eq!(ltr.bounds().right(), i32::MAX);

    let rtl = HeaderLayout::compute(&columns, &registry, Rect::new(0, 0, 0, 1), Direction::Rtl);
    assert_eq!(rtl.cells()[0].rect.x, i32::MAX - half);
}

#[test]
fn test_layout_from_descriptor_widths() {
    let columns = columns();
    let mut registry = WidthRegistry::from_columns(&columns);
    registry.set(&"a".into(), 99);

    let layout = HeaderLayout::from_columns(&columns, Rect::new(0, 0, 0, 1), Direction::Ltr);

    let widths: Vec<_> = layout.cells().iter().map(|c| c.rect.width).collect();
    assert_eq!(widths, vec![10, 20, 30, 1]);
}

#[test]
fn test_header_layout_positions() {
    let columns = columns();
    let registry = WidthRegistry::from_columns(&columns);

    let ltr = HeaderLayout::compute(&columns, &registry, Rect::new(2, 1, 0, 1), Direction::Ltr);
    let xs: Vec<_> = ltr.cells().iter().map(|c| c.rect.x).collect();
    assert_eq!(xs, vec![2, 12, 32, 62]);
    assert_eq!(ltr.bounds(), Rect::new(2, 1, 61, 1));

    let rtl = HeaderLayout::compute(&columns, &registry, Rect::new(2, 1, 0, 1), Direction::Rtl);
    let xs: Vec<_> = rtl.cells().iter().map(|c| c.rect.x).collect();
    assert_eq!(xs, vec![53, 33, 3, 2]);
    assert_eq!(rtl.bounds(), Rect::new(2, 1, 61, 1));
}
