use super::*;

fn ctx(raw_index: usize, total: usize, rtl: bool, vertical: bool) -> ActiveIndexContext {
    ActiveIndexContext {
        raw_index,
        total,
        is_rtl_layout: rtl,
        is_vertical_layout: vertical,
    }
}

#[test]
fn ltr_passes_index_through() {
    let r = DotIndexResolver::new(Platform::ltr());
    assert_eq!(r.resolve(ctx(2, 5, false, false)), 2);
    assert_eq!(r.flow_direction(Axis::Horizontal), FlowDirection::Row);
}

#[test]
fn rtl_horizontal_without_native_mirroring_is_mirrored() {
    let r = DotIndexResolver::new(Platform::rtl(false));
    assert_eq!(r.resolve(ctx(0, 5, true, false)), 4);
    assert_eq!(r.resolve(ctx(2, 5, true, false)), 2);
    assert_eq!(r.resolve(ctx(4, 5, true, false)), 0);
    assert_eq!(r.flow_direction(Axis::Horizontal), FlowDirection::RowReverse);
}

#[test]
fn native_mirroring_platform_is_not_mirrored_twice() {
    let r = DotIndexResolver::new(Platform::rtl(true));
    assert_eq!(r.resolve(ctx(1, 5, true, false)), 1);
    assert_eq!(r.flow_direction(Axis::Horizontal), FlowDirection::Row);
}

#[test]
fn vertical_rows_are_never_mirrored() {
    let r = DotIndexResolver::new(Platform::rtl(false));
    assert_eq!(r.resolve(ctx(1, 5, true, true)), 1);
    assert_eq!(r.flow_direction(Axis::Vertical), FlowDirection::Column);
}

#[test]
fn resolve_is_an_involution_for_every_context() {
    for platform in [Platform::ltr(), Platform::rtl(false), Platform::rtl(true)] {
        let r = DotIndexResolver::new(platform);
        for total in 2..12 {
            for axis in [Axis::Horizontal, Axis::Vertical] {
                for i in 0..total {
                    let once = r.resolve(r.context(i, total, axis));
                    assert!(once < total);
                    assert_eq!(r.resolve(r.context(once, total, axis)), i);
                    assert_eq!(r.display_to_pager_index(once, total, axis), i);
                }
            }
        }
    }
}

#[test]
fn out_of_range_index_matches_no_dot() {
    let r = DotIndexResolver::new(Platform::rtl(false));
    assert_eq!(r.resolve(ctx(7, 5, true, false)), 7);
    assert_eq!(r.resolve(ctx(0, 0, true, false)), 0);
}

#[test]
fn row_reverse_slots_count_from_the_far_end() {
    assert_eq!(FlowDirection::RowReverse.slot(0, 5), 4);
    assert_eq!(FlowDirection::RowReverse.slot(2, 5), 2);
    assert_eq!(FlowDirection::Row.slot(1, 5), 1);
    assert_eq!(FlowDirection::Column.slot(3, 5), 3);
}

#[test]
fn fewer_than_two_dots_are_suppressed() {
    assert!(DotIndexResolver::is_suppressed(0));
    assert!(DotIndexResolver::is_suppressed(1));
    assert!(!DotIndexResolver::is_suppressed(2));
}
