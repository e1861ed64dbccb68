use super::*;
use crate::foundation::core::Direction;
use crate::layout::mono::{MonoLayoutOpts, MonospaceLayout};
use crate::layout::oracle::LineSpacing;

fn layout(direction: Direction) -> MonospaceLayout {
    // Lines: [0,6) "hello ", [6,12) "world ", [12,17) "again".
    MonospaceLayout::new(
        "hello world again",
        MonoLayoutOpts {
            columns: 10,
            advance: 10.0,
            glyph_height: 20.0,
            direction: Some(direction),
            ..MonoLayoutOpts::default()
        },
    )
    .unwrap()
}

#[test]
fn single_line_uses_min_max_of_carets() {
    let regions = decompose(&layout(Direction::Ltr), 1, 4).unwrap();
    assert_eq!(
        regions,
        vec![LineRegion {
            line: 0,
            top: 0.0,
            bottom: 20.0,
            start_x: 10.0,
            end_x: 40.0,
        }]
    );

    let regions = decompose(&layout(Direction::Rtl), 1, 4).unwrap();
    assert_eq!(regions.len(), 1);
    assert_eq!((regions[0].start_x, regions[0].end_x), (60.0, 90.0));
}

#[test]
fn multi_line_yields_one_region_per_line_in_order() {
    let l = layout(Direction::Ltr);
    let regions = decompose(&l, 2, 15).unwrap();
    assert_eq!(regions.len(), 3);
    assert_eq!(
        regions.iter().map(|r| r.line).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );

    assert_eq!((regions[0].start_x, regions[0].end_x), (20.0, 50.0));
    assert_eq!((regions[1].start_x, regions[1].end_x), (0.0, 50.0));
    assert_eq!((regions[2].start_x, regions[2].end_x), (0.0, 30.0));
    assert_eq!((regions[1].top, regions[1].bottom), (20.0, 40.0));
}

#[test]
fn rtl_swaps_leading_and_trailing_edges() {
    let ltr = decompose(&layout(Direction::Ltr), 2, 9).unwrap();
    let rtl = decompose(&layout(Direction::Rtl), 2, 9).unwrap();

    // LTR: first line runs to the right edge, last line starts at the left edge.
    assert_eq!(ltr[0].end_x, 50.0);
    assert_eq!(ltr[1].start_x, 0.0);

    // RTL: first line runs to the left edge, last line starts at the right edge.
    let l = layout(Direction::Rtl);
    assert_eq!(rtl[0].end_x, l.line_left(0));
    assert_eq!(rtl[1].start_x, l.line_right(1));
    assert!(rtl[0].start_x > rtl[0].end_x);
    assert_eq!(rtl[0].to_rect().x0, 50.0);
    assert_eq!(rtl[0].to_rect().x1, 80.0);
}

#[test]
fn zero_length_span_is_one_degenerate_region() {
    let regions = decompose(&layout(Direction::Ltr), 3, 3).unwrap();
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].left(), regions[0].right());
    assert_eq!(regions[0].width(), 0.0);
}

#[test]
fn range_ending_at_text_end_is_valid() {
    let regions = decompose(&layout(Direction::Ltr), 12, 17).unwrap();
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].line, 2);
}

#[test]
fn broken_ranges_fail_fast() {
    let l = layout(Direction::Ltr);
    assert!(matches!(
        decompose(&l, 0, 18),
        Err(SquigglyError::Layout(_))
    ));
    assert!(matches!(decompose(&l, 5, 2), Err(SquigglyError::Layout(_))));
}

#[test]
fn spacing_is_excluded_except_on_last_line() {
    for spacing in [
        LineSpacing {
            add: 10.0,
            multiplier: 1.0,
        },
        LineSpacing {
            add: 0.0,
            multiplier: 1.5,
        },
        LineSpacing {
            add: 4.0,
            multiplier: 1.5,
        },
    ] {
        let l = MonospaceLayout::new(
            "hello world again",
            MonoLayoutOpts {
                columns: 10,
                advance: 10.0,
                glyph_height: 20.0,
                spacing,
                ..MonoLayoutOpts::default()
            },
        )
        .unwrap();
        let regions = decompose(&l, 0, 17).unwrap();
        for r in &regions {
            assert!(
                (r.bottom - r.top - 20.0).abs() < 1e-9,
                "line {} spans {}..{} with {spacing:?}",
                r.line,
                r.top,
                r.bottom
            );
        }
    }
}

#[test]
fn layout_padding_is_excluded_on_outer_lines() {
    let l = MonospaceLayout::new(
        "hello world again",
        MonoLayoutOpts {
            columns: 10,
            advance: 10.0,
            glyph_height: 20.0,
            top_padding: 5.0,
            bottom_padding: 7.0,
            ..MonoLayoutOpts::default()
        },
    )
    .unwrap();
    let regions = decompose(&l, 0, 17).unwrap();
    assert_eq!((regions[0].top, regions[0].bottom), (5.0, 25.0));
    assert_eq!((regions[2].top, regions[2].bottom), (45.0, 65.0));
}

#[test]
fn first_line_keeps_full_glyph_box_with_padding_and_multiplier() {
    let l = MonospaceLayout::new(
        "hello world again",
        MonoLayoutOpts {
            columns: 10,
            advance: 10.0,
            glyph_height: 20.0,
            top_padding: 10.0,
            spacing: LineSpacing {
                add: 0.0,
                multiplier: 2.0,
            },
            ..MonoLayoutOpts::default()
        },
    )
    .unwrap();
    let regions = decompose(&l, 0, 17).unwrap();
    let bounds: Vec<_> = regions.iter().map(|r| (r.top, r.bottom)).collect();
    assert_eq!(bounds, vec![(10.0, 30.0), (50.0, 70.0), (90.0, 110.0)]);
}
