use paginator_core::{paginate, PageInfo, PageItem, PaginationOptions};
use serde_json::json;

fn pages(tokens: &[&str]) -> Vec<PageItem> {
    tokens.iter().map(|token| token.parse().unwrap()).collect()
}

fn assert_case(options: PaginationOptions, expected: PageInfo) {
    let info = paginate(&options);
    assert_eq!(info, expected, "options: {options:?}");
}

#[test]
fn lists_every_page_when_the_range_fits_the_limit() {
    assert_case(
        PaginationOptions::new(100).with_page_size(10).with_page_limit(10),
        PageInfo {
            total: 100,
            current: 1,
            page_count: 10,
            pages: pages(&["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]),
            next: Some(2),
            previous: None,
            showing_start: 1,
            showing_end: 10,
        },
    );
}

#[test]
fn condenses_toward_the_end_when_current_is_near_the_start() {
    assert_case(
        PaginationOptions::new(120)
            .with_page_size(10)
            .with_page_limit(10)
            .with_current(1),
        PageInfo {
            total: 120,
            current: 1,
            page_count: 12,
            pages: pages(&["1", "2", "3", "4", "5", "6", "7", "...", "11", "12"]),
            next: Some(2),
            previous: None,
            showing_start: 1,
            showing_end: 10,
        },
    );
}

#[test]
fn condenses_toward_the_start_when_current_is_near_the_end() {
    assert_case(
        PaginationOptions::new(120)
            .with_page_size(10)
            .with_page_limit(10)
            .with_current(12),
        PageInfo {
            total: 120,
            current: 12,
            page_count: 12,
            pages: pages(&["1", "2", "...", "6", "7", "8", "9", "10", "11", "12"]),
            next: None,
            previous: Some(11),
            showing_start: 111,
            showing_end: 120,
        },
    );
}

#[test]
fn centers_the_window_in_the_first_half_of_a_long_range() {
    assert_case(
        PaginationOptions::new(200)
            .with_page_size(10)
            .with_page_limit(10)
            .with_current(9),
        PageInfo {
            total: 200,
            current: 9,
            page_count: 20,
            pages: pages(&["1", "...", "7", "8", "9", "10", "11", "...", "19", "20"]),
            next: Some(10),
            previous: Some(8),
            showing_start: 81,
            showing_end: 90,
        },
    );
}

#[test]
fn centers_the_window_in_the_second_half_of_a_long_range() {
    assert_case(
        PaginationOptions::new(200)
            .with_page_size(10)
            .with_page_limit(10)
            .with_current(12),
        PageInfo {
            total: 200,
            current: 12,
            page_count: 20,
            pages: pages(&["1", "2", "...", "10", "11", "12", "13", "14", "...", "20"]),
            next: Some(13),
            previous: Some(11),
            showing_start: 111,
            showing_end: 120,
        },
    );
}

// Walking current across a 12-page range: pages 2-6 keep the leading
// window, 7-8 flip to the trailing one.
#[test]
fn window_flips_as_current_walks_across_the_range() {
    let leading = ["1", "2", "3", "4", "5", "6", "7", "...", "11", "12"];
    let trailing = ["1", "2", "...", "6", "7", "8", "9", "10", "11", "12"];

    for current in 2..=8 {
        let expected_pages = if current <= 6 { &leading } else { &trailing };
        assert_case(
            PaginationOptions::new(120)
                .with_page_size(10)
                .with_page_limit(10)
                .with_current(current),
            PageInfo {
                total: 120,
                current,
                page_count: 12,
                pages: pages(expected_pages),
                next: Some(current + 1),
                previous: Some(current - 1),
                showing_start: current * 10 - 9,
                showing_end: current * 10,
            },
        );
    }
}

#[test]
fn never_condenses_without_a_limit() {
    assert_case(
        PaginationOptions::new(150).with_page_size(10).with_current(8),
        PageInfo {
            total: 150,
            current: 8,
            page_count: 15,
            pages: (1..=15).map(PageItem::Number).collect(),
            next: Some(9),
            previous: Some(7),
            showing_start: 71,
            showing_end: 80,
        },
    );
}

#[test]
fn short_list_fits_on_one_page() {
    assert_case(
        PaginationOptions::new(8).with_page_size(10).with_current(1),
        PageInfo {
            total: 8,
            current: 1,
            page_count: 1,
            pages: pages(&["1"]),
            next: None,
            previous: None,
            showing_start: 1,
            showing_end: 8,
        },
    );
}

#[test]
fn serializes_to_the_wire_shape_the_ui_consumes() {
    let info = paginate(
        &PaginationOptions::new(120)
            .with_page_size(10)
            .with_page_limit(10),
    );

    let value = serde_json::to_value(&info).unwrap();

    assert_eq!(
        value,
        json!({
            "total": 120,
            "current": 1,
            "page_count": 12,
            "pages": [1, 2, 3, 4, 5, 6, 7, "...", 11, 12],
            "next": 2,
            "previous": null,
            "showing_start": 1,
            "showing_end": 10,
        })
    );

    let roundtrip: PageInfo = serde_json::from_value(value).unwrap();
    assert_eq!(roundtrip, info);
}
