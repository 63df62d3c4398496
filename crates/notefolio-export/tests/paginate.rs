use notefolio_export::paginate::{plan_offsets, plan_pages, PAGE_STRIDE_PX};

#[test]
fn exact_multiple_yields_exactly_k_pages() {
    for k in 1..=4u32 {
        let offsets = plan_offsets(1000 * k, 1000);
        assert_eq!(offsets.len() as u32, k, "strip = {k} pages");
        let expected: Vec<u32> = (0..k).map(|i| i * 1000).collect();
        assert_eq!(offsets, expected);
    }
}

#[test]
fn remainder_yields_one_extra_page_showing_only_the_tail() {
    let offsets = plan_offsets(2 * 1000 + 300, 1000);
    assert_eq!(offsets, [0, 1000, 2000]);
    // Last page starts inside the strip: only the 300 px remainder shows.
    assert!(offsets[2] < 2300);
}

#[test]
fn strip_shorter_than_one_page_is_a_single_page() {
    assert_eq!(plan_offsets(1, 1000), [0]);
    assert_eq!(plan_offsets(999, 1000), [0]);
}

#[test]
fn no_trailing_blank_page_at_page_boundaries() {
    // One-page strip: the stride overshoots once; the blank page is dropped.
    assert_eq!(plan_offsets(1000, 1000), [0]);
    assert_eq!(plan_offsets(1001, 1000), [0, 1000]);
}

#[test]
fn standard_plan_uses_the_oversampled_page_stride() {
    let plan = plan_pages(PAGE_STRIDE_PX * 3);
    assert_eq!(plan.page_height, PAGE_STRIDE_PX);
    assert_eq!(plan.offsets.len(), 3);
    assert_eq!(plan.strip_height, PAGE_STRIDE_PX * 3);
}
