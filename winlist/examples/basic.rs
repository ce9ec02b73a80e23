// Example: one layout pass and a scroll-to helper.
use winlist::{Align, LayoutConfig, Viewport, compute_layout, scroll_to_index_offset};

fn main() {
    let rows: Vec<String> = (0..1_000_000).map(|i| format!("row {i}")).collect();
    let config = LayoutConfig::new(24.0, 3);
    let viewport = Viewport::new(123_456.0, 480.0);

    let layout = compute_layout(&rows, &config, &viewport);
    println!("total_extent={}", layout.total_extent);
    println!("visible_range={:?}", layout.visible_range);
    println!("rendered_range={:?}", layout.rendered_range);
    if let Some(first) = layout.items.first() {
        println!("first_rendered: {} at {} ({})", first.index, first.offset, first.item);
    }

    let off = scroll_to_index_offset(rows.len(), &config, &viewport, 999_999, Align::End);
    let layout = compute_layout(&rows, &config, &Viewport::new(off, 480.0));
    println!("after scroll_to_index: offset={off} visible={:?}", layout.visible_range);
}
