// Example: watch the engine's trace output while scrolling with a reused scratch buffer.
//
// cargo run -p winlist --example traced_scroll --features tracing
use winlist::{LayoutConfig, Viewport, collect_virtual_items};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let rows: Vec<u32> = (0..500).collect();
    let config = LayoutConfig::new(32.0, 2);
    let mut scratch = Vec::new();

    for offset in [0.0, 100.0, 2_000.0, 50_000.0] {
        let viewport = Viewport::new(offset, 320.0);
        let ranges = collect_virtual_items(&rows, &config, &viewport, &mut scratch);
        println!(
            "offset={offset:>8} visible={:?} rendered={} items",
            ranges.visible_range,
            scratch.len()
        );
    }
}
