// Example: an infinite feed driven by a simulated scroll container.
//
// The host owns the data and "loads" a new page whenever `on_end_reached` fires. Rows are drawn
// through renderers looked up in a `Registry` by row kind.
//
// cargo run -p winlist-adapter --example feed_sim --features tracing
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use winlist::LayoutConfig;
use winlist_adapter::{ListController, ListOptions, Registry, ViewableItems};

#[derive(Debug)]
struct Row {
    id: u64,
    kind: &'static str,
    title: String,
}

type RenderRow = Arc<dyn Fn(&Row) -> String + Send + Sync>;

fn page(start: u64, len: u64) -> Vec<Row> {
    (start..start + len)
        .map(|id| Row {
            id,
            kind: if id % 10 == 0 { "header" } else { "item" },
            title: format!("entry #{id}"),
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut renderers: Registry<RenderRow> = Registry::new();
    renderers.register("header", Arc::new(|r: &Row| format!("== {} ==", r.title)) as RenderRow);
    renderers.register("item", Arc::new(|r: &Row| format!("   {}", r.title)) as RenderRow);

    let wants_more = Arc::new(AtomicBool::new(false));
    let options = ListOptions::new(LayoutConfig::new(40.0, 2))
        .with_initial_viewport_height(400.0)
        .with_key_fn(|row: &Row, _| format!("row-{}", row.id))
        .with_on_end_reached(Some({
            let wants_more = Arc::clone(&wants_more);
            move || wants_more.store(true, Ordering::Relaxed)
        }))
        .with_on_viewable_items_changed(Some(|v: &ViewableItems<'_, Row>| {
            let first = v.visible_items.first().map(|t| t.key.as_str());
            let last = v.visible_items.last().map(|t| t.key.as_str());
            println!("viewable: {first:?} ..= {last:?}");
        }));
    let mut list = ListController::new(options);

    let mut rows = page(0, 25);
    let mut offset = 0.0;
    for _frame in 0..40 {
        // Several wheel events per frame; only the last one matters.
        for _ in 0..3 {
            offset += 30.0;
            list.on_scroll(offset);
        }
        if !list.needs_layout() {
            continue;
        }

        let layout = list.layout(&rows);
        if let Some(top) = layout.visible_items().next() {
            let draw = renderers.get(top.item.kind).map(|f| f(top.item));
            println!("top row: {}", draw.unwrap_or_default());
        }

        if wants_more.swap(false, Ordering::Relaxed) {
            let next = rows.len() as u64;
            rows.extend(page(next, 25));
            println!("loaded page, rows={}", rows.len());
        }
    }
}
