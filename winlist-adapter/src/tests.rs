use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use winlist::{Align, IndexRange, LayoutConfig};

fn rows(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Options with recording callbacks: end-reached count + every reported visible index list.
fn recording_options(
    config: LayoutConfig,
) -> (ListOptions<usize>, Arc<AtomicUsize>, Arc<Mutex<Vec<Vec<usize>>>>) {
    let ends = Arc::new(AtomicUsize::new(0));
    let seen = Arc::new(Mutex::new(Vec::<Vec<usize>>::new()));
    let opts = ListOptions::new(config)
        .with_on_end_reached(Some({
            let ends = Arc::clone(&ends);
            move || {
                ends.fetch_add(1, Ordering::SeqCst);
            }
        }))
        .with_on_viewable_items_changed(Some({
            let seen = Arc::clone(&seen);
            move |v: &ViewableItems<'_, usize>| {
                seen.lock().unwrap().push(v.indexes().collect());
            }
        }));
    (opts, ends, seen)
}

#[test]
fn viewable_items_reported_once_per_distinct_window() {
    let items = rows(100);
    let (opts, _, seen) = recording_options(LayoutConfig::new(10.0, 2));
    let mut c = ListController::new(opts.with_initial_viewport_height(30.0));

    c.layout(&items);
    // Scroll within the same item: visible window unchanged.
    c.on_scroll(4.0);
    c.layout(&items);
    c.on_scroll(9.0);
    c.layout(&items);
    // Cross into the next item.
    c.on_scroll(10.0);
    c.layout(&items);
    c.layout(&items);

    let seen = seen.lock().unwrap();
    assert_eq!(*seen, [Vec::from([0usize, 1, 2]), Vec::from([1usize, 2, 3])]);
    assert_eq!(c.last_visible_range(), Some(IndexRange::new(1, 4)));
}

#[test]
fn viewable_items_exclude_overscan_and_carry_keys() {
    let items = ["a", "b", "c", "d", "e", "f"];
    let tokens = Arc::new(Mutex::new(Vec::<(usize, String)>::new()));
    let opts = ListOptions::new(LayoutConfig::new(10.0, 3))
        .with_initial_viewport_height(20.0)
        .with_initial_offset(20.0)
        .with_key_fn(|item: &&str, i| format!("{item}-{i}"))
        .with_on_viewable_items_changed(Some({
            let tokens = Arc::clone(&tokens);
            move |v: &ViewableItems<'_, &str>| {
                let mut out = tokens.lock().unwrap();
                for t in &v.visible_items {
                    out.push((t.index, t.key.clone()));
                }
            }
        }));
    let mut c = ListController::new(opts);
    let layout = c.layout(&items);
    assert_eq!(layout.rendered_range, IndexRange::new(0, 6));

    let tokens = tokens.lock().unwrap();
    assert_eq!(
        *tokens,
        [(2, String::from("c-2")), (3, String::from("d-3"))]
    );
}

#[test]
fn viewable_items_report_transition_to_empty_once() {
    let (opts, _, seen) = recording_options(LayoutConfig::new(10.0, 0));
    let mut c = ListController::new(opts.with_initial_viewport_height(20.0));

    let empty: Vec<usize> = Vec::new();
    c.layout(&empty);
    assert!(seen.lock().unwrap().is_empty());

    let items = rows(5);
    c.layout(&items);
    c.layout(&empty);
    c.layout(&empty);

    let seen = seen.lock().unwrap();
    assert_eq!(*seen, [Vec::from([0usize, 1]), Vec::new()]);
}

#[test]
fn viewable_items_never_repeat_identical_sets_under_random_scrolling() {
    let items = rows(200);
    let (opts, _, seen) = recording_options(LayoutConfig::new(7.0, 1));
    let mut c = ListController::new(opts.with_initial_viewport_height(50.0));

    let mut state = 0x1234_5678_u64;
    for _ in 0..500 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let offset = (state >> 33) as f64 % 1500.0;
        c.on_scroll(offset);
        c.layout(&items);
    }

    let seen = seen.lock().unwrap();
    assert!(!seen.is_empty());
    for pair in seen.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn end_reached_fires_once_per_crossing() {
    // 10 items * 10 = 100 total; viewport 20.
    let items = rows(10);
    let (opts, ends, _) = recording_options(LayoutConfig::new(10.0, 0));
    let mut c = ListController::new(opts.with_initial_viewport_height(20.0));

    c.layout(&items); // progress 0.2
    assert_eq!(ends.load(Ordering::SeqCst), 0);

    c.on_scroll(60.0); // progress 0.8
    c.layout(&items);
    assert_eq!(ends.load(Ordering::SeqCst), 1);
    assert!(c.is_end_reached_latched());

    c.on_scroll(75.0);
    c.layout(&items);
    c.on_scroll(80.0);
    c.layout(&items);
    assert_eq!(ends.load(Ordering::SeqCst), 1);

    // Drop below the threshold: re-arm.
    c.on_scroll(30.0);
    c.layout(&items);
    assert!(!c.is_end_reached_latched());
    assert_eq!(ends.load(Ordering::SeqCst), 1);

    c.on_scroll(70.0);
    c.layout(&items);
    assert_eq!(ends.load(Ordering::SeqCst), 2);
}

#[test]
fn end_reached_rearms_when_item_count_changes() {
    let (opts, ends, _) = recording_options(LayoutConfig::new(10.0, 0));
    let mut c = ListController::new(
        opts.with_initial_viewport_height(20.0)
            .with_initial_offset(80.0),
    );

    let page1 = rows(10);
    c.layout(&page1);
    assert_eq!(ends.load(Ordering::SeqCst), 1);

    // Same count, still past the threshold: no repeat.
    c.layout(&page1);
    assert_eq!(ends.load(Ordering::SeqCst), 1);

    // A page arrives but the viewport is still near the end: fires again.
    let page2 = rows(11);
    c.layout(&page2);
    assert_eq!(ends.load(Ordering::SeqCst), 2);

    // A large page pushes progress below the threshold: no fire, latch open.
    let page3 = rows(50);
    c.layout(&page3);
    assert_eq!(ends.load(Ordering::SeqCst), 2);
    assert!(!c.is_end_reached_latched());
}

#[test]
fn end_reached_ignores_empty_lists_and_honors_custom_threshold() {
    let (opts, ends, _) = recording_options(LayoutConfig::new(10.0, 0));
    let mut c = ListController::new(
        opts.with_initial_viewport_height(500.0)
            .with_end_reached_threshold(0.5),
    );

    let empty: Vec<usize> = Vec::new();
    c.layout(&empty);
    assert_eq!(ends.load(Ordering::SeqCst), 0);

    let items = rows(200); // total 2000, viewport 500
    c.on_scroll(400.0); // progress 0.45
    c.layout(&items);
    assert_eq!(ends.load(Ordering::SeqCst), 0);
    c.on_scroll(500.0); // progress 0.5
    c.layout(&items);
    assert_eq!(ends.load(Ordering::SeqCst), 1);
}

#[test]
fn events_coalesce_into_latest_snapshot() {
    let items = rows(1000);
    let (opts, _, seen) = recording_options(LayoutConfig::new(10.0, 0));
    let mut c = ListController::new(opts);

    c.layout(&items);
    assert!(!c.needs_layout());

    // A burst of events in one frame.
    for offset in [10.0, 250.0, 3000.0, 5000.0] {
        c.on_scroll(offset);
    }
    c.on_resize(100.0);
    c.on_resize(40.0);
    assert!(c.needs_layout());

    let layout = c.layout(&items);
    assert!(!c.needs_layout());
    assert_eq!(layout.visible_range, IndexRange::new(500, 504));

    // Only the first pass and the coalesced pass were reported.
    assert_eq!(seen.lock().unwrap().len(), 2);

    // Repeating the current values is not a change.
    c.apply_frame(40.0, 5000.0);
    assert!(!c.needs_layout());
}

#[test]
fn config_changes_mark_dirty() {
    let mut c: ListController<usize> = ListController::new(ListOptions::default());
    let items = rows(3);
    c.layout(&items);

    c.set_overscan(1); // unchanged default
    assert!(!c.needs_layout());
    c.set_overscan(4);
    assert!(c.needs_layout());
    assert_eq!(c.config().overscan, 4);

    c.layout(&items);
    c.set_estimated_item_size(20.0);
    assert!(c.needs_layout());
    assert_eq!(c.config().item_size(), 20.0);
}

#[test]
fn controlled_scroll_defers_to_caller() {
    let requests = Arc::new(Mutex::new(Vec::<f64>::new()));
    let mut c = ListController::new_controlled(
        ListOptions::new(LayoutConfig::new(10.0, 0)).with_initial_viewport_height(30.0),
        0.0,
        {
            let requests = Arc::clone(&requests);
            move |off| requests.lock().unwrap().push(off)
        },
    );
    assert!(c.is_controlled());

    let items = rows(100);
    c.layout(&items);

    c.on_scroll(120.0);
    assert_eq!(c.scroll_offset(), 0.0);
    assert!(!c.needs_layout());

    let target = c.scroll_to_index(50, items.len(), Align::Start);
    assert_eq!(target, 500.0);
    assert_eq!(c.scroll_offset(), 0.0);
    assert_eq!(*requests.lock().unwrap(), [120.0, 500.0]);

    // The caller accepts the second request.
    c.sync_scroll_offset(500.0);
    assert!(c.needs_layout());
    let layout = c.layout(&items);
    assert_eq!(layout.visible_range, IndexRange::new(50, 53));
}

#[test]
fn owned_scroll_to_index_moves_immediately() {
    let mut c: ListController<usize> = ListController::new(
        ListOptions::new(LayoutConfig::new(10.0, 0)).with_initial_viewport_height(30.0),
    );
    assert!(!c.is_controlled());
    let items = rows(100);
    c.layout(&items);

    assert_eq!(c.scroll_to_index(99, items.len(), Align::End), 970.0);
    assert_eq!(c.scroll_offset(), 970.0);
    assert!(c.needs_layout());
    let layout = c.layout(&items);
    assert_eq!(layout.visible_range, IndexRange::new(97, 100));
}

#[test]
fn controllable_modes() {
    let mut owned = Controllable::owned(1u32);
    assert!(owned.request(2));
    assert!(!owned.request(2));
    assert_eq!(*owned.get(), 2);

    let calls = Arc::new(AtomicUsize::new(0));
    let mut controlled = Controllable::controlled(1u32, {
        let calls = Arc::clone(&calls);
        move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
        }
    });
    assert!(!controlled.request(5));
    assert!(!controlled.request(1)); // equal to current: dropped
    assert_eq!(*controlled.get(), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(controlled.sync(5));
    assert_eq!(*controlled.get(), 5);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn key_for_defaults_to_index() {
    let c: ListController<&str> = ListController::new(ListOptions::default());
    assert_eq!(c.key_for(&"row", 7), "7");

    let c: ListController<&str> =
        ListController::new(ListOptions::default().with_key_fn(|item: &&str, _| String::from(*item)));
    assert_eq!(c.key_for(&"row", 7), "row");
}

#[test]
fn options_validation() {
    let ok: ListOptions<usize> = ListOptions::default();
    assert_eq!(ok.validate(), Ok(()));

    let bad = ListOptions::<usize>::default().with_end_reached_threshold(1.5);
    assert_eq!(bad.validate(), Err(winlist::ConfigError::InvalidThreshold(1.5)));
    assert!(ListController::try_new(bad.clone()).is_err());

    let bad = ListOptions::<usize>::default().with_end_reached_threshold(0.0);
    assert!(bad.validate().is_err());

    let bad = ListOptions::<usize>::new(LayoutConfig {
        estimated_item_size: 0.0,
        overscan: 0,
    });
    assert_eq!(
        bad.validate(),
        Err(winlist::ConfigError::InvalidItemSize(0.0))
    );
}

#[test]
fn out_of_range_threshold_is_clamped_by_new() {
    // 1.5 clamps to 1.0: only the very bottom triggers.
    let (opts, ends, _) = recording_options(LayoutConfig::new(10.0, 0));
    let mut c = ListController::new(
        opts.with_end_reached_threshold(1.5)
            .with_initial_viewport_height(20.0),
    );
    let items = rows(10);
    c.on_scroll(70.0);
    c.layout(&items);
    assert_eq!(ends.load(Ordering::SeqCst), 0);
    c.on_scroll(80.0);
    c.layout(&items);
    assert_eq!(ends.load(Ordering::SeqCst), 1);
}

#[test]
fn state_roundtrip_suppresses_duplicate_notifications() {
    let items = rows(50);
    let (opts, ends, seen) = recording_options(LayoutConfig::new(10.0, 0));
    let mut a = ListController::new(opts.clone().with_initial_viewport_height(100.0));
    a.on_scroll(400.0);
    a.layout(&items);
    assert_eq!(ends.load(Ordering::SeqCst), 1);
    assert_eq!(seen.lock().unwrap().len(), 1);

    let snapshot = a.state();
    assert_eq!(snapshot.item_count, Some(50));
    assert_eq!(snapshot.last_visible, Some(IndexRange::new(40, 50)));
    assert!(snapshot.end_reached_latched);

    let mut b = ListController::new(opts);
    b.restore_state(snapshot);
    assert_eq!(b.viewport(), a.viewport());
    assert!(b.needs_layout());
    b.layout(&items);
    assert_eq!(ends.load(Ordering::SeqCst), 1);
    assert_eq!(seen.lock().unwrap().len(), 1);

    b.reset_notifications();
    b.layout(&items);
    assert_eq!(ends.load(Ordering::SeqCst), 2);
    assert_eq!(seen.lock().unwrap().len(), 2);
}

#[test]
fn registry_lifecycle() {
    type Render = Arc<dyn Fn(&str) -> String + Send + Sync>;

    let mut reg: Registry<Render> = Registry::new();
    assert!(reg.is_empty());

    assert!(reg.register("plain", Arc::new(|s: &str| String::from(s)) as Render).is_none());
    assert!(reg.register("shout", Arc::new(|s: &str| s.to_uppercase()) as Render).is_none());
    assert_eq!(reg.len(), 2);
    assert!(reg.contains("plain"));

    let render = reg.get("shout").unwrap();
    assert_eq!(render("hi"), "HI");

    // Re-registering replaces and hands back the old entry.
    let prev = reg.register("shout", Arc::new(|s: &str| format!("{s}!")) as Render);
    assert_eq!(prev.unwrap()("x"), "X");
    assert_eq!(reg.get("shout").unwrap()("hi"), "hi!");

    let mut keys: Vec<&str> = reg.keys().collect();
    keys.sort_unstable();
    assert_eq!(keys, ["plain", "shout"]);

    assert!(reg.unregister("plain").is_some());
    assert!(reg.unregister("plain").is_none());
    assert!(reg.get("plain").is_none());

    reg.clear();
    assert!(reg.is_empty());
}
