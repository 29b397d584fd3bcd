// Example: minimal usage, scroll notifications and scroll-to helper.
use scroll_window::{ScrollWindow, WindowOptions};

fn main() {
    let mut w = ScrollWindow::new();
    w.add_listener(|change| {
        println!(
            "range={:?} overscan={} overflow={:?}",
            change.range(),
            change.overscan,
            change.overflow
        );
    });

    let lengths = |i: usize| if i % 2 == 0 { 50 } else { 100 };
    w.init(
        1_000,
        lengths,
        WindowOptions::new().with_initial_window_length(600),
    );
    println!("total_length={}", w.total_length());

    // Small movements stay within the scroll thresholds and report nothing.
    for offset in [10u64, 20, 30, 40] {
        w.on_scroll(offset);
    }

    w.on_scroll(20_000);
    println!("visible_range={:?}", w.visible_range());

    if let Some(off) = w.scroll_to_item(999) {
        w.on_scroll(w.clamp_scroll_offset(off));
        println!("after scroll_to_item: offset={}", w.scroll_offset());
    }
}
