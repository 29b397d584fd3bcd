// Example: items grow after the first render; only the affected suffix is re-indexed.
use std::sync::{Arc, Mutex};

use scroll_window::{ScrollWindow, WindowOptions};

fn main() {
    let lengths = Arc::new(Mutex::new(vec![40u32; 500]));

    let mut w = ScrollWindow::new();
    let source = Arc::clone(&lengths);
    w.init(
        500,
        move |i| source.lock().map(|l| l[i]).unwrap_or(0),
        WindowOptions::new().with_initial_window_length(400),
    );
    w.update(Some(8_000));
    println!("before: range={:?} total={}", w.offset_range(), w.total_length());

    // Items 300.. were measured taller than estimated.
    if let Ok(mut l) = lengths.lock() {
        l[300..].iter_mut().for_each(|len| *len = 80);
    }
    if let Err(err) = w.reset_from_index(300) {
        eprintln!("rebuild failed: {err}");
        return;
    }
    println!("after: range={:?} total={}", w.offset_range(), w.total_length());

    // Append 100 items, keeping the index for the first 500.
    if let Ok(mut l) = lengths.lock() {
        l.extend(std::iter::repeat_n(40, 100));
    }
    if let Err(err) = w.set_item_count_from(500, 600) {
        eprintln!("append failed: {err}");
        return;
    }
    println!("appended: items={} total={}", w.item_count(), w.total_length());
}
