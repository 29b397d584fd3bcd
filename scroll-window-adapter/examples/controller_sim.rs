// Example: simulate a host that forwards raw scroll/resize events and ticks every frame.
use scroll_window::{Axis, WindowOptions};
use scroll_window_adapter::{Controller, ScrollPosition, Viewport};

fn main() {
    let mut c = Controller::new(
        10_000,
        |i| 24 + (i % 3) as u32 * 8,
        WindowOptions::new().with_axis(Axis::Vertical),
    )
    .with_scroll_wait_ms(16);

    c.window_mut().add_listener(|change| {
        println!("range={:?} total={}", change.range(), change.total_length);
    });

    c.connect(Viewport::new(320, 480), ScrollPosition::new(0, 0));

    // A fling: many scroll events per frame, a window resize mid-way.
    let mut top = 0u64;
    for frame in 0..20u64 {
        let now_ms = frame * 16;
        for _ in 0..4 {
            top += 37;
            c.on_scroll(ScrollPosition::new(0, top), now_ms);
        }
        if frame == 10 {
            c.on_resize(Viewport::new(320, 640), now_ms);
        }
        c.tick(now_ms);
    }

    // Let debounced signals settle.
    c.tick(1_000);
    println!(
        "offset={} window_length={} spacers={:?}",
        c.window().scroll_offset(),
        c.window().window_length(),
        c.spacer_lengths()
    );

    c.disconnect();
}
