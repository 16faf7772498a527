//! Headless marquee walkthrough.
//!
//! Fits a long song title into a small label, prints the resulting scroll
//! schedule, and samples positions the way a host tick loop would. Runs on
//! the deterministic monospace measurer, so no fonts or display are needed.

use std::time::Duration;

use aria_gui::{Extent, MarqueeLabel, MonospaceMeasurer};

fn main() {
    env_logger::init();

    let mut measurer = MonospaceMeasurer::new();
    let mut label = MarqueeLabel::new();

    label.set_text("The Ballad of the Wandering Minstrel (Extended Mix)");
    label.refit(Extent::new(240.0, 32.0), 240.0, &mut measurer);

    let Some(schedule) = label.schedule() else {
        println!("label fits its bounds, nothing to scroll");
        return;
    };

    println!(
        "fitted \"{}\" at {}px",
        label.text(),
        label.font_size().unwrap()
    );
    for phase in schedule.phases() {
        println!(
            "  {:>15}: start {:>6.2}s, duration {:>5.2}s, x {:>7.1} -> {:>7.1}",
            phase.kind.as_str(),
            phase.start_offset.as_secs_f32(),
            phase.duration.as_secs_f32(),
            phase.from_x,
            phase.to_x,
        );
    }

    println!("sampled positions:");
    for tick in 0..12 {
        let elapsed = Duration::from_millis(tick * 750);
        println!(
            "  t={:5.2}s x={:8.1}",
            elapsed.as_secs_f32(),
            schedule.position_at(elapsed)
        );
    }
}
