//! Walks the player panel through a session: open a song, send it to the
//! performers, play, and stop, printing the panel's view of the world after
//! every step.

use std::path::Path;
use std::time::Duration;

use aria_gui::{Extent, MonospaceMeasurer};
use aria_gui_player::PlayerPanel;

fn dump(panel: &PlayerPanel) {
    let controls = panel.controls();
    println!(
        "[{:>7}] load={} send={} play={} stop={} | name=\"{}\" time=\"{}\"",
        panel.status_text(),
        controls.load_song,
        controls.send_song,
        controls.play,
        controls.stop,
        panel.song_name.text(),
        panel.song_time.text(),
    );
}

fn main() {
    env_logger::init();

    let mut measurer = MonospaceMeasurer::new();
    let mut panel = PlayerPanel::new();
    dump(&panel);

    panel.open_song(
        Path::new("songs/maiden-of-the-moon.mid"),
        Duration::from_secs(83),
    );
    panel.refit_labels(
        Extent::new(240.0, 32.0),
        Extent::new(120.0, 24.0),
        240.0,
        &mut measurer,
    );
    dump(&panel);

    panel.send_song();
    dump(&panel);

    panel.play();
    panel.set_progress(Duration::from_secs(45));
    dump(&panel);

    if let Some(schedule) = panel.song_name.schedule() {
        println!(
            "song name scrolls: loop {:.1}s over {:.1}px",
            schedule.continuous_loop().duration.as_secs_f32(),
            schedule.continuous_loop().from_x - schedule.continuous_loop().to_x,
        );
    }

    panel.stop();
    dump(&panel);
}
