//! The player page's control panel.

use std::path::Path;
use std::time::Duration;

use aria_gui::{Extent, MarqueeLabel, TextMeasurer};

use crate::state::{ControlSet, PlayerState};

/// Control panel for the player page.
///
/// Owns the playback state machine and the two text labels it feeds: the
/// song name, which may overflow its width and scroll, and the song time,
/// which is sized to fit and never scrolls. Button events whose control is
/// disabled in the current state are ignored, mirroring buttons that cannot
/// be clicked.
#[derive(Clone, Debug)]
pub struct PlayerPanel {
    state: PlayerState,
    song_duration: Duration,
    pub song_name: MarqueeLabel,
    pub song_time: MarqueeLabel,
}

impl PlayerPanel {
    pub fn new() -> Self {
        let mut panel = Self {
            state: PlayerState::JustOpened,
            song_duration: Duration::ZERO,
            song_name: MarqueeLabel::new().with_ignore_parent_width(true),
            song_time: MarqueeLabel::new().with_ignore_parent_width(false),
        };
        panel.reset();
        panel
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn controls(&self) -> ControlSet {
        self.state.controls()
    }

    pub fn status_text(&self) -> &'static str {
        self.state.status_text()
    }

    /// Return to the just-opened state: no song, zeroed time display.
    pub fn reset(&mut self) {
        self.song_name.set_text("");
        self.song_duration = Duration::ZERO;
        self.song_time
            .set_text(format_time_range(Duration::ZERO, Duration::ZERO));
        self.enter(PlayerState::JustOpened);
    }

    /// Outcome of the host's file dialog: a song was picked.
    ///
    /// The song name label shows the file stem; the time label restarts at
    /// zero over the song's duration. Ignored while loading is disabled.
    pub fn open_song(&mut self, path: &Path, duration: Duration) {
        if !self.controls().load_song {
            log::debug!("ignoring open_song, loading is disabled in {:?}", self.state);
            return;
        }

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.song_name.set_text(name);
        self.song_duration = duration;
        self.song_time
            .set_text(format_time_range(Duration::ZERO, duration));
        self.enter(PlayerState::FileOpened);
    }

    /// Hand the opened song off to the performers.
    pub fn send_song(&mut self) {
        if !self.controls().send_song {
            log::debug!("ignoring send_song, sending is disabled in {:?}", self.state);
            return;
        }
        self.enter(PlayerState::FileUploaded);
    }

    /// Start playback.
    pub fn play(&mut self) {
        if !self.controls().play {
            log::debug!("ignoring play, playback is disabled in {:?}", self.state);
            return;
        }
        self.enter(PlayerState::Playing);
    }

    /// Stop playback.
    pub fn stop(&mut self) {
        if !self.controls().stop {
            log::debug!("ignoring stop, stopping is disabled in {:?}", self.state);
            return;
        }
        self.enter(PlayerState::Waiting);
    }

    /// Playback progress report from the host's audio collaborator; rewrites
    /// the time label.
    pub fn set_progress(&mut self, position: Duration) {
        self.song_time
            .set_text(format_time_range(position, self.song_duration));
    }

    /// Forward host-queried label bounds and the scroll container width to
    /// both labels.
    pub fn refit_labels(
        &mut self,
        song_name_bounds: Extent,
        song_time_bounds: Extent,
        container_width: f32,
        measurer: &mut dyn TextMeasurer,
    ) {
        self.song_name
            .refit(song_name_bounds, container_width, measurer);
        self.song_time
            .refit(song_time_bounds, container_width, measurer);
    }

    fn enter(&mut self, state: PlayerState) {
        log::debug!("player panel: {:?} -> {:?}", self.state, state);
        self.state = state;
    }
}

impl Default for PlayerPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// "MM:SS" display for one playback timestamp.
pub fn format_time(value: Duration) -> String {
    let total = value.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// "MM:SS / MM:SS" display for a position within a song.
pub fn format_time_range(position: Duration, duration: Duration) -> String {
    format!("{} / {}", format_time(position), format_time(duration))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aria_gui::MonospaceMeasurer;

    #[test]
    fn starts_just_opened_with_zeroed_labels() {
        let panel = PlayerPanel::new();

        assert_eq!(panel.state(), PlayerState::JustOpened);
        assert_eq!(panel.status_text(), "Kupo!");
        assert_eq!(panel.song_name.text(), "");
        assert_eq!(panel.song_time.text(), "00:00 / 00:00");
    }

    #[test]
    fn walks_the_full_session() {
        let mut panel = PlayerPanel::new();

        panel.open_song(Path::new("songs/maiden-of-the-moon.mid"), Duration::from_secs(83));
        assert_eq!(panel.state(), PlayerState::FileOpened);
        assert_eq!(panel.song_name.text(), "maiden-of-the-moon");
        assert_eq!(panel.song_time.text(), "00:00 / 01:23");

        panel.send_song();
        assert_eq!(panel.state(), PlayerState::FileUploaded);
        assert_eq!(panel.status_text(), "Ready");

        panel.play();
        assert_eq!(panel.state(), PlayerState::Playing);

        panel.set_progress(Duration::from_secs(45));
        assert_eq!(panel.song_time.text(), "00:45 / 01:23");

        panel.stop();
        assert_eq!(panel.state(), PlayerState::Waiting);
        assert_eq!(panel.status_text(), "Waiting");
    }

    #[test]
    fn disabled_controls_ignore_their_events() {
        let mut panel = PlayerPanel::new();

        // Nothing is loaded, so everything but loading is inert.
        panel.send_song();
        panel.play();
        panel.stop();
        assert_eq!(panel.state(), PlayerState::JustOpened);

        panel.open_song(Path::new("a.mid"), Duration::from_secs(10));
        panel.send_song();
        panel.play();

        // While playing, only stop works.
        panel.open_song(Path::new("b.mid"), Duration::from_secs(10));
        panel.send_song();
        panel.play();
        assert_eq!(panel.state(), PlayerState::Playing);
        assert_eq!(panel.song_name.text(), "a");
    }

    #[test]
    fn song_name_scrolls_and_song_time_does_not() {
        let mut measurer = MonospaceMeasurer::new();
        let mut panel = PlayerPanel::new();

        assert!(panel.song_name.ignore_parent_width());
        assert!(!panel.song_time.ignore_parent_width());

        panel.open_song(
            Path::new("songs/a-ballad-much-too-long-for-its-label.mid"),
            Duration::from_secs(83),
        );
        panel.refit_labels(
            Extent::new(240.0, 32.0),
            Extent::new(120.0, 24.0),
            240.0,
            &mut measurer,
        );

        assert!(panel.song_name.schedule().is_some());
        assert!(panel.song_time.schedule().is_none());
        assert!(panel.song_time.fit_result().is_some());
    }

    #[test]
    fn reopening_replaces_the_song() {
        let mut panel = PlayerPanel::new();

        panel.open_song(Path::new("first.mid"), Duration::from_secs(60));
        panel.open_song(Path::new("second.mid"), Duration::from_secs(90));

        assert_eq!(panel.state(), PlayerState::FileOpened);
        assert_eq!(panel.song_name.text(), "second");
        assert_eq!(panel.song_time.text(), "00:00 / 01:30");
    }

    #[test]
    fn time_display_is_minutes_and_seconds() {
        assert_eq!(format_time(Duration::ZERO), "00:00");
        assert_eq!(format_time(Duration::from_secs(83)), "01:23");
        assert_eq!(format_time(Duration::from_secs(600)), "10:00");
        assert_eq!(
            format_time_range(Duration::from_secs(45), Duration::from_secs(83)),
            "00:45 / 01:23"
        );
    }
}
