//! Playback state machine for the player panel.

/// Lifecycle of the player page, from first open through playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    /// Nothing loaded yet; only picking a song makes sense.
    JustOpened,
    /// A song file was picked and can be handed off to the performers.
    FileOpened,
    /// The song was handed off and playback can start.
    FileUploaded,
    /// Playback in progress.
    Playing,
    /// Playback stopped; waiting for the next action.
    Waiting,
}

impl PlayerState {
    /// Which controls are clickable in this state.
    pub fn controls(&self) -> ControlSet {
        match self {
            PlayerState::JustOpened => ControlSet {
                load_song: true,
                send_song: false,
                play: false,
                stop: false,
            },
            PlayerState::FileOpened => ControlSet {
                load_song: true,
                send_song: true,
                play: false,
                stop: false,
            },
            PlayerState::FileUploaded => ControlSet {
                load_song: true,
                send_song: false,
                play: true,
                stop: false,
            },
            PlayerState::Playing => ControlSet {
                load_song: false,
                send_song: false,
                play: false,
                stop: true,
            },
            PlayerState::Waiting => ControlSet {
                load_song: true,
                send_song: false,
                play: false,
                stop: false,
            },
        }
    }

    /// Status label text shown for this state.
    pub fn status_text(&self) -> &'static str {
        match self {
            PlayerState::JustOpened => "Kupo!",
            PlayerState::FileOpened => "Loaded",
            PlayerState::FileUploaded => "Ready",
            PlayerState::Playing => "Playing",
            PlayerState::Waiting => "Waiting",
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        PlayerState::JustOpened
    }
}

/// Enabled flags for the four panel buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSet {
    pub load_song: bool,
    pub send_song: bool,
    pub play: bool,
    pub stop: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_state_enables_the_right_controls() {
        assert_eq!(
            PlayerState::JustOpened.controls(),
            ControlSet {
                load_song: true,
                send_song: false,
                play: false,
                stop: false,
            }
        );
        assert_eq!(
            PlayerState::FileOpened.controls(),
            ControlSet {
                load_song: true,
                send_song: true,
                play: false,
                stop: false,
            }
        );
        assert_eq!(
            PlayerState::FileUploaded.controls(),
            ControlSet {
                load_song: true,
                send_song: false,
                play: true,
                stop: false,
            }
        );
        assert_eq!(
            PlayerState::Playing.controls(),
            ControlSet {
                load_song: false,
                send_song: false,
                play: false,
                stop: true,
            }
        );
        assert_eq!(
            PlayerState::Waiting.controls(),
            ControlSet {
                load_song: true,
                send_song: false,
                play: false,
                stop: false,
            }
        );
    }

    #[test]
    fn status_text_follows_the_state() {
        assert_eq!(PlayerState::JustOpened.status_text(), "Kupo!");
        assert_eq!(PlayerState::FileOpened.status_text(), "Loaded");
        assert_eq!(PlayerState::FileUploaded.status_text(), "Ready");
        assert_eq!(PlayerState::Playing.status_text(), "Playing");
        assert_eq!(PlayerState::Waiting.status_text(), "Waiting");
    }
}
