// Public playback API consumed by UI components.
use super::{MediaCommand, MediaEvent, PlaybackState, PlayerCommand};
use crate::api::CatalogStatus;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use super::web_helpers::{get_or_create_audio_element, web_try_play};

/// Single writer of the playback state. Components issue commands through
/// this handle; the resulting media commands go straight to the audio
/// element.
#[derive(Clone, PartialEq)]
pub struct PlaybackController {
    state: Signal<PlaybackState>,
    catalog: Signal<CatalogStatus>,
    element_id: String,
}

impl PlaybackController {
    pub fn new(
        state: Signal<PlaybackState>,
        catalog: Signal<CatalogStatus>,
        element_id: String,
    ) -> Self {
        Self {
            state,
            catalog,
            element_id,
        }
    }

    pub fn state(&self) -> Signal<PlaybackState> {
        self.state
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn source_id(&self) -> u64 {
        self.state.peek().source_id()
    }

    pub fn dispatch(&self, command: PlayerCommand) {
        let catalog = self.catalog.peek();
        let mut state = self.state;
        let commands = state.write().apply(catalog.catalog(), command);
        drop(catalog);
        self.execute(commands);
    }

    /// `source` is the `source_id` current when the element raised `event`.
    pub fn handle_media_event(&self, source: u64, event: MediaEvent) {
        let catalog = self.catalog.peek();
        let mut state = self.state;
        let commands = state.write().on_media_event(catalog.catalog(), source, event);
        drop(catalog);
        self.execute(commands);
    }

    pub fn play_track(&self, album: usize, track: usize) {
        self.dispatch(PlayerCommand::PlayTrack { album, track });
    }

    pub fn toggle(&self) {
        self.dispatch(PlayerCommand::Toggle);
    }

    pub fn next(&self) {
        self.dispatch(PlayerCommand::Next);
    }

    pub fn previous(&self) {
        self.dispatch(PlayerCommand::Previous);
    }

    /// `percent` is the seek slider value, 0 - 100.
    pub fn seek_percent(&self, percent: f64) {
        self.dispatch(PlayerCommand::Seek(percent / 100.0));
    }

    /// `level` is the volume slider value, 0 - 100.
    pub fn set_volume(&self, level: f64) {
        self.dispatch(PlayerCommand::SetVolume(level));
    }

    #[cfg(target_arch = "wasm32")]
    fn execute(&self, commands: Vec<MediaCommand>) {
        if commands.is_empty() {
            return;
        }
        let Some(audio) = get_or_create_audio_element(&self.element_id) else {
            tracing::warn!("Audio element is not available; dropping {commands:?}");
            return;
        };
        for command in commands {
            match command {
                MediaCommand::Load(src) => audio.set_src(&src),
                MediaCommand::Play => web_try_play(&audio, self.clone()),
                MediaCommand::Pause => {
                    let _ = audio.pause();
                }
                MediaCommand::SeekTo(position) => audio.set_current_time(position),
                MediaCommand::SetVolume(volume) => audio.set_volume(volume),
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn execute(&self, commands: Vec<MediaCommand>) {
        if !commands.is_empty() {
            tracing::debug!("No media element on this target; skipping {commands:?}");
        }
    }
}
