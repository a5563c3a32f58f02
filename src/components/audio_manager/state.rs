//! Playback state machine. Pure: every transition returns the media commands
//! the audio element has to execute, and nothing here touches the element.

use crate::api::{format_clock, Catalog};
use crate::config::DEFAULT_VOLUME;

pub const PLAY_GLYPH: &str = "▶";
pub const PAUSE_GLYPH: &str = "⏸";
pub const UNAVAILABLE_MESSAGE: &str = "Track unavailable";

/// Where the transport is. Every state except `Idle` has a source loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    #[default]
    Idle,
    /// Source set but not running, e.g. the host refused to start playback.
    Loaded,
    Playing,
    Paused,
    /// The last track of the album ran out. The source stays loaded.
    Ended,
    /// The element reported an error for the current source.
    Unavailable,
}

impl Transport {
    pub fn has_source(self) -> bool {
        !matches!(self, Transport::Idle)
    }
}

/// User-issued transport commands.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    PlayTrack { album: usize, track: usize },
    Toggle,
    Next,
    Previous,
    /// Fraction of the track, 0.0 - 1.0.
    Seek(f64),
    /// Slider units, 0 - 100.
    SetVolume(f64),
}

/// Callbacks coming back from the media element.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    TimeUpdate(f64),
    LoadedMetadata(f64),
    Ended,
    PlayRejected,
    Error(String),
}

/// Instructions for the media element.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCommand {
    Load(String),
    Play,
    Pause,
    SeekTo(f64),
    SetVolume(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub album: Option<usize>,
    pub track: Option<usize>,
    pub transport: Transport,
    /// 0.0 - 1.0
    pub volume: f64,
    /// Seconds into the current track.
    pub position: f64,
    /// Only known once the element has loaded metadata.
    pub duration: Option<f64>,
    pub error: Option<String>,
    /// Bumped every time a new track is loaded. Media events carry the
    /// value current when they fired so late ones can be told apart.
    source: u64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(DEFAULT_VOLUME)
    }
}

impl PlaybackState {
    pub fn new(volume: f64) -> Self {
        Self {
            album: None,
            track: None,
            transport: Transport::Idle,
            volume: volume.clamp(0.0, 1.0),
            position: 0.0,
            duration: None,
            error: None,
            source: 0,
        }
    }

    /// Identifies the loaded source; changes on every track load.
    pub fn source_id(&self) -> u64 {
        self.source
    }

    pub fn is_playing(&self) -> bool {
        self.transport == Transport::Playing
    }

    pub fn has_source(&self) -> bool {
        self.transport.has_source()
    }

    /// True when `track` of `album` is the one loaded into the player.
    pub fn is_current(&self, album: usize, track: usize) -> bool {
        self.album == Some(album) && self.track == Some(track)
    }

    pub fn has_previous(&self) -> bool {
        matches!(self.track, Some(track) if track > 0)
    }

    pub fn has_next(&self, catalog: &Catalog) -> bool {
        match (self.album.and_then(|a| catalog.album(a)), self.track) {
            (Some(album), Some(track)) => track + 1 < album.tracks.len(),
            _ => false,
        }
    }

    pub fn toggle_glyph(&self) -> &'static str {
        if self.is_playing() {
            PAUSE_GLYPH
        } else {
            PLAY_GLYPH
        }
    }

    pub fn elapsed_label(&self) -> String {
        format_clock(self.position)
    }

    pub fn duration_label(&self) -> String {
        format_clock(self.duration.unwrap_or(0.0))
    }

    /// Seek slider value, 0 - 100.
    pub fn seek_percent(&self) -> f64 {
        match self.duration {
            Some(duration) => (self.position / duration * 100.0).clamp(0.0, 100.0),
            None => 0.0,
        }
    }

    /// Applies a user command and returns what the media element must do.
    pub fn apply(&mut self, catalog: &Catalog, command: PlayerCommand) -> Vec<MediaCommand> {
        match command {
            PlayerCommand::PlayTrack { album, track } => self.play_track(catalog, album, track),
            PlayerCommand::Toggle => self.toggle(),
            PlayerCommand::Next => self.next(catalog),
            PlayerCommand::Previous => self.previous(catalog),
            PlayerCommand::Seek(fraction) => self.seek(fraction),
            PlayerCommand::SetVolume(level) => self.set_volume(level),
        }
    }

    /// Folds a media element callback into the state. `source` is the
    /// `source_id` seen when the element fired; events for a source that has
    /// since been replaced are dropped.
    pub fn on_media_event(
        &mut self,
        catalog: &Catalog,
        source: u64,
        event: MediaEvent,
    ) -> Vec<MediaCommand> {
        if source != self.source {
            tracing::debug!("Dropping {event:?} from a replaced source");
            return Vec::new();
        }
        match event {
            MediaEvent::TimeUpdate(time) => {
                if time.is_finite() && time >= 0.0 {
                    self.position = time;
                }
                Vec::new()
            }
            MediaEvent::LoadedMetadata(duration) => {
                self.duration = (duration.is_finite() && duration > 0.0).then_some(duration);
                Vec::new()
            }
            MediaEvent::Ended => {
                if self.has_next(catalog) {
                    return self.next(catalog);
                }
                if self.has_source() {
                    self.transport = Transport::Ended;
                }
                Vec::new()
            }
            MediaEvent::PlayRejected => {
                if self.transport == Transport::Playing {
                    tracing::debug!("Playback was not allowed to start; waiting for the user");
                    self.transport = Transport::Loaded;
                }
                Vec::new()
            }
            MediaEvent::Error(message) => {
                if self.has_source() {
                    tracing::warn!("Playback failed: {message}");
                    self.transport = Transport::Unavailable;
                    self.error = Some(message);
                }
                Vec::new()
            }
        }
    }

    fn play_track(&mut self, catalog: &Catalog, album: usize, track: usize) -> Vec<MediaCommand> {
        let Some(entry) = catalog.track(album, track) else {
            tracing::debug!("Ignoring out-of-range track {track} of album {album}");
            return Vec::new();
        };

        self.album = Some(album);
        self.track = Some(track);
        self.transport = Transport::Playing;
        self.position = 0.0;
        self.duration = None;
        self.error = None;
        self.source = self.source.wrapping_add(1);

        vec![MediaCommand::Load(entry.src.clone()), MediaCommand::Play]
    }

    fn toggle(&mut self) -> Vec<MediaCommand> {
        match self.transport {
            Transport::Playing => {
                self.transport = Transport::Paused;
                vec![MediaCommand::Pause]
            }
            Transport::Loaded | Transport::Paused | Transport::Ended => {
                self.transport = Transport::Playing;
                vec![MediaCommand::Play]
            }
            Transport::Idle | Transport::Unavailable => Vec::new(),
        }
    }

    fn next(&mut self, catalog: &Catalog) -> Vec<MediaCommand> {
        match (self.album, self.track) {
            (Some(album), Some(track)) if self.has_next(catalog) => {
                self.play_track(catalog, album, track + 1)
            }
            _ => Vec::new(),
        }
    }

    fn previous(&mut self, catalog: &Catalog) -> Vec<MediaCommand> {
        match (self.album, self.track) {
            (Some(album), Some(track)) if track > 0 => self.play_track(catalog, album, track - 1),
            _ => Vec::new(),
        }
    }

    fn seek(&mut self, fraction: f64) -> Vec<MediaCommand> {
        let Some(duration) = self.duration else {
            return Vec::new();
        };
        if !fraction.is_finite() || self.transport == Transport::Unavailable {
            return Vec::new();
        }
        let position = fraction.clamp(0.0, 1.0) * duration;
        self.position = position;
        vec![MediaCommand::SeekTo(position)]
    }

    fn set_volume(&mut self, level: f64) -> Vec<MediaCommand> {
        if !level.is_finite() {
            return Vec::new();
        }
        self.volume = level.clamp(0.0, 100.0) / 100.0;
        vec![MediaCommand::SetVolume(self.volume)]
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::api::{Album, Track};
    use proptest::prelude::*;

    fn album_with(tracks: usize) -> Album {
        Album {
            title: "prop".to_string(),
            tracks: (0..tracks)
                .map(|i| Track {
                    title: format!("track {i}"),
                    duration: None,
                    src: format!("{i}.mp3"),
                })
                .collect(),
            ..Default::default()
        }
    }

    proptest! {
        /// previous() at the first track and next() at the last never move
        #[test]
        fn edges_do_not_wrap(len in 1usize..20) {
            let catalog = Catalog::new(vec![album_with(len)]);

            let mut state = PlaybackState::default();
            state.apply(&catalog, PlayerCommand::PlayTrack { album: 0, track: 0 });
            state.apply(&catalog, PlayerCommand::Previous);
            prop_assert_eq!(state.track, Some(0));

            let mut state = PlaybackState::default();
            state.apply(&catalog, PlayerCommand::PlayTrack { album: 0, track: len - 1 });
            state.apply(&catalog, PlayerCommand::Next);
            prop_assert_eq!(state.track, Some(len - 1));
        }

        /// Valid indices play, out-of-range ones leave the state untouched
        #[test]
        fn play_track_respects_bounds(len in 0usize..10, index in 0usize..20) {
            let catalog = Catalog::new(vec![album_with(len)]);
            let mut state = PlaybackState::default();
            let before = state.clone();
            state.apply(&catalog, PlayerCommand::PlayTrack { album: 0, track: index });

            if index < len {
                prop_assert_eq!(state.album, Some(0));
                prop_assert_eq!(state.track, Some(index));
                prop_assert!(state.is_playing());
            } else {
                prop_assert_eq!(state, before);
            }
        }

        /// Two toggles restore the play flag once a source is loaded
        #[test]
        fn toggle_is_an_involution(len in 1usize..10, pauses in 0usize..3) {
            let catalog = Catalog::new(vec![album_with(len)]);
            let mut state = PlaybackState::default();
            state.apply(&catalog, PlayerCommand::PlayTrack { album: 0, track: 0 });
            for _ in 0..pauses {
                state.apply(&catalog, PlayerCommand::Toggle);
            }
            let playing = state.is_playing();
            state.apply(&catalog, PlayerCommand::Toggle);
            state.apply(&catalog, PlayerCommand::Toggle);
            prop_assert_eq!(state.is_playing(), playing);
        }

        /// Seeking lands on fraction x duration
        #[test]
        fn seek_is_linear(fraction in 0.0f64..=1.0, duration in 0.1f64..10_000.0) {
            let catalog = Catalog::new(vec![album_with(1)]);
            let mut state = PlaybackState::default();
            state.apply(&catalog, PlayerCommand::PlayTrack { album: 0, track: 0 });
            state.on_media_event(&catalog, state.source_id(), MediaEvent::LoadedMetadata(duration));
            state.apply(&catalog, PlayerCommand::Seek(fraction));
            prop_assert!((state.position - fraction * duration).abs() < 1e-9);
        }

        /// Volume always stays inside 0.0 - 1.0
        #[test]
        fn volume_stays_in_range(level in -1_000.0f64..1_000.0) {
            let catalog = Catalog::default();
            let mut state = PlaybackState::default();
            state.apply(&catalog, PlayerCommand::SetVolume(level));
            prop_assert!((0.0..=1.0).contains(&state.volume));
        }
    }
}
