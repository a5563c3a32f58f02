//! Pure render inputs for the views. Every function here depends only on
//! its arguments, so rendering the same state twice gives the same markup.

use crate::api::{Album, Catalog, CatalogStatus};
use crate::components::PlaybackState;

#[derive(Debug, Clone, PartialEq)]
pub struct AlbumCardModel {
    pub index: usize,
    pub title: String,
    pub art: Option<String>,
    pub meta: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridModel {
    /// The catalog fetch has not settled yet.
    Pending,
    Fallback(String),
    Cards(Vec<AlbumCardModel>),
}

pub fn grid_model(status: &CatalogStatus, fallback: &str) -> GridModel {
    if status.is_loading() {
        return GridModel::Pending;
    }
    let catalog = status.catalog();
    if catalog.is_empty() {
        return GridModel::Fallback(fallback.to_string());
    }
    GridModel::Cards(
        catalog
            .albums
            .iter()
            .enumerate()
            .map(|(index, album)| AlbumCardModel {
                index,
                title: album.title.clone(),
                art: album.art.clone(),
                meta: album.meta_line(),
            })
            .collect(),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlbumHeaderModel {
    pub title: String,
    pub art: Option<String>,
    pub year: String,
    pub description: String,
}

pub fn album_header(album: &Album) -> AlbumHeaderModel {
    AlbumHeaderModel {
        title: album.title.clone(),
        art: album.art.clone(),
        year: album.year.clone().unwrap_or_default(),
        description: album.description.clone().unwrap_or_default(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackRowModel {
    pub index: usize,
    /// 1-based, as shown.
    pub number: usize,
    pub title: String,
    pub duration: String,
    pub playing: bool,
}

/// Rows for the album at `album_index`. A row is highlighted only when that
/// album is the one loaded into the player.
pub fn track_rows(
    catalog: &Catalog,
    album_index: usize,
    playback: &PlaybackState,
) -> Vec<TrackRowModel> {
    let Some(album) = catalog.album(album_index) else {
        return Vec::new();
    };
    album
        .tracks
        .iter()
        .enumerate()
        .map(|(index, track)| TrackRowModel {
            index,
            number: index + 1,
            title: track.title.clone(),
            duration: track.duration.clone().unwrap_or_default(),
            playing: playback.has_source() && playback.is_current(album_index, index),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerBarModel {
    /// The bar stays hidden until something has been played.
    pub visible: bool,
    pub title: String,
    pub album: String,
    pub art: Option<String>,
    pub toggle_glyph: &'static str,
    pub can_toggle: bool,
    pub has_previous: bool,
    pub has_next: bool,
    pub elapsed: String,
    pub duration: String,
    pub seek_percent: f64,
    pub volume_percent: f64,
    pub error: Option<String>,
}

pub fn player_bar(catalog: &Catalog, playback: &PlaybackState) -> PlayerBarModel {
    let album = playback.album.and_then(|index| catalog.album(index));
    let track = match (playback.album, playback.track) {
        (Some(album), Some(track)) => catalog.track(album, track),
        _ => None,
    };

    PlayerBarModel {
        visible: playback.has_source() && track.is_some(),
        title: track.map(|t| t.title.clone()).unwrap_or_default(),
        album: album.map(|a| a.title.clone()).unwrap_or_default(),
        art: album.and_then(|a| a.art.clone()),
        toggle_glyph: playback.toggle_glyph(),
        can_toggle: playback.error.is_none() && playback.has_source(),
        has_previous: playback.has_previous(),
        has_next: playback.has_next(catalog),
        elapsed: playback.elapsed_label(),
        duration: playback.duration_label(),
        seek_percent: playback.seek_percent(),
        volume_percent: (playback.volume * 100.0).round(),
        error: playback.error.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Track;
    use crate::components::{MediaEvent, PlayerCommand};

    fn album(title: &str, tracks: usize) -> Album {
        Album {
            title: title.to_string(),
            year: Some("2024".to_string()),
            description: None,
            art: Some(format!("art/{title}.jpg")),
            tracks: (0..tracks)
                .map(|i| Track {
                    title: format!("{title} {i}"),
                    duration: (i % 2 == 0).then(|| "3:00".to_string()),
                    src: format!("audio/{title}-{i}.mp3"),
                })
                .collect(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![album("blue", 3), album("green", 2)])
    }

    #[test]
    fn grid_is_empty_while_loading() {
        assert_eq!(grid_model(&CatalogStatus::Loading, "soon"), GridModel::Pending);
    }

    #[test]
    fn failed_or_empty_catalog_shows_fallback() {
        assert_eq!(
            grid_model(&CatalogStatus::Unavailable, "Music coming soon."),
            GridModel::Fallback("Music coming soon.".to_string())
        );
        let empty = CatalogStatus::Ready(Catalog::default());
        assert!(matches!(grid_model(&empty, "soon"), GridModel::Fallback(_)));
    }

    #[test]
    fn grid_has_one_card_per_album() {
        let model = grid_model(&CatalogStatus::Ready(catalog()), "soon");
        let GridModel::Cards(cards) = model else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "blue");
        assert_eq!(cards[0].meta, "2024 · 3 tracks");
        assert_eq!(cards[1].index, 1);
    }

    #[test]
    fn header_blanks_missing_fields() {
        let header = album_header(&Album {
            title: "Bare".to_string(),
            ..Default::default()
        });
        assert_eq!(header.year, "");
        assert_eq!(header.description, "");
        assert!(header.art.is_none());
    }

    #[test]
    fn rows_number_from_one_and_show_display_duration() {
        let rows = track_rows(&catalog(), 0, &PlaybackState::default());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[0].duration, "3:00");
        assert_eq!(rows[1].duration, "");
        assert!(rows.iter().all(|row| !row.playing));
    }

    #[test]
    fn only_the_playing_album_highlights() {
        let catalog = catalog();
        let mut playback = PlaybackState::default();
        playback.apply(&catalog, PlayerCommand::PlayTrack { album: 1, track: 1 });

        let playing: Vec<bool> = track_rows(&catalog, 1, &playback)
            .iter()
            .map(|row| row.playing)
            .collect();
        assert_eq!(playing, vec![false, true]);

        // Same index in another album stays plain.
        assert!(track_rows(&catalog, 0, &playback)
            .iter()
            .all(|row| !row.playing));
    }

    #[test]
    fn player_bar_hidden_until_first_track() {
        let catalog = catalog();
        let mut playback = PlaybackState::default();
        let bar = player_bar(&catalog, &playback);
        assert!(!bar.visible);
        assert_eq!(bar.volume_percent, 80.0);

        playback.apply(&catalog, PlayerCommand::PlayTrack { album: 0, track: 0 });
        let bar = player_bar(&catalog, &playback);
        assert!(bar.visible);
        assert_eq!(bar.title, "blue 0");
        assert_eq!(bar.album, "blue");
        assert_eq!(bar.art.as_deref(), Some("art/blue.jpg"));
        assert!(bar.can_toggle);
        assert!(!bar.has_previous);
        assert!(bar.has_next);
        assert_eq!(bar.elapsed, "0:00");
    }

    #[test]
    fn player_bar_reports_unavailable_track() {
        let catalog = catalog();
        let mut playback = PlaybackState::default();
        playback.apply(&catalog, PlayerCommand::PlayTrack { album: 0, track: 2 });
        playback.on_media_event(&catalog, playback.source_id(), MediaEvent::Error("Track unavailable".to_string()));

        let bar = player_bar(&catalog, &playback);
        assert!(bar.visible);
        assert!(!bar.can_toggle);
        assert_eq!(bar.error.as_deref(), Some("Track unavailable"));
        assert!(!bar.has_next);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arbitrary_album() -> impl Strategy<Value = Album> {
        (
            "[A-Za-z0-9 ]{1,24}",
            proptest::option::of("[0-9]{4}"),
            0usize..6,
        )
            .prop_map(|(title, year, tracks)| Album {
                title,
                year,
                tracks: (0..tracks)
                    .map(|i| crate::api::Track {
                        title: format!("track {i}"),
                        duration: None,
                        src: format!("{i}.mp3"),
                    })
                    .collect(),
                ..Default::default()
            })
    }

    proptest! {
        /// Every album gets exactly one card carrying its title
        #[test]
        fn one_card_per_album(albums in prop::collection::vec(arbitrary_album(), 1..12)) {
            let status = CatalogStatus::Ready(Catalog::new(albums.clone()));
            let GridModel::Cards(cards) = grid_model(&status, "soon") else {
                return Err(TestCaseError::fail("expected cards"));
            };
            prop_assert_eq!(cards.len(), albums.len());
            for (card, album) in cards.iter().zip(&albums) {
                prop_assert_eq!(&card.title, &album.title);
            }
        }

        /// Rendering the same inputs twice gives the same models
        #[test]
        fn rendering_is_idempotent(
            albums in prop::collection::vec(arbitrary_album(), 0..8),
            album_index in 0usize..8,
            track_index in 0usize..6,
        ) {
            let catalog = Catalog::new(albums);
            let mut playback = PlaybackState::default();
            playback.apply(&catalog, crate::components::PlayerCommand::PlayTrack {
                album: album_index,
                track: track_index,
            });
            let status = CatalogStatus::Ready(catalog.clone());

            prop_assert_eq!(grid_model(&status, "soon"), grid_model(&status, "soon"));
            prop_assert_eq!(
                track_rows(&catalog, album_index, &playback),
                track_rows(&catalog, album_index, &playback)
            );
            prop_assert_eq!(player_bar(&catalog, &playback), player_bar(&catalog, &playback));
        }

        /// At most one row is highlighted, and only in the playing album
        #[test]
        fn highlight_stays_with_playing_album(
            albums in prop::collection::vec(arbitrary_album(), 1..6),
            playing_album in 0usize..6,
            playing_track in 0usize..6,
            viewed_album in 0usize..6,
        ) {
            let catalog = Catalog::new(albums);
            let mut playback = PlaybackState::default();
            playback.apply(&catalog, crate::components::PlayerCommand::PlayTrack {
                album: playing_album,
                track: playing_track,
            });

            let rows = track_rows(&catalog, viewed_album, &playback);
            let highlighted = rows.iter().filter(|row| row.playing).count();
            prop_assert!(highlighted <= 1);
            if viewed_album != playing_album {
                prop_assert_eq!(highlighted, 0);
            }
        }
    }
}
