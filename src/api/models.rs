use serde::{Deserialize, Deserializer, Serialize};

/// The full set of albums, in the order the catalog document lists them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Catalog {
    pub albums: Vec<Album>,
}

impl Catalog {
    pub fn new(albums: Vec<Album>) -> Self {
        Self { albums }
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn album(&self, index: usize) -> Option<&Album> {
        self.albums.get(index)
    }

    pub fn track(&self, album: usize, track: usize) -> Option<&Track> {
        self.album(album)?.tracks.get(track)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Album {
    pub title: String,
    #[serde(default, deserialize_with = "year_as_string")]
    pub year: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub art: Option<String>,
    #[serde(default, deserialize_with = "tracks_or_empty")]
    pub tracks: Vec<Track>,
}

impl Album {
    /// "2019 · 8 tracks", with either half dropped when it has nothing to say.
    pub fn meta_line(&self) -> String {
        let year = self.year.as_deref().filter(|y| !y.is_empty());
        let tracks = if self.tracks.is_empty() {
            None
        } else {
            Some(format!("{} tracks", self.tracks.len()))
        };
        match (year, tracks) {
            (Some(year), Some(tracks)) => format!("{year} · {tracks}"),
            (Some(year), None) => year.to_string(),
            (None, Some(tracks)) => tracks,
            (None, None) => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Track {
    pub title: String,
    /// Display-only; the media element reports the real length.
    #[serde(default)]
    pub duration: Option<String>,
    pub src: String,
}

// Hand-edited catalogs write `"year": 2021` as often as `"year": "2021"`.
fn year_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Year>::deserialize(deserializer)?.map(|year| match year {
        Year::Text(text) => text,
        Year::Number(number) => number.to_string(),
    }))
}

/// An album announced ahead of release may carry `"tracks": null`.
fn tracks_or_empty<'de, D>(deserializer: D) -> Result<Vec<Track>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Track>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Formats seconds as `m:ss`. Anything that is not a finite positive number
/// renders as `0:00`.
pub fn format_clock(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let whole = seconds.floor() as u64;
    let mins = whole / 60;
    let secs = whole % 60;
    format!("{}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_clock_matches_player_labels() {
        assert_eq!(format_clock(0.0), "0:00");
        assert_eq!(format_clock(65.0), "1:05");
        assert_eq!(format_clock(59.99), "0:59");
        assert_eq!(format_clock(3600.0), "60:00");
        assert_eq!(format_clock(f64::NAN), "0:00");
        assert_eq!(format_clock(f64::INFINITY), "0:00");
        assert_eq!(format_clock(-4.0), "0:00");
    }

    #[test]
    fn album_deserializes_with_optional_fields_missing() {
        let album: Album = serde_json::from_str(r#"{ "title": "Blue" }"#).unwrap();
        assert_eq!(album.title, "Blue");
        assert!(album.year.is_none());
        assert!(album.art.is_none());
        assert!(album.tracks.is_empty());
    }

    #[test]
    fn numeric_year_is_kept_as_display_string() {
        let album: Album = serde_json::from_str(r#"{ "title": "Blue", "year": 2021 }"#).unwrap();
        assert_eq!(album.year.as_deref(), Some("2021"));
    }

    #[test]
    fn meta_line_omits_missing_parts() {
        let track = Track {
            title: "One".to_string(),
            duration: None,
            src: "one.mp3".to_string(),
        };
        let mut album = Album {
            title: "Blue".to_string(),
            year: Some("2020".to_string()),
            tracks: vec![track.clone(), track],
            ..Default::default()
        };
        assert_eq!(album.meta_line(), "2020 · 2 tracks");

        album.year = None;
        assert_eq!(album.meta_line(), "2 tracks");

        album.year = Some("2020".to_string());
        album.tracks.clear();
        assert_eq!(album.meta_line(), "2020");

        album.year = None;
        assert_eq!(album.meta_line(), "");
    }

    #[test]
    fn catalog_lookup_is_bounds_checked() {
        let catalog = Catalog::new(vec![Album {
            title: "Blue".to_string(),
            tracks: vec![Track {
                title: "One".to_string(),
                duration: Some("3:10".to_string()),
                src: "one.mp3".to_string(),
            }],
            ..Default::default()
        }]);
        assert!(catalog.track(0, 0).is_some());
        assert!(catalog.track(0, 1).is_none());
        assert!(catalog.track(1, 0).is_none());
    }
}
