//! Catalog data: songs, albums and the artist they belong to.
//!
//! The catalog is fixed sample data built once in `main` and injected into
//! the model. Nothing else in the crate constructs songs or albums, so
//! swapping this for a real library source only touches the constructor.

/// A single playable track in the catalog
#[derive(Clone, Debug, PartialEq)]
pub struct Song {
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub artwork: String,
    pub duration_secs: f32,
}

/// An album shown in the browse grid
#[derive(Clone, Debug, PartialEq)]
pub struct Album {
    pub id: u32,
    pub title: String,
    pub artwork: String,
    pub year: String,
}

/// The fixed set of songs and albums available to the screen
#[derive(Clone, Debug)]
pub struct Catalog {
    pub artist: String,
    pub albums: Vec<Album>,
    pub songs: Vec<Song>,
}

impl Catalog {
    /// The song loaded into the player at startup
    pub fn initial_song(&self) -> &Song {
        &self.songs[0]
    }

    /// Built-in sample data for the mock screen
    pub fn sample() -> Self {
        let artist = "John Seong";

        let song = |id: u32, title: &str, artwork: &str, duration_secs: f32| Song {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            artwork: artwork.to_string(),
            duration_secs,
        };

        let album = |id: u32, title: &str, artwork: &str, year: &str| Album {
            id,
            title: title.to_string(),
            artwork: artwork.to_string(),
            year: year.to_string(),
        };

        Self {
            artist: artist.to_string(),
            albums: vec![
                album(1, "Midnight Arcade", "art/midnight-arcade", "2019"),
                album(2, "Paper Planets", "art/paper-planets", "2020"),
                album(3, "Low Tide", "art/low-tide", "2021"),
                album(4, "Glass Orchard", "art/glass-orchard", "2022"),
                album(5, "Signal Fires", "art/signal-fires", "2023"),
                album(6, "Afterglow", "art/afterglow", "2025"),
            ],
            songs: vec![
                song(1, "Neon Rain", "art/midnight-arcade", 214.0),
                song(2, "Slow Orbit", "art/paper-planets", 185.0),
                song(3, "Undertow", "art/low-tide", 243.0),
                song(4, "Porcelain Sky", "art/glass-orchard", 198.0),
                song(5, "Ember Lines", "art/signal-fires", 226.0),
                song(6, "Last Transmission", "art/signal-fires", 251.0),
                song(7, "Violet Hour", "art/afterglow", 232.0),
                song(8, "Northern Drift", "art/afterglow", 207.0),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_is_usable() {
        let catalog = Catalog::sample();
        assert!(!catalog.albums.is_empty());
        assert!(!catalog.songs.is_empty());
        assert_eq!(catalog.initial_song().id, catalog.songs[0].id);
    }

    #[test]
    fn sample_song_ids_are_unique() {
        let catalog = Catalog::sample();
        let mut ids: Vec<u32> = catalog.songs.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.songs.len());
    }

    #[test]
    fn sample_durations_are_positive() {
        let catalog = Catalog::sample();
        assert!(catalog.songs.iter().all(|s| s.duration_secs > 0.0));
    }
}
