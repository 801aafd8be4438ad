use std::fs;
use std::path::Path;

use crate::error::PersistenceError;
use crate::track::Track;

use super::store::Playlist;

impl Playlist {
    /// Write the full ordered track sequence to `path` as pretty-printed
    /// JSON. Track field names serialize verbatim.
    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        let body = serde_json::to_string_pretty(self.tracks())?;
        fs::write(path, body)?;
        Ok(())
    }

    /// Replace the playlist with the contents of `path`, resetting the
    /// cursor to 0.
    ///
    /// The file is parsed in full before anything is touched, so a
    /// missing, unreadable or malformed file leaves the playlist unchanged.
    pub fn load(&mut self, path: &Path) -> Result<(), PersistenceError> {
        let data = fs::read_to_string(path)?;
        let tracks: Vec<Track> = serde_json::from_str(&data)?;
        self.replace(tracks);
        Ok(())
    }
}
