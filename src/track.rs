use serde::{Deserialize, Serialize};

/// Simulated track length used when the duration label cannot be parsed.
pub const DEFAULT_TRACK_SECS: u64 = 180;

/// Metadata for one playable item, as delivered by a search provider.
///
/// Field names are the on-disk names: playlists serialize these records
/// verbatim, so renaming a field changes the persisted format.
///
/// `video_id` identifies the track within one search result batch; it is
/// not globally unique and not stable across searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub author: String,
    /// Display label such as `"3:45"`. Never validated.
    pub duration: String,
    pub url: String,
    pub video_id: String,
}

impl Track {
    /// Build a display string, preferring `"Author - Title"`.
    pub fn display(&self) -> String {
        let author = self.author.trim();
        if author.is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", author, self.title)
        }
    }

    /// Length in whole seconds used by the simulated progress counter.
    ///
    /// Falls back to [`DEFAULT_TRACK_SECS`] when the duration label is not
    /// parseable. Never returns 0 so a tick always makes progress.
    pub fn simulated_length(&self) -> u64 {
        parse_duration_label(&self.duration)
            .unwrap_or(DEFAULT_TRACK_SECS)
            .max(1)
    }
}

/// Format whole seconds as a `m:ss` label (hours roll into minutes).
pub fn format_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Parse a `m:ss` or `h:mm:ss` label back into whole seconds.
///
/// A bare number is taken as seconds. Returns `None` for anything else;
/// duration labels are free text and callers must tolerate that.
pub fn parse_duration_label(label: &str) -> Option<u64> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }

    let mut total: u64 = 0;
    let parts: Vec<&str> = label.split(':').collect();
    if parts.len() > 3 {
        return None;
    }

    for part in parts {
        let value: u64 = part.trim().parse().ok()?;
        total = total * 60 + value;
    }

    Some(total)
}
