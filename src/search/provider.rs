use log::warn;

use crate::error::SearchError;
use crate::track::{Track, format_duration};

/// One ranked hit as returned by a search backend.
#[derive(Debug, Clone)]
pub struct ProviderHit {
    pub title: String,
    pub author: String,
    pub duration: String,
    pub url: String,
    pub id: String,
}

/// A search backend.
///
/// The contract is small on purpose: given a response, the adapter maps it
/// deterministically into tracks, preserving the provider's ranking order.
/// Result quality and content are entirely the provider's business.
pub trait SearchProvider: Send {
    fn name(&self) -> &str;

    /// Run the query against the backend. The caller has already rejected
    /// empty queries.
    fn query(&self, text: &str) -> Result<Vec<ProviderHit>, SearchError>;
}

/// Map provider hits into track records, preserving ranking order.
pub fn tracks_from_hits(hits: Vec<ProviderHit>) -> Vec<Track> {
    hits.into_iter()
        .map(|hit| Track {
            title: hit.title,
            author: hit.author,
            duration: hit.duration,
            url: hit.url,
            video_id: hit.id,
        })
        .collect()
}

/// Resolve a provider by its settings identifier.
///
/// Unknown identifiers fall back to the placeholder so a stale settings
/// file cannot break search.
pub fn provider_for(name: &str) -> Box<dyn SearchProvider> {
    match name {
        "placeholder" => Box::new(PlaceholderProvider),
        other => {
            warn!("unknown search provider {other:?}, using placeholder");
            Box::new(PlaceholderProvider)
        }
    }
}

const PLACEHOLDER_RESULTS: usize = 10;

/// Synthesizes a deterministic ranked result batch from the query text.
///
/// This reproduces the behavior of the reviewed application, which had no
/// real search backend. A real provider plugs in through
/// [`SearchProvider`] without touching the rest of the system.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderProvider;

impl SearchProvider for PlaceholderProvider {
    fn name(&self) -> &str {
        "placeholder"
    }

    fn query(&self, text: &str) -> Result<Vec<ProviderHit>, SearchError> {
        let slug = slugify(text);
        let hits = (1..=PLACEHOLDER_RESULTS)
            .map(|rank| ProviderHit {
                title: format!("{text} #{rank}"),
                author: format!("Artist {rank}"),
                duration: format_duration(120 + 30 * rank as u64),
                url: format!("https://music.example/tracks/{slug}-{rank}"),
                id: format!("{slug}-{rank:04}"),
            })
            .collect();
        Ok(hits)
    }
}

fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}
