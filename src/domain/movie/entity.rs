use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a watch-list entry.
///
/// Fresh ids are random UUIDs. Restored ids are kept verbatim, so snapshots
/// written with timestamp ids still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    /// Generate a new collision-resistant id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for MovieId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for MovieId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single movie on the watch-list
///
/// `id` and `title` never change after creation; `watched` is the only
/// mutable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieEntry {
    id: MovieId,

    /// Older snapshots stored the title under `nome`
    #[serde(alias = "nome", alias = "name")]
    title: String,

    #[serde(alias = "assistido", default)]
    watched: bool,
}

/// Display status derived from the watched flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchStatus {
    ToWatch,
    Watched,
}

impl MovieEntry {
    /// Create an unwatched entry. Titles must already be normalized;
    /// `Watchlist::add` is the public way in.
    pub(crate) fn with_id(id: MovieId, title: String) -> Self {
        Self {
            id,
            title,
            watched: false,
        }
    }

    pub fn id(&self) -> &MovieId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_watched(&self) -> bool {
        self.watched
    }

    pub fn status(&self) -> WatchStatus {
        if self.watched {
            WatchStatus::Watched
        } else {
            WatchStatus::ToWatch
        }
    }

    /// Drop surrounding whitespace from a title read back from storage
    pub(crate) fn trim_title(&mut self) {
        let trimmed = self.title.trim();
        if trimmed.len() != self.title.len() {
            self.title = trimmed.to_string();
        }
    }

    /// Flip the watched flag, returning the new value
    pub fn toggle_watched(&mut self) -> bool {
        self.watched = !self.watched;
        self.watched
    }
}

impl std::fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WatchStatus::ToWatch => write!(f, "to watch"),
            WatchStatus::Watched => write!(f, "watched"),
        }
    }
}

impl std::fmt::Display for MovieEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_unwatched() {
        let movie = MovieEntry::with_id(MovieId::generate(), "Dune".to_string());
        assert_eq!(movie.title(), "Dune");
        assert!(!movie.is_watched());
        assert_eq!(movie.status(), WatchStatus::ToWatch);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut movie = MovieEntry::with_id(MovieId::generate(), "Arrival".to_string());
        assert!(movie.toggle_watched());
        assert_eq!(movie.status(), WatchStatus::Watched);
        assert!(!movie.toggle_watched());
        assert_eq!(movie.status(), WatchStatus::ToWatch);
    }

    #[test]
    fn test_serializes_with_title_and_watched_keys() {
        let movie = MovieEntry::with_id(MovieId::from("42"), "Coco".to_string());
        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["id"], "42");
        assert_eq!(json["title"], "Coco");
        assert_eq!(json["watched"], false);
        assert!(json.get("nome").is_none());
    }

    #[test]
    fn test_accepts_legacy_field_names() {
        let raw = r#"{"id":"1712345678901","nome":"Inception","assistido":true}"#;
        let movie: MovieEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(movie.id().as_str(), "1712345678901");
        assert_eq!(movie.title(), "Inception");
        assert!(movie.is_watched());
    }

    #[test]
    fn test_missing_watched_defaults_to_false() {
        let movie: MovieEntry = serde_json::from_str(r#"{"id":"a","title":"Up"}"#).unwrap();
        assert!(!movie.is_watched());
    }
}
