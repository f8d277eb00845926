use serde::{Deserialize, Serialize};

use crate::domain::movie::MovieEntry;

/// Watched count over total count for the whole list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchProgress {
    pub watched: usize,
    pub total: usize,
}

impl WatchProgress {
    pub fn from_entries(entries: &[MovieEntry]) -> Self {
        Self {
            watched: entries.iter().filter(|m| m.is_watched()).count(),
            total: entries.len(),
        }
    }
}

impl std::fmt::Display for WatchProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {} movies watched", self.watched, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::movie::MovieId;

    #[test]
    fn test_empty_progress() {
        let progress = WatchProgress::from_entries(&[]);
        assert_eq!(progress, WatchProgress::default());
        assert_eq!(progress.to_string(), "0 of 0 movies watched");
    }

    #[test]
    fn test_counts_watched() {
        let mut a = MovieEntry::with_id(MovieId::generate(), "A".to_string());
        let b = MovieEntry::with_id(MovieId::generate(), "B".to_string());
        a.toggle_watched();

        let progress = WatchProgress::from_entries(&[a, b]);
        assert_eq!(progress.watched, 1);
        assert_eq!(progress.total, 2);
        assert_eq!(progress.to_string(), "1 of 2 movies watched");
    }
}
