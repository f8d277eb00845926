// src/application/render.rs
//
// Plain-text rendering of the watch-list screen

use crate::application::dto::{MovieDto, WatchlistViewDto};

const BANNER_TITLE: &str = "My Movie List";
const BANNER_SUBTITLE: &str = "Movies to watch";
const EMPTY_TITLE: &str = "No movies on the list yet!";
const EMPTY_SUBTITLE: &str = "Add movies to watch";

pub fn render_view(view: &WatchlistViewDto) -> String {
    let rule = "-".repeat(BANNER_TITLE.len().max(BANNER_SUBTITLE.len()) + 4);
    let mut lines = vec![
        rule.clone(),
        format!("  {}", BANNER_TITLE),
        format!("  {}", BANNER_SUBTITLE),
        rule,
    ];

    if view.is_empty {
        lines.push(EMPTY_TITLE.to_string());
        lines.push(EMPTY_SUBTITLE.to_string());
    } else {
        lines.push(view.progress.label.clone());
        lines.extend(
            view.movies
                .iter()
                .enumerate()
                .map(|(idx, movie)| render_movie(idx + 1, movie)),
        );
    }

    if view.can_clear {
        lines.push("(/clear removes everything)".to_string());
    }
    if !view.draft.is_empty() {
        lines.push(format!("draft: {}", view.draft));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_movie(position: usize, movie: &MovieDto) -> String {
    let mark = if movie.watched { 'x' } else { ' ' };
    format!("{:>3}. [{}] {}  ({})", position, mark, movie.title, movie.status)
}
