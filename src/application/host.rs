// src/application/host.rs
//
// Terminal Host - line-oriented front end for the single screen
//
// A plain line is typed into the add field and submitted. Slash commands
// address entries by their 1-based position on screen.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::application::commands::*;
use crate::application::render::render_view;
use crate::application::state::AppState;
use crate::error::AppResult;
use crate::events::{MovieAdded, MovieRemoved, MovieWatchedToggled, WatchlistCleared};

const HELP: &str = "\
Type a title and press enter to add it.
  /toggle N   mark the N-th movie watched / to watch
  /remove N   delete the N-th movie
  /clear      delete every movie
  /list       show the list again
  /help       show this help
  /quit       leave";

/// One user gesture on the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    Submit(String),
    Toggle(usize),
    Remove(usize),
    Clear,
    List,
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_gesture(line: &str) -> Gesture {
    let line = line.trim_end_matches(|c: char| c == '\r' || c == '\n');
    let Some(command) = line.trim_start().strip_prefix('/') else {
        return Gesture::Submit(line.to_string());
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let position = parts.next().map(str::parse::<usize>);

    match (name, position) {
        ("toggle" | "t", Some(Ok(n))) => Gesture::Toggle(n),
        ("remove" | "rm", Some(Ok(n))) => Gesture::Remove(n),
        ("toggle" | "t", _) => Gesture::Invalid("usage: /toggle N".to_string()),
        ("remove" | "rm", _) => Gesture::Invalid("usage: /remove N".to_string()),
        ("clear", _) => Gesture::Clear,
        ("list" | "ls", _) => Gesture::List,
        ("help" | "h" | "?", _) => Gesture::Help,
        ("quit" | "q" | "exit", _) => Gesture::Quit,
        (other, _) => Gesture::Invalid(format!("unknown command: /{}", other)),
    }
}

pub struct TerminalHost {
    state: AppState,
    notices: Arc<Mutex<Vec<String>>>,
}

impl TerminalHost {
    pub fn new(state: AppState) -> Self {
        let notices = Arc::new(Mutex::new(Vec::new()));
        subscribe_notices(&state, &notices);
        Self { state, notices }
    }

    /// Apply one gesture and produce the text to show.
    /// Returns `None` when the host should stop.
    pub fn handle(&self, gesture: Gesture) -> Option<String> {
        let mut message = None;

        match gesture {
            Gesture::Submit(text) => {
                update_draft(&self.state, text);
                submit_draft(&self.state);
            }
            Gesture::Toggle(position) => match self.movie_id_at(position) {
                Some(id) => {
                    toggle_movie_watched(&self.state, id);
                }
                None => message = Some(format!("No movie at position {}", position)),
            },
            Gesture::Remove(position) => match self.movie_id_at(position) {
                Some(id) => {
                    remove_movie(&self.state, id);
                }
                None => message = Some(format!("No movie at position {}", position)),
            },
            Gesture::Clear => {
                clear_movies(&self.state);
            }
            Gesture::List => {}
            Gesture::Help => message = Some(HELP.to_string()),
            Gesture::Quit => return None,
            Gesture::Invalid(reason) => message = Some(reason),
        }

        let mut out = String::new();
        for notice in self.drain_notices() {
            out.push_str(&notice);
            out.push('\n');
        }
        if let Some(message) = message {
            out.push_str(&message);
            out.push('\n');
        }
        out.push_str(&render_view(&get_watchlist_view(&self.state)));
        Some(out)
    }

    /// Drive the screen until `/quit` or end of input, then wait for pending
    /// writes to land.
    pub async fn run<R, W>(self, input: R, mut output: W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        output
            .write_all(render_view(&get_watchlist_view(&self.state)).as_bytes())
            .await?;
        output.flush().await?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let Some(screen) = self.handle(parse_gesture(&line)) else {
                break;
            };
            output.write_all(screen.as_bytes()).await?;
            output.flush().await?;
        }

        self.state.watchlist_service.flush().await;
        Ok(())
    }

    fn movie_id_at(&self, position: usize) -> Option<String> {
        let index = position.checked_sub(1)?;
        list_movies(&self.state).into_iter().nth(index).map(|m| m.id)
    }

    fn drain_notices(&self) -> Vec<String> {
        std::mem::take(&mut *self.notices.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

fn subscribe_notices(state: &AppState, notices: &Arc<Mutex<Vec<String>>>) {
    let bus = &state.event_bus;

    let sink = Arc::clone(notices);
    bus.subscribe::<MovieAdded, _>(move |event| {
        push_notice(&sink, format!("Added \"{}\"", event.title));
    });

    let sink = Arc::clone(notices);
    bus.subscribe::<MovieWatchedToggled, _>(move |event| {
        let status = if event.watched { "watched" } else { "to watch" };
        push_notice(&sink, format!("Marked \"{}\" as {}", event.title, status));
    });

    let sink = Arc::clone(notices);
    bus.subscribe::<MovieRemoved, _>(move |event| {
        push_notice(&sink, format!("Removed \"{}\"", event.title));
    });

    let sink = Arc::clone(notices);
    bus.subscribe::<WatchlistCleared, _>(move |event| {
        push_notice(&sink, format!("Cleared {} movies", event.removed));
    });
}

fn push_notice(sink: &Mutex<Vec<String>>, notice: String) {
    sink.lock().unwrap_or_else(PoisonError::into_inner).push(notice);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventBus;
    use crate::repositories::{InMemoryKeyValueRepository, KeyValueRepository};
    use crate::services::WatchlistService;

    fn host_with(repo: Arc<InMemoryKeyValueRepository>) -> TerminalHost {
        let bus = Arc::new(EventBus::new());
        let service = Arc::new(WatchlistService::new(repo, bus.clone(), "@filmes"));
        TerminalHost::new(AppState::new(bus, service))
    }

    #[test]
    fn test_parse_plain_text_is_submit() {
        assert_eq!(parse_gesture("Dune\n"), Gesture::Submit("Dune".to_string()));
        assert_eq!(parse_gesture(""), Gesture::Submit(String::new()));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_gesture("/toggle 2"), Gesture::Toggle(2));
        assert_eq!(parse_gesture("/rm 1"), Gesture::Remove(1));
        assert_eq!(parse_gesture("  /clear"), Gesture::Clear);
        assert_eq!(parse_gesture("/q"), Gesture::Quit);
        assert_eq!(parse_gesture("/list"), Gesture::List);
        assert!(matches!(parse_gesture("/toggle x"), Gesture::Invalid(_)));
        assert!(matches!(parse_gesture("/remove"), Gesture::Invalid(_)));
        assert!(matches!(parse_gesture("/dance"), Gesture::Invalid(_)));
    }

    #[tokio::test]
    async fn test_out_of_range_position() {
        let host = host_with(Arc::new(InMemoryKeyValueRepository::new()));
        let screen = host.handle(Gesture::Toggle(0)).unwrap();
        assert!(screen.contains("No movie at position 0"));
        let screen = host.handle(Gesture::Remove(3)).unwrap();
        assert!(screen.contains("No movie at position 3"));
    }

    #[tokio::test]
    async fn test_scripted_session() {
        let repo = Arc::new(InMemoryKeyValueRepository::new());
        let host = host_with(repo.clone());
        let script = b"Inception\nCoco\n/toggle 2\n/remove 1\n/quit\nIgnored\n";
        let mut output = Vec::new();

        host.run(&script[..], &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Added \"Coco\""));
        assert!(text.contains("Marked \"Coco\" as watched"));
        assert!(text.contains("Removed \"Inception\""));
        assert!(text.contains("1 of 1 movies watched"));
        assert!(!text.contains("Ignored"));

        let raw = repo.get("@filmes").unwrap().unwrap();
        assert!(raw.contains("\"title\":\"Coco\""));
        assert!(raw.contains("\"watched\":true"));
        assert!(!raw.contains("Inception"));
    }
}
