///! Interactive session: maps parsed commands onto feed actions

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::api::PhotoSource;
use crate::command::{Command, HELP_TEXT};
use crate::feed::PhotoFeed;
use crate::filter::FilterUpdate;
use crate::render;

/// Whether the loop keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Repl<S> {
    feed: PhotoFeed<S>,
    preview: usize,
}

impl<S: PhotoSource> Repl<S> {
    pub fn new(feed: PhotoFeed<S>, preview: usize) -> Self {
        Self { feed, preview }
    }

    pub fn feed(&self) -> &PhotoFeed<S> {
        &self.feed
    }

    /// Text shown before the first prompt
    pub fn banner(&self) -> String {
        if self.feed.first_access() {
            render::render_welcome()
        } else {
            self.view()
        }
    }

    fn view(&self) -> String {
        render::render_feed(self.feed.state(), self.preview)
    }

    /// Run one command and return what to print
    pub async fn execute(&mut self, command: Command) -> (Flow, String) {
        let output = match command {
            Command::Quit => return (Flow::Quit, String::new()),
            Command::Help => format!("{}\n", HELP_TEXT),
            Command::Rovers => render::render_rovers(),
            Command::Cameras => render::render_cameras(self.feed.filters().rover),
            Command::Status => render::render_status(self.feed.state()),
            Command::Manifest(rover) => {
                let rover = rover.unwrap_or(self.feed.filters().rover);
                let manifest = self.feed.source().fetch_manifest(rover).await;
                render::render_manifest(rover, manifest.as_ref())
            }
            Command::Start => {
                self.feed.start_exploring().await;
                self.view()
            }
            Command::Rover(rover) => {
                self.feed.update_filters(FilterUpdate::rover(rover));
                format!("{}\n{}", render::describe_filters(self.feed.filters()), render::render_gate(self.feed.filters()))
            }
            Command::Camera(camera) => {
                let rover = self.feed.filters().rover;
                let note = match camera.as_query() {
                    Some(code) if !rover.has_camera(code) => {
                        format!("Note: {} is not in the {} camera list.\n", code, rover.label())
                    }
                    _ => String::new(),
                };
                self.feed.update_filters(FilterUpdate::camera(camera));
                format!("{}{}\n{}", note, render::describe_filters(self.feed.filters()), render::render_gate(self.feed.filters()))
            }
            Command::Sol(sol) => {
                self.feed.update_filters(FilterUpdate::sol(sol));
                format!("{}\n{}", render::describe_filters(self.feed.filters()), render::render_gate(self.feed.filters()))
            }
            Command::Date(date) => {
                self.feed.update_filters(FilterUpdate::earth_date(date));
                format!("{}\n{}", render::describe_filters(self.feed.filters()), render::render_gate(self.feed.filters()))
            }
            Command::Search => {
                if self.feed.first_access() {
                    self.feed.set_first_access(false);
                }
                match self.feed.search().await {
                    Ok(()) => self.view(),
                    Err(blocked) => format!("Search is disabled: {}.\n", blocked),
                }
            }
            Command::More => {
                if self.feed.load_more().await {
                    self.view()
                } else if !self.feed.has_more() {
                    "All available photos have already been loaded.\n".to_string()
                } else {
                    "Nothing to load yet, run a search first.\n".to_string()
                }
            }
            Command::Retry => {
                if self.feed.error().is_none() {
                    "Nothing to retry.\n".to_string()
                } else {
                    self.feed.retry().await;
                    self.view()
                }
            }
        };
        (Flow::Continue, output)
    }

    /// Read commands line by line until `quit` or end of input
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        output.write_all(self.banner().as_bytes()).await?;
        output.write_all(b"> ").await?;
        output.flush().await?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let text = match Command::parse(&line) {
                Ok(None) => String::new(),
                Ok(Some(command)) => {
                    tracing::debug!("Command: {:?}", command);
                    let (flow, text) = self.execute(command).await;
                    if flow == Flow::Quit {
                        break;
                    }
                    text
                }
                Err(e) => format!("{}\n", e),
            };
            output.write_all(text.as_bytes()).await?;
            output.write_all(b"> ").await?;
            output.flush().await?;
        }

        output.write_all(b"Bye.\n").await?;
        output.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::testing::{ScriptedSource, manifest, photo};

    fn repl(source: ScriptedSource) -> Repl<ScriptedSource> {
        Repl::new(PhotoFeed::new(source), 25)
    }

    #[tokio::test]
    async fn test_welcome_then_start() {
        let mut repl = repl(ScriptedSource::new().with_page(vec![photo(1)]));
        assert!(repl.banner().contains("Mars Rover Photo Gallery"));

        let (flow, out) = repl.execute(Command::Start).await;

        assert_eq!(flow, Flow::Continue);
        assert!(out.contains("[1] #1"));
        assert!(!repl.feed().first_access());
    }

    #[tokio::test]
    async fn test_date_then_search() {
        let mut repl = repl(ScriptedSource::new().with_page(vec![photo(3)]));
        let date = chrono::NaiveDate::from_ymd_opt(2021, 5, 1);

        let (_, out) = repl.execute(Command::Date(date)).await;
        assert!(out.contains("Earth date: 01/05/2021"));
        assert_eq!(repl.feed().filters().sol, 0);

        let (_, out) = repl.execute(Command::Search).await;
        assert!(out.contains("Photos found: 1"));
    }

    #[tokio::test]
    async fn test_blocked_search_message() {
        let mut repl = repl(ScriptedSource::new());
        repl.execute(Command::Sol(0)).await;

        let (_, out) = repl.execute(Command::Search).await;

        assert!(out.contains("Search is disabled"));
        assert_eq!(repl.feed().source().photo_calls(), 0);
    }

    #[tokio::test]
    async fn test_manifest_command_uses_source() {
        let mut repl = repl(ScriptedSource::new().with_manifest(manifest(4102)));
        let (_, out) = repl.execute(Command::Manifest(None)).await;
        assert!(out.contains("Max sol:      4102"));
    }

    #[tokio::test]
    async fn test_camera_outside_catalog_is_noted() {
        let mut repl = repl(ScriptedSource::new());
        let (_, out) = repl
            .execute(Command::Camera(rover_common::CameraSelection::from("pancam")))
            .await;
        assert!(out.contains("not in the Curiosity camera list"));
    }

    #[tokio::test]
    async fn test_run_reads_until_quit() {
        let mut repl = repl(ScriptedSource::new().with_page(vec![photo(1), photo(2)]));
        let input: &[u8] = b"search\nbogus\nquit\nsearch\n";
        let mut output = Vec::new();

        repl.run(input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Photos found: 2"));
        assert!(text.contains("unknown command 'bogus'"));
        assert!(text.ends_with("Bye.\n"));
        assert_eq!(repl.feed().source().photo_calls(), 1);
    }
}
