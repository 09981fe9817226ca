//! TUI module
//!
//! Provides the terminal user interface for the trace navigator, built with
//! ratatui on a crossterm backend.

pub mod app;
pub mod constants;
pub mod keybindings;
mod theme;
pub mod views;

pub use app::*;
pub use theme::*;

use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::instrument::WithSubscriber;

use crate::actions::Kubectl;
use crate::actions::clipboard::{Clipboard, SystemClipboard};
use crate::navigator::KeyAction;
use crate::trace::TraceSource;
use constants::EVENT_POLL_MS;
use keybindings::map_key;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Terminal-level settings that do not belong to the application state
#[derive(Debug, Clone, Default)]
pub struct TerminalOptions {
    pub enable_mouse: bool,
    /// Append every delivered event to this file
    pub dump: Option<PathBuf>,
}

/// Run the TUI application until the user quits
pub async fn run_tui(
    source: Arc<dyn TraceSource>,
    kubectl: Kubectl,
    options: AppOptions,
    terminal_options: TerminalOptions,
) -> Result<()> {
    tracing::debug!(source = %source.describe(), "Initializing TUI");

    let mut dumper = EventDumper::open(terminal_options.dump.as_deref())?;
    let mut terminal = setup_terminal(terminal_options.enable_mouse)?;

    let mut app = App::new(source.describe(), options, Instant::now());
    let result = event_loop(
        &mut terminal,
        &mut app,
        &source,
        &kubectl,
        &terminal_options,
        &mut dumper,
    )
    .await;

    tracing::debug!("TUI shutting down");
    // Restore even when the loop failed, then report the loop's error first
    let restored = restore_terminal(&mut terminal, terminal_options.enable_mouse);
    result.and(restored)
}

async fn event_loop(
    terminal: &mut Term,
    app: &mut App,
    source: &Arc<dyn TraceSource>,
    kubectl: &Kubectl,
    options: &TerminalOptions,
    dumper: &mut EventDumper,
) -> Result<()> {
    let mut clipboard = SystemClipboard::new();
    let mut queue: VecDeque<AppEvent> = VecDeque::new();

    loop {
        terminal.draw(|f| app.render(f))?;

        if let Some(result) = app.try_get_fetch_result() {
            queue.push_back(AppEvent::TraceFetched {
                result,
                at: Instant::now(),
            });
        }

        if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = map_key(key, app.input_context()) {
                        queue.push_back(AppEvent::Key(action));
                    }
                }
                Event::Mouse(mouse) if options.enable_mouse => match mouse.kind {
                    MouseEventKind::ScrollUp => queue.push_back(AppEvent::Key(KeyAction::MoveUp)),
                    MouseEventKind::ScrollDown => {
                        queue.push_back(AppEvent::Key(KeyAction::MoveDown))
                    }
                    _ => {}
                },
                Event::Resize(width, height) => {
                    queue.push_back(AppEvent::Resize { width, height })
                }
                _ => {}
            }
        }
        queue.push_back(AppEvent::Tick(Instant::now()));

        while let Some(event) = queue.pop_front() {
            dumper.dump(&event);
            for command in app.handle_event(event) {
                match command {
                    AppCommand::Quit => return Ok(()),
                    AppCommand::FetchTrace => {
                        if let Some(tx) = app.trigger_fetch() {
                            let source = Arc::clone(source);
                            tokio::spawn(
                                async move {
                                    let result = source.fetch().await;
                                    if let Err(e) = &result {
                                        tracing::warn!("Trace fetch failed: {}", e);
                                    }
                                    let _ = tx.send(result);
                                }
                                .with_current_subscriber(),
                            );
                        }
                    }
                    AppCommand::RunAction {
                        action,
                        namespace,
                        id,
                    } => {
                        let result = suspended(terminal, options.enable_mouse, || {
                            tokio::task::block_in_place(|| {
                                kubectl.run(action, namespace.as_deref(), &id)
                            })
                        })?;
                        queue.push_back(AppEvent::ActionFinished {
                            kind: ActionKind::Cluster(action),
                            id,
                            result,
                            at: Instant::now(),
                        });
                    }
                    AppCommand::Copy(id) => {
                        let result = clipboard.set(&id);
                        queue.push_back(AppEvent::ActionFinished {
                            kind: ActionKind::Copy,
                            id,
                            result,
                            at: Instant::now(),
                        });
                    }
                }
            }
        }
    }
}

fn setup_terminal(enable_mouse: bool) -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if enable_mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Term, enable_mouse: bool) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if enable_mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;
    Ok(())
}

/// Hand the terminal to a child process for the duration of `f`
fn suspended<T>(terminal: &mut Term, enable_mouse: bool, f: impl FnOnce() -> T) -> Result<T> {
    restore_terminal(terminal, enable_mouse)?;
    let value = f();
    enable_raw_mode()?;
    execute!(terminal.backend_mut(), EnterAlternateScreen)?;
    if enable_mouse {
        execute!(terminal.backend_mut(), EnableMouseCapture)?;
    }
    terminal.clear()?;
    Ok(value)
}
