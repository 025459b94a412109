use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use std::time::{Duration, Instant};

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, Tui};

/// Frame interval for a frame rate, never below 1 ms
pub fn frame_interval(fps: u32) -> Duration {
    Duration::from_millis((1000 / fps.max(1) as u64).max(1))
}

pub async fn run_app(terminal: &mut Tui, app: &mut App, fps: u32) -> Result<()> {
    let mut event_stream = EventStream::new();
    // Drives the cosmos frame counter, pulse decay, toast expiry and speech polling
    let mut tick_interval = tokio::time::interval(frame_interval(fps));

    tracing::info!(fps, messages = app.store.len(), "event loop started");

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                            if app.pending_quit {
                                app.quit();
                            } else {
                                app.pending_quit = true;
                            }
                        } else {
                            app.pending_quit = false;
                            handle_key(app, key, Instant::now());
                        }
                    }
                    // Resize and other events just trigger a redraw
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {}", e);
                    }
                    None => {
                        tracing::warn!("Terminal event stream closed");
                        app.quit();
                    }
                }
            }
            _ = tick_interval.tick() => {
                app.tick(Instant::now());
            }
        }
    }

    tracing::info!("event loop stopped");
    Ok(())
}
