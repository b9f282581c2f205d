use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use quizboard_core::{CycleOutcome, LeaderboardApi, Orchestrator};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::error;

use crate::input::{handle_key, Action};
use crate::render::render;
use crate::ui::{App, CycleFailure, Tui};

/// A finished cycle, or a failure still carrying its generation so the
/// supersede policy can reconcile it.
type CycleResult = Result<CycleOutcome, CycleFailure>;

pub async fn run_app<A>(
    terminal: &mut Tui,
    app: &mut App,
    orchestrator: Arc<Orchestrator<A>>,
) -> Result<()>
where
    A: LeaderboardApi + 'static,
{
    let mut event_stream = EventStream::new();
    let (cycle_tx, mut cycle_rx) = mpsc::channel::<CycleResult>(8);

    // Initial fetch on mount.
    spawn_cycle(app, &orchestrator, &cycle_tx);

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                let Some(Ok(event)) = maybe_event else { continue };
                match event {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        match handle_key(app, key) {
                            Action::Quit => app.running = false,
                            Action::Refetch => spawn_cycle(app, &orchestrator, &cycle_tx),
                            Action::None => {}
                        }
                    }
                    // Resize is handled by the redraw at the top of the loop.
                    _ => {}
                }
            }
            Some(result) = cycle_rx.recv() => {
                app.apply_cycle(result, orchestrator.latest_generation());
            }
        }
    }

    Ok(())
}

/// Kick off one fetch cycle in the background. Superseded cycles are not
/// aborted; they settle and are reconciled by `App::apply_cycle`.
fn spawn_cycle<A>(app: &mut App, orchestrator: &Arc<Orchestrator<A>>, tx: &mpsc::Sender<CycleResult>)
where
    A: LeaderboardApi + 'static,
{
    app.loading = true;
    let filters = app.filters.clone();
    let resolve_usernames = app.resolve_usernames();
    let orchestrator = Arc::clone(orchestrator);
    let tx = tx.clone();

    tokio::spawn(async move {
        let result = orchestrator
            .run_cycle(&filters, resolve_usernames)
            .await
            .map_err(|e| {
                error!(generation = e.generation, error = %e, "fetch cycle failed");
                CycleFailure {
                    generation: e.generation,
                    message: e.to_string(),
                }
            });
        let _ = tx.send(result).await;
    });
}
