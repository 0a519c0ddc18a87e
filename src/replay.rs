//! Headless event replay.
//!
//! Feeds a recorded event sequence through a controller/canvas pair, the same
//! dispatch a live host performs, and services any save requests the trace
//! triggers. This is what the CLI binary runs and what integration tests
//! drive.

use crate::config::ExportConfig;
use crate::draw::{Canvas, CanvasError};
use crate::export::{self, ExportError};
use crate::input::{Controller, InputEvent};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while replaying an event trace.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// What a replay run did.
#[derive(Debug)]
pub struct ReplaySummary {
    /// Number of events processed
    pub events: usize,
    /// Files written by save events in the trace, in order
    pub saved: Vec<PathBuf>,
}

/// Replays events in arrival order, exporting whenever the trace saves.
pub fn replay(
    controller: &mut Controller,
    canvas: &mut Canvas,
    events: &[InputEvent],
    export_config: &ExportConfig,
) -> Result<ReplaySummary, ReplayError> {
    let mut saved = Vec::new();

    for event in events {
        controller.handle_event(canvas, event.clone())?;
        if controller.take_pending_export() {
            saved.push(export::save_canvas(canvas, export_config)?);
        }
    }

    log::info!(
        "Replayed {} events ({} image(s) saved)",
        events.len(),
        saved.len()
    );

    Ok(ReplaySummary {
        events: events.len(),
        saved,
    })
}
