//! Raster canvas: the persistent drawing buffer.

use super::color::Color;
use thiserror::Error;

/// Errors raised by canvas buffer operations.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("cairo operation failed: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("surface pixels unavailable: {0}")]
    Pixels(#[from] cairo::BorrowError),

    #[error("snapshot is {actual} bytes but the surface needs {expected}")]
    SnapshotSize { expected: usize, actual: usize },
}

/// Full copy of the canvas pixel contents, taken at gesture start.
///
/// Shape tools restore this before redrawing their preview on every pointer
/// move, so intermediate preview frames never accumulate in the buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    data: Vec<u8>,
}

impl Snapshot {
    /// Raw ARGB32 pixel bytes (including row stride padding).
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }
}

/// The persistent raster buffer all strokes and shapes are committed to.
///
/// Wraps a Cairo image surface. Rendering happens through short-lived Cairo
/// contexts so the pixel data stays accessible for snapshot and restore.
pub struct Canvas {
    surface: cairo::ImageSurface,
    width: i32,
    height: i32,
}

impl Canvas {
    /// Creates a canvas of the given size, painted with the background color.
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self, CanvasError> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        let canvas = Self {
            surface,
            width,
            height,
        };
        canvas.fill(background)?;
        Ok(canvas)
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Runs a drawing closure against a fresh Cairo context.
    ///
    /// The context is dropped before returning so the surface is never left
    /// referenced, which would block later pixel access.
    pub fn with_context<R>(
        &self,
        f: impl FnOnce(&cairo::Context) -> R,
    ) -> Result<R, CanvasError> {
        let ctx = cairo::Context::new(&self.surface)?;
        Ok(f(&ctx))
    }

    /// Paints the entire buffer with a solid color, discarding prior content.
    pub fn fill(&self, color: Color) -> Result<(), CanvasError> {
        self.with_context(|ctx| {
            ctx.set_source_rgba(color.r, color.g, color.b, color.a);
            ctx.set_operator(cairo::Operator::Source);
            let _ = ctx.paint();
        })
    }

    /// Captures a full copy of the current pixel contents.
    pub fn snapshot(&mut self) -> Result<Snapshot, CanvasError> {
        self.surface.flush();
        let data = self.surface.data()?;
        Ok(Snapshot {
            data: data.to_vec(),
        })
    }

    /// Restores the buffer to a previously captured snapshot.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), CanvasError> {
        self.surface.flush();
        {
            let mut data = self.surface.data()?;
            if data.len() != snapshot.data.len() {
                return Err(CanvasError::SnapshotSize {
                    expected: data.len(),
                    actual: snapshot.data.len(),
                });
            }
            data.copy_from_slice(&snapshot.data);
        }
        self.surface.mark_dirty();
        Ok(())
    }

    /// Encodes the buffer as PNG into the given writer.
    pub fn write_png<W: std::io::Write>(&mut self, writer: &mut W) -> Result<(), cairo::IoError> {
        self.surface.flush();
        self.surface.write_to_png(writer)
    }
}
