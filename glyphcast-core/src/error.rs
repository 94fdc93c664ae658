use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the grid pipeline and the tile codecs. All are
/// terminal for the current run; nothing is retried and a mid-stream
/// failure may leave a truncated sink behind.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested grid degenerates to zero cells after clamping.
    #[error("degenerate grid dimensions: {cols}x{rows} cells")]
    InvalidDimension { cols: i64, rows: i64 },

    /// A cell's source rectangle covers no pixels.
    #[error("tile covers no source pixels ({tile_w}x{tile_h})")]
    EmptyTile { tile_w: u32, tile_h: u32 },

    #[error("unsupported tile-grid version: {0}")]
    UnsupportedVersion(i32),

    #[error("unsupported layer count: {0}")]
    UnsupportedLayerCount(i32),

    /// The byte stream does not hold the cell records its header declares.
    #[error("tile-grid payload length mismatch: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
