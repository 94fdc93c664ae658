use std::io::Write;

use crate::compress;
use crate::error::Result;
use crate::format::{Cell, CellGrid, GlyphLevel, TileHeader, TileRecord, HEADER_SIZE};

/// How the binary tile stream is framed on its way to the sink. The logical
/// record layout is identical either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
}

/// Where a tile record's background color comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Background {
    /// The cell's own average color, tinted lighter by the shade offset.
    #[default]
    CellAverage,
    /// Constant black, regardless of cell color.
    Black,
}

/// Per-record color handling for the binary encoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TileOptions {
    /// Shades the foreground darker and the cell-average background
    /// lighter, saturating at the channel bounds. Zero leaves both at
    /// the cell average.
    pub shade_offset: u8,
    pub background: Background,
}

/// Write the grid as text: one display character per cell, row-major, with
/// exactly one line terminator after each row's `cols` characters.
pub fn write_text<W: Write>(grid: &CellGrid, mut out: W) -> Result<()> {
    let mut line = String::with_capacity(grid.cols() as usize * 3 + 1);
    for y in 0..grid.rows() {
        line.clear();
        for x in 0..grid.cols() {
            let level = GlyphLevel::from_brightness(grid.cell(x, y).brightness);
            line.push(level.display_char());
        }
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}

/// Write the grid in the binary tile-grid layout: 16-byte header, then one
/// 10-byte record per cell in row-major order. The whole buffer is built
/// before any byte reaches the sink, then optionally gzip-framed.
pub fn write_tiles<W: Write>(
    grid: &CellGrid,
    options: TileOptions,
    compression: Compression,
    mut out: W,
) -> Result<()> {
    let header = TileHeader {
        rows: grid.rows() as i32,
        cols: grid.cols() as i32,
    };

    let mut raw = Vec::with_capacity(HEADER_SIZE + grid.cells().len() * TileRecord::SIZE);
    raw.extend_from_slice(&header.to_bytes());
    for cell in grid.cells() {
        raw.extend_from_slice(&record_for(cell, options).to_bytes());
    }

    match compression {
        Compression::None => out.write_all(&raw)?,
        Compression::Gzip => out.write_all(&compress::compress(&raw)?)?,
    }
    Ok(())
}

fn record_for(cell: &Cell, options: TileOptions) -> TileRecord {
    let off = options.shade_offset;
    let fg = [
        cell.r.saturating_sub(off),
        cell.g.saturating_sub(off),
        cell.b.saturating_sub(off),
    ];
    let bg = match options.background {
        Background::CellAverage => [
            cell.r.saturating_add(off),
            cell.g.saturating_add(off),
            cell.b.saturating_add(off),
        ],
        Background::Black => [0, 0, 0],
    };
    TileRecord {
        glyph: GlyphLevel::from_brightness(cell.brightness).code(),
        fg,
        bg,
    }
}
