mod load;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use glyphcast_core::encode::{self, Compression, TileOptions};
use glyphcast_core::grid::{average_grid, GridSpec};

#[derive(Parser)]
#[command(
    name = "glyphcast-convert",
    about = "Convert an image to a Unicode rendering or a tile-grid file"
)]
struct Cli {
    /// Input image file path
    input: PathBuf,

    /// Target grid width in cells (clamped to the image width)
    #[arg(default_value = "100")]
    width: u32,

    /// Write Unicode text instead of the binary tile grid
    #[arg(short, long)]
    text: bool,

    /// Output file path (default: input with .txt or .xp extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip gzip framing of the tile-grid output
    #[arg(long)]
    raw: bool,
}

/// Which encoder consumes the grid. Picked once, dispatched once.
enum OutputMode {
    Text,
    Tiles,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mode = if cli.text {
        OutputMode::Text
    } else {
        OutputMode::Tiles
    };
    let output_path = cli.output.unwrap_or_else(|| {
        let mut p = cli.input.clone();
        p.set_extension(match mode {
            OutputMode::Text => "txt",
            OutputMode::Tiles => "xp",
        });
        p
    });

    let source = load::load_source(&cli.input)?;
    eprintln!("Source: {}x{} pixels", source.width, source.height);

    let started = Instant::now();

    let spec = GridSpec::fit(source.width, source.height, cli.width)?;
    eprintln!("Target: {}x{} cells", spec.cols, spec.rows);

    let grid = average_grid(&source.data, source.width, source.height, &spec)?;

    let file = File::create(&output_path)
        .with_context(|| format!("failed to create {}", output_path.display()))?;
    let mut out = BufWriter::new(file);

    match mode {
        OutputMode::Text => encode::write_text(&grid, &mut out)?,
        OutputMode::Tiles => {
            let compression = if cli.raw {
                Compression::None
            } else {
                Compression::Gzip
            };
            encode::write_tiles(&grid, TileOptions::default(), compression, &mut out)?;
        }
    }
    out.flush()?;

    eprintln!("Wrote {} in {:.2?}", output_path.display(), started.elapsed());
    Ok(())
}
