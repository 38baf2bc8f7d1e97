use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use serpentile::{Board, ChainLayoutEngine, Domino, LayoutParams, RowWrapParams, Viewport, wrap_tray};

#[derive(Parser, Debug)]
#[command(name = "serpentile", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out a played chain from a board JSON (an array of tiles).
    Layout(LayoutArgs),
    /// Compute the row-wrapping tray layout for a tile count.
    Tray(TrayArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input board JSON: `[{"left":6,"right":4}, ...]`.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Container width in pixels.
    #[arg(long)]
    width: f64,

    /// Container height in pixels.
    #[arg(long)]
    height: f64,

    /// Override the east/west turn limit.
    #[arg(long)]
    tiles_per_row: Option<u32>,

    /// Override the north/south turn limit.
    #[arg(long)]
    tiles_per_column: Option<u32>,

    /// Pretty-print the snapshot JSON.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct TrayArgs {
    /// Number of tiles in the tray.
    #[arg(long)]
    count: usize,

    /// Container width in pixels.
    #[arg(long)]
    width: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Tray(args) => cmd_tray(args),
    }
}

fn read_board_json(path: &Path) -> anyhow::Result<Board> {
    let f = File::open(path).with_context(|| format!("open board '{}'", path.display()))?;
    let tiles: Vec<Domino> =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse board JSON")?;
    let board = Board::from_tiles(tiles)?;
    board.validate()?;
    Ok(board)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let board = read_board_json(&args.in_path)?;

    let mut params = LayoutParams::default();
    if let Some(tiles_per_row) = args.tiles_per_row {
        params.tiles_per_row = tiles_per_row;
    }
    if let Some(tiles_per_column) = args.tiles_per_column {
        params.tiles_per_column = tiles_per_column;
    }

    let mut engine = ChainLayoutEngine::new(params)?;
    let snapshot = engine.recompute(&board, Viewport::new(args.width, args.height));

    let out = if args.pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    println!("{out}");
    Ok(())
}

fn cmd_tray(args: TrayArgs) -> anyhow::Result<()> {
    let slots = wrap_tray(args.count, args.width, &RowWrapParams::default());
    println!("{}", serde_json::to_string(&slots)?);
    Ok(())
}
