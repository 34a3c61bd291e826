use clap::Parser;
use minesweeper::{init_logging, Board, DEFAULT_COLUMNS, DEFAULT_MINES, DEFAULT_ROWS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,
    #[arg(long, default_value_t = DEFAULT_MINES, help = "How many mines you want on the field")]
    mines: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    log::info!(
        "starting a {}x{} field with {} mines",
        cli.rows,
        cli.columns,
        cli.mines
    );
    let mut board =
        Board::new(cli.rows, cli.columns, cli.mines, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    minesweeper::run(&mut board, &mut rng)
}
