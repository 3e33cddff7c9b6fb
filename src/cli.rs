use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the anthill game
#[derive(Parser, Debug)]
#[command(name = "anthill", about = "🐜 Chase fleeing ants around their anthills")]
pub struct Args {
    /// Grid height
    #[arg(long, default_value_t = 10)]
    pub rows: usize,

    /// Grid width
    #[arg(long, default_value_t = 25)]
    pub cols: usize,

    /// Fewest anthills placed at start
    #[arg(long, default_value_t = 1)]
    pub min_anthills: usize,

    /// Most anthills placed at start
    #[arg(long, default_value_t = 4)]
    pub max_anthills: usize,

    /// Smallest spawn stock of a capped anthill
    #[arg(long, default_value_t = 1)]
    pub min_quantity: u32,

    /// Cap each anthill's spawn stock; anthills spawn without limit when omitted
    #[arg(long)]
    pub max_quantity: Option<u32>,

    /// Chance that an anthill spawns an ant after each player move
    #[arg(short = 'p', long, default_value_t = 0.2)]
    pub spawn_probability: f64,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Read commands from stdin, one per line, and print plain frames
    #[arg(long, default_value_t = false)]
    pub headless: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(long, default_value_t = '☐')]
    pub empty_glyph: char,

    #[arg(long, default_value_t = 'P')]
    pub player_glyph: char,

    #[arg(long, default_value_t = 'A')]
    pub anthill_glyph: char,

    #[arg(long, default_value_t = 'a')]
    pub ant_glyph: char,
}
