use clap::{Parser, ValueEnum};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "bingo-cards")]
#[command(
    author,
    version,
    about = "Generate printable bingo cards as PDF with guaranteed winners"
)]
pub struct Args {
    /// Number of players (one card each)
    #[arg(short, long, visible_alias = "participants")]
    pub players: usize,

    /// Number of guaranteed winners
    #[arg(short, long)]
    pub winners: usize,

    /// Number of draws/rounds
    #[arg(short, long, visible_alias = "rounds")]
    pub draws: usize,

    /// Comma-separated list of player names
    #[arg(long)]
    pub names: Option<String>,

    /// Output PDF file path (defaults to a timestamped name in --output-dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory for the generated file when --output is not given
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Cards are N x N
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u8).range(1..=15))]
    pub grid_size: u8,

    /// Number range to draw from (e.g., "1-75")
    #[arg(long, default_value = "1-75")]
    pub numbers: String,

    /// Draw every column from the whole range instead of its own band
    #[arg(long)]
    pub unbanded: bool,

    /// Seed for reproducible cards and draws
    #[arg(long)]
    pub seed: Option<u64>,

    /// Page size
    #[arg(short = 's', long, value_enum, default_value = "letter")]
    pub page_size: PageSize,

    /// Append a page listing the draw order
    #[arg(long)]
    pub call_sheet: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum PageSize {
    #[default]
    Letter,
    A4,
    Legal,
}

impl PageSize {
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            PageSize::Letter => (215.9, 279.4),
            PageSize::A4 => (210.0, 297.0),
            PageSize::Legal => (215.9, 355.6),
        }
    }
}

impl Args {
    /// Get the output path, defaulting to a timestamped name in the output directory
    pub fn output_path(&self, timestamp: &str) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            default_output_path(
                &self.output_dir,
                self.players,
                self.winners,
                self.draws,
                timestamp,
            )
        })
    }

    /// Player names from --names, empty when not given
    pub fn name_list(&self) -> Vec<String> {
        self.names
            .as_deref()
            .map(parse_name_list)
            .unwrap_or_default()
    }
}

/// File name used when no explicit output is given
pub fn default_output_path(
    dir: &Path,
    players: usize,
    winners: usize,
    draws: usize,
    timestamp: &str,
) -> PathBuf {
    dir.join(format!(
        "bingo_cards_{}players_{}winners_{}draws_{}.pdf",
        players, winners, draws, timestamp
    ))
}

/// Split a comma-separated name list, dropping blank entries
pub fn parse_name_list(spec: &str) -> Vec<String> {
    spec.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Parse a number range specification such as "1-75"
pub fn parse_number_range(spec: &str) -> Result<RangeInclusive<u32>, String> {
    let parts: Vec<&str> = spec.split('-').collect();
    if parts.len() != 2 {
        return Err(format!("Invalid range: {}", spec));
    }

    let start: u32 = parts[0]
        .trim()
        .parse()
        .map_err(|_| format!("Invalid number: {}", parts[0]))?;
    let end: u32 = parts[1]
        .trim()
        .parse()
        .map_err(|_| format!("Invalid number: {}", parts[1]))?;

    if start > end {
        return Err(format!("Invalid range: {} > {}", start, end));
    }

    Ok(start..=end)
}
