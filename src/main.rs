use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use bingo_cards::cli::Args;
use bingo_cards::config::{RunConfig, Settings};
use bingo_cards::{generate_run, render_run, write_pdf};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let config = RunConfig::from_args(&args).context("Invalid arguments")?;

    let mut rng = match config.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    println!(
        "Generating {} bingo cards with {} guaranteed winners in {} draws...",
        config.participants, config.winners, config.draws
    );

    let run = generate_run(&config, &mut rng).context("Failed to generate bingo cards")?;

    let now = chrono::Local::now();
    let output_path = args.output_path(&now.format("%Y%m%d_%H%M%S").to_string());

    let settings = Settings::from_args(&args);
    let pdf_data = render_run(
        &run,
        &config,
        settings,
        now.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
    .context("Failed to generate PDF")?;

    write_pdf(&output_path, &pdf_data)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!("PDF created: {}", output_path.display());
    println!(
        "Successfully generated {} bingo cards with {} guaranteed winners!",
        run.participants.len(),
        run.plan.guaranteed.len()
    );
    let calls: Vec<String> = run.plan.numbers.iter().map(|n| n.to_string()).collect();
    println!("Numbers to draw (in order): {}", calls.join(", "));

    Ok(())
}
