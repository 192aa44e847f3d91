pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod render;

pub use config::{RunConfig, Settings};
pub use error::{ConfigError, RenderError};
pub use generator::{deal_participants, generate_cards, plan_draws, DrawPlan};
pub use model::{BingoCard, CardLayout, Cell, Participant};
pub use render::{CardSheetRenderer, RunSummary};

use std::fs;
use std::path::Path;

use rand::Rng;

/// Everything generated for one invocation
#[derive(Debug, Clone)]
pub struct BingoRun {
    pub participants: Vec<Participant>,
    pub plan: DrawPlan,
}

/// Deal cards to every participant and plan the draw order.
///
/// All randomness comes from `rng`, so a seeded generator gives a
/// reproducible run.
///
/// # Example
///
/// ```no_run
/// use bingo_cards::{generate_run, render_run, RunConfig, Settings};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let config = RunConfig::new(8, 30, 2).with_names(vec!["Ann".into(), "Bo".into()]);
/// let mut rng = StdRng::seed_from_u64(2026);
///
/// let run = generate_run(&config, &mut rng).unwrap();
/// let pdf_bytes = render_run(&run, &config, Settings::default(), "now".into()).unwrap();
///
/// std::fs::write("bingo.pdf", pdf_bytes).unwrap();
/// ```
pub fn generate_run<R: Rng + ?Sized>(
    config: &RunConfig,
    rng: &mut R,
) -> Result<BingoRun, ConfigError> {
    config.validate()?;

    let participants =
        deal_participants(config.participants, &config.names, &config.layout, rng)?;
    let plan = plan_draws(
        &participants,
        config.winners,
        config.draws,
        &config.layout.number_range,
        rng,
    )?;

    Ok(BingoRun { participants, plan })
}

/// Render a generated run to PDF bytes
pub fn render_run(
    run: &BingoRun,
    config: &RunConfig,
    settings: Settings,
    generated_at: String,
) -> Result<Vec<u8>, RenderError> {
    let summary = RunSummary {
        plan: &run.plan,
        layout: &config.layout,
        winners: config.winners,
        generated_at,
    };
    CardSheetRenderer::new(settings).render(&run.participants, &summary)
}

/// Write PDF bytes to `path`, creating missing parent directories
pub fn write_pdf(path: &Path, pdf: &[u8]) -> Result<(), RenderError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, pdf)?;
    log::debug!("Wrote {} bytes to {}", pdf.len(), path.display());
    Ok(())
}
