//! Card Sheet Layout Renderer
//!
//! Lays participants' cards out in a grid (2x2 per page by default), puts a
//! summary footer on the last card page and optionally appends the caller's
//! sheet.

use printpdf::{BuiltinFont, Color, Mm, PdfDocument, PdfPage, PdfSaveOptions};

use crate::config::Settings;
use crate::error::RenderError;
use crate::generator::DrawPlan;
use crate::model::{CardLayout, Participant};

use crate::render::components::call_sheet::{call_entries, CallSheetRenderer};
use crate::render::components::card_grid::CardRenderer;
use crate::render::helpers::colors::BLACK;
use crate::render::helpers::compress::compress_or_keep;
use crate::render::helpers::layer::LayerBuilder;

/// Smallest card side, in mm, that still leaves room for legible cells
const MIN_CARD_SIDE: f32 = 20.0;

/// What the footer and caller's sheet report about the run
#[derive(Debug, Clone)]
pub struct RunSummary<'a> {
    pub plan: &'a DrawPlan,
    pub layout: &'a CardLayout,
    /// Winners requested on the command line
    pub winners: usize,
    /// Already formatted, e.g. "2026-10-19 14:03:00"
    pub generated_at: String,
}

impl RunSummary<'_> {
    pub fn footer_text(&self, total_cards: usize) -> String {
        format!(
            "Generated: {} | Draws: {} | Expected Winners: {} | Total Cards: {}",
            self.generated_at,
            self.plan.numbers.len(),
            self.winners,
            total_cards
        )
    }
}

/// Card sheet renderer
pub struct CardSheetRenderer {
    settings: Settings,
}

impl CardSheetRenderer {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Generate the PDF bytes for every participant's card
    pub fn render(
        &self,
        participants: &[Participant],
        summary: &RunSummary<'_>,
    ) -> Result<Vec<u8>, RenderError> {
        let per_page = self.settings.cards_per_page();
        if per_page == 0
            || self.settings.card_width() < MIN_CARD_SIDE
            || self.settings.card_height() < MIN_CARD_SIDE
        {
            return Err(RenderError::LayoutOverflow);
        }

        let mut doc = PdfDocument::new("Bingo Cards");
        let mut pages = Vec::new();

        let chunks: Vec<&[Participant]> = participants.chunks(per_page).collect();
        let last = chunks.len().saturating_sub(1);
        for (index, chunk) in chunks.iter().enumerate() {
            let mut layer = LayerBuilder::new();
            self.render_page(&mut layer, chunk);
            if index == last {
                self.render_footer(&mut layer, &summary.footer_text(participants.len()));
            }
            pages.push(self.page(layer));
        }

        if self.settings.call_sheet {
            let entries = call_entries(summary.plan, participants, summary.layout);
            let sheet = CallSheetRenderer::new(&self.settings);
            pages.extend(sheet.render(&entries).into_iter().map(|layer| self.page(layer)));
        }

        log::info!("Rendering {} pages", pages.len());
        doc.with_pages(pages);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        for warning in &warnings {
            log::debug!("printpdf: {:?}", warning);
        }

        Ok(compress_or_keep(bytes))
    }

    fn page(&self, layer: LayerBuilder) -> PdfPage {
        PdfPage::new(
            Mm(self.settings.page_width),
            Mm(self.settings.page_height),
            layer.into_ops(),
        )
    }

    /// Render up to `cards_per_page` cards
    fn render_page(&self, layer: &mut LayerBuilder, participants: &[Participant]) {
        let card = CardRenderer::new(&self.settings);
        let width = self.settings.card_width();
        let height = self.settings.card_height();

        for (slot, participant) in participants.iter().enumerate() {
            let (x, y) = self.settings.card_origin(slot);
            card.render(layer, participant, x, y, width, height);
        }
    }

    fn render_footer(&self, layer: &mut LayerBuilder, text: &str) {
        layer.set_fill_color(Color::Rgb(BLACK));
        layer.use_text_builtin(
            text,
            self.settings.footer_font_size,
            Mm(self.settings.margin),
            Mm(self.settings.margin * 0.5),
            BuiltinFont::Helvetica,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_text() {
        let plan = DrawPlan {
            numbers: vec![1, 2, 3],
            guaranteed: vec![],
        };
        let layout = CardLayout::default();
        let summary = RunSummary {
            plan: &plan,
            layout: &layout,
            winners: 2,
            generated_at: "2026-01-01 09:00:00".to_string(),
        };
        assert_eq!(
            summary.footer_text(8),
            "Generated: 2026-01-01 09:00:00 | Draws: 3 | Expected Winners: 2 | Total Cards: 8"
        );
    }

    #[test]
    fn test_crowded_page_is_rejected() {
        let settings = Settings {
            cards_per_row: 20,
            ..Settings::default()
        };
        let plan = DrawPlan {
            numbers: vec![1],
            guaranteed: vec![],
        };
        let layout = CardLayout::default();
        let summary = RunSummary {
            plan: &plan,
            layout: &layout,
            winners: 0,
            generated_at: String::new(),
        };
        let result = CardSheetRenderer::new(settings).render(&[], &summary);
        assert!(matches!(result, Err(RenderError::LayoutOverflow)));
    }
}
