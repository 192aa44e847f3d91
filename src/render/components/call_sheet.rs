//! Caller's sheet: the planned draw order, numbered, in columns
//!
//! Entries where a guaranteed card first completes a line are flagged so the
//! caller knows when to expect a shout.

use printpdf::{BuiltinFont, Color, Mm};

use crate::config::Settings;
use crate::generator::DrawPlan;
use crate::model::{column_letters, CardLayout, Participant};
use crate::render::helpers::colors::{BLACK, GRAY};
use crate::render::helpers::layer::LayerBuilder;
use crate::render::helpers::text_metrics::{get_helvetica_bold_measurer, PT_TO_MM};

const TITLE_FONT_SIZE: f32 = 16.0;
const ENTRY_FONT_SIZE: f32 = 11.0;
const NOTE_FONT_SIZE: f32 = 8.0;

/// Page margin for the sheet, in mm
const SHEET_MARGIN: f32 = 15.0;
const TITLE_GAP: f32 = 10.0;
const ENTRY_HEIGHT: f32 = 6.0;
const COLUMN_WIDTH: f32 = 45.0;

/// One line on the sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallEntry {
    /// 1-based position in the draw order
    pub position: usize,
    /// "B-12" when the layout has column letters, otherwise "12"
    pub call: String,
    /// Guaranteed cards completing their first line on this call
    pub completes: Vec<usize>,
}

/// Build sheet entries for a plan
pub fn call_entries(
    plan: &DrawPlan,
    participants: &[Participant],
    layout: &CardLayout,
) -> Vec<CallEntry> {
    let letters = column_letters(layout.grid_size);
    let mut entries: Vec<CallEntry> = plan
        .numbers
        .iter()
        .enumerate()
        .map(|(i, n)| {
            let letter = letters.zip(layout.column_of(*n)).map(|(l, c)| l[c]);
            CallEntry {
                position: i + 1,
                call: match letter {
                    Some(l) => format!("{}-{}", l, n),
                    None => n.to_string(),
                },
                completes: Vec::new(),
            }
        })
        .collect();

    for p in participants
        .iter()
        .filter(|p| plan.guaranteed.contains(&p.card.id))
    {
        if let Some(at) = plan.first_line_at(&p.card) {
            if let Some(entry) = at.checked_sub(1).and_then(|i| entries.get_mut(i)) {
                entry.completes.push(p.card.id);
            }
        }
    }

    entries
}

/// Lays call entries out over as many pages as needed
pub struct CallSheetRenderer<'a> {
    settings: &'a Settings,
}

impl<'a> CallSheetRenderer<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    fn rows_per_column(&self) -> usize {
        let usable = self.settings.page_height
            - 2.0 * SHEET_MARGIN
            - TITLE_GAP
            - TITLE_FONT_SIZE * PT_TO_MM;
        ((usable / ENTRY_HEIGHT).floor() as usize).max(1)
    }

    fn columns_per_page(&self) -> usize {
        let usable = self.settings.page_width - 2.0 * SHEET_MARGIN;
        ((usable / COLUMN_WIDTH).floor() as usize).max(1)
    }

    pub fn entries_per_page(&self) -> usize {
        self.rows_per_column() * self.columns_per_page()
    }

    /// One layer per page
    pub fn render(&self, entries: &[CallEntry]) -> Vec<LayerBuilder> {
        let per_page = self.entries_per_page();
        let rows = self.rows_per_column();

        entries
            .chunks(per_page)
            .enumerate()
            .map(|(page, chunk)| {
                let mut layer = LayerBuilder::new();
                let top = self.settings.page_height - SHEET_MARGIN;
                let measurer = get_helvetica_bold_measurer();

                let title = if page == 0 {
                    "Caller's Sheet".to_string()
                } else {
                    format!("Caller's Sheet (continued, page {})", page + 1)
                };
                let title_baseline = top - measurer.cap_height_mm(TITLE_FONT_SIZE);
                layer.set_fill_color(Color::Rgb(BLACK));
                layer.use_text_builtin(
                    title,
                    TITLE_FONT_SIZE,
                    Mm(SHEET_MARGIN),
                    Mm(title_baseline),
                    BuiltinFont::HelveticaBold,
                );

                let rule_y = title_baseline - TITLE_GAP / 3.0;
                layer.set_outline_color(Color::Rgb(BLACK));
                layer.set_outline_thickness(0.5);
                layer.add_line(
                    Mm(SHEET_MARGIN),
                    Mm(rule_y),
                    Mm(self.settings.page_width - SHEET_MARGIN),
                    Mm(rule_y),
                );

                let first_baseline = title_baseline - TITLE_GAP;
                for (i, entry) in chunk.iter().enumerate() {
                    let x = SHEET_MARGIN + (i / rows) as f32 * COLUMN_WIDTH;
                    let y = first_baseline - (i % rows) as f32 * ENTRY_HEIGHT;
                    self.render_entry(&mut layer, entry, x, y);
                }
                layer
            })
            .collect()
    }

    fn render_entry(&self, layer: &mut LayerBuilder, entry: &CallEntry, x: f32, y: f32) {
        layer.set_fill_color(Color::Rgb(BLACK));
        layer.use_text_builtin(
            format!("{:>3}.  {}", entry.position, entry.call),
            ENTRY_FONT_SIZE,
            Mm(x),
            Mm(y),
            BuiltinFont::Helvetica,
        );

        if !entry.completes.is_empty() {
            let cards: Vec<String> = entry.completes.iter().map(|id| id.to_string()).collect();
            layer.set_fill_color(Color::Rgb(GRAY));
            layer.use_text_builtin(
                format!("bingo: card {}", cards.join(", ")),
                NOTE_FONT_SIZE,
                Mm(x + 20.0),
                Mm(y),
                BuiltinFont::HelveticaOblique,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BingoCard, Cell};

    fn one_card() -> Vec<Participant> {
        let n = Cell::Number;
        let card = BingoCard::from_rows(
            1,
            vec![
                vec![n(1), n(16), n(31), n(46), n(61)],
                vec![n(2), n(17), n(32), n(47), n(62)],
                vec![n(3), n(18), Cell::Free, n(48), n(63)],
                vec![n(4), n(19), n(34), n(49), n(64)],
                vec![n(5), n(20), n(35), n(50), n(65)],
            ],
        )
        .unwrap();
        vec![Participant::new(1, None, card)]
    }

    #[test]
    fn test_entries_carry_letters_and_wins() {
        let plan = DrawPlan {
            numbers: vec![70, 3, 18, 48, 63, 9],
            guaranteed: vec![1],
        };
        let entries = call_entries(&plan, &one_card(), &CardLayout::default());

        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].call, "O-70");
        assert_eq!(entries[1].call, "B-3");
        assert!(entries[3].completes.is_empty());
        assert_eq!(entries[4].completes, vec![1]);
        assert_eq!(entries[5].position, 6);
    }

    #[test]
    fn test_unbanded_entries_are_plain_numbers() {
        let plan = DrawPlan {
            numbers: vec![42],
            guaranteed: vec![],
        };
        let layout = CardLayout::default().unbanded();
        let entries = call_entries(&plan, &one_card(), &layout);
        assert_eq!(entries[0].call, "42");
    }

    #[test]
    fn test_long_sequences_span_pages() {
        let settings = Settings::default();
        let renderer = CallSheetRenderer::new(&settings);
        let per_page = renderer.entries_per_page();

        let entries: Vec<CallEntry> = (1..=per_page + 1)
            .map(|i| CallEntry {
                position: i,
                call: i.to_string(),
                completes: Vec::new(),
            })
            .collect();
        assert_eq!(renderer.render(&entries).len(), 2);
    }
}
