//! Operation collector for printpdf pages
//!
//! `LayerBuilder` offers a small drawing API (text, rectangles, lines) and
//! records the resulting `Op`s for a `PdfPage`.

use printpdf::{
    BuiltinFont, Color, LinePoint, Mm, Op, PaintMode, PdfFontHandle, Point, Polygon, PolygonRing,
    Pt, TextItem, WindingOrder,
};

/// A builder that collects PDF operations for one page
#[derive(Default)]
pub struct LayerBuilder {
    ops: Vec<Op>,
}

impl LayerBuilder {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Get the collected operations
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    /// Get a reference to the operations (for inspection)
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.ops.push(Op::SetFillColor { col: color });
    }

    pub fn set_outline_color(&mut self, color: Color) {
        self.ops.push(Op::SetOutlineColor { col: color });
    }

    /// Set the outline thickness in points
    pub fn set_outline_thickness(&mut self, thickness: f32) {
        self.ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
    }

    /// Draw text with one of the PDF standard fonts, baseline at (x, y)
    pub fn use_text_builtin<S: Into<String>>(
        &mut self,
        text: S,
        font_size: f32,
        x: Mm,
        y: Mm,
        font: BuiltinFont,
    ) {
        let text_str = text.into();
        if text_str.is_empty() {
            return;
        }

        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor {
            pos: Point {
                x: x.into(),
                y: y.into(),
            },
        });
        self.ops.push(Op::SetFont {
            size: Pt(font_size),
            font: PdfFontHandle::Builtin(font),
        });
        self.ops.push(Op::ShowText {
            items: vec![TextItem::Text(text_str)],
        });
        self.ops.push(Op::EndTextSection);
    }

    /// Add a filled or stroked rectangle
    ///
    /// Takes lower-left x, y and upper-right x, y coordinates with a paint mode
    pub fn add_rect(&mut self, x1: Mm, y1: Mm, x2: Mm, y2: Mm, mode: PaintMode) {
        let corners = [(x1, y1), (x2, y1), (x2, y2), (x1, y2)];
        let points = corners
            .into_iter()
            .map(|(x, y)| LinePoint {
                p: Point {
                    x: x.into(),
                    y: y.into(),
                },
                bezier: false,
            })
            .collect();

        self.ops.push(Op::DrawPolygon {
            polygon: Polygon {
                rings: vec![PolygonRing { points }],
                mode,
                winding_order: WindingOrder::NonZero,
            },
        });
    }

    /// Draw a line from (x1, y1) to (x2, y2)
    pub fn add_line(&mut self, x1: Mm, y1: Mm, x2: Mm, y2: Mm) {
        let points = vec![
            LinePoint {
                p: Point {
                    x: x1.into(),
                    y: y1.into(),
                },
                bezier: false,
            },
            LinePoint {
                p: Point {
                    x: x2.into(),
                    y: y2.into(),
                },
                bezier: false,
            },
        ];

        self.ops.push(Op::DrawPolygon {
            polygon: Polygon {
                rings: vec![PolygonRing { points }],
                mode: PaintMode::Stroke,
                winding_order: WindingOrder::NonZero,
            },
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_skipped() {
        let mut layer = LayerBuilder::new();
        layer.use_text_builtin("", 10.0, Mm(0.0), Mm(0.0), BuiltinFont::Helvetica);
        assert!(layer.ops().is_empty());
    }

    #[test]
    fn test_text_is_one_section() {
        let mut layer = LayerBuilder::new();
        layer.use_text_builtin("42", 10.0, Mm(5.0), Mm(5.0), BuiltinFont::Helvetica);
        let ops = layer.into_ops();
        assert_eq!(ops.len(), 5);
        assert!(matches!(ops.first(), Some(Op::StartTextSection)));
        assert!(matches!(ops.last(), Some(Op::EndTextSection)));
    }

    #[test]
    fn test_shapes_record_polygons() {
        let mut layer = LayerBuilder::new();
        layer.add_rect(Mm(0.0), Mm(0.0), Mm(10.0), Mm(10.0), PaintMode::Fill);
        layer.add_line(Mm(0.0), Mm(0.0), Mm(10.0), Mm(0.0));
        assert_eq!(layer.ops().len(), 2);
        assert!(layer
            .ops()
            .iter()
            .all(|op| matches!(op, Op::DrawPolygon { .. })));
    }
}
