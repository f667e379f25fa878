//! PDF output for composed documents.
//!
//! The composed model measures from the top edge; PDF measures from the bottom,
//! so every y is flipped against the page height before drawing.

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rect,
    Rgb,
};

use super::error::ExportError;
use crate::reports::{
    ComposedDocument, FontWeight, Fragment, PageLayout, TableRegion, TextFragment,
};

/// Header fill, RGB(79, 70, 229).
const HEADER_FILL: (f32, f32, f32) = (0.309_804, 0.274_51, 0.898_039);
/// Grid line grey, RGB(200, 200, 200).
const GRID: (f32, f32, f32) = (0.784_314, 0.784_314, 0.784_314);
const GRID_THICKNESS: f32 = 0.1;

/// Horizontal padding between a cell edge and its text.
const CELL_PADDING: u32 = 1;
/// Distance from the bottom of a row to the text baseline.
const CELL_BASELINE: u32 = 2;

const LAYER_NAME: &str = "Layer 1";

/// Writes composed documents as PDF bytes.
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    page_width: u32,
    page_height: u32,
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

impl PdfRenderer {
    /// Renderer for pages of the given geometry.
    #[must_use]
    pub fn new(layout: &PageLayout) -> Self {
        Self {
            page_width: layout.page_width,
            page_height: layout.page_height,
        }
    }

    /// Draws every page and returns the serialized PDF, titled after the document.
    ///
    /// # Errors
    ///
    /// Returns `Render` if the PDF writer fails.
    pub fn render(&self, document: &ComposedDocument) -> Result<Vec<u8>, ExportError> {
        let (pdf, first_page, first_layer) = PdfDocument::new(
            document.title(),
            mm(self.page_width),
            mm(self.page_height),
            LAYER_NAME,
        );
        let fonts = Fonts {
            regular: pdf
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| ExportError::render(e.to_string()))?,
            bold: pdf
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| ExportError::render(e.to_string()))?,
        };

        for (index, page) in document.pages().iter().enumerate() {
            let layer = if index == 0 {
                pdf.get_page(first_page).get_layer(first_layer)
            } else {
                let (page_index, layer_index) =
                    pdf.add_page(mm(self.page_width), mm(self.page_height), LAYER_NAME);
                pdf.get_page(page_index).get_layer(layer_index)
            };

            for fragment in page.fragments() {
                match fragment {
                    Fragment::Text(text) => self.draw_text(&layer, &fonts, text),
                    Fragment::Table(table) => self.draw_table(&layer, &fonts, table),
                }
            }
        }

        pdf.save_to_bytes()
            .map_err(|e| ExportError::render(e.to_string()))
    }

    fn draw_text(&self, layer: &PdfLayerReference, fonts: &Fonts, text: &TextFragment) {
        layer.set_fill_color(rgb((0.0, 0.0, 0.0)));
        layer.use_text(
            text.text.as_str(),
            f32::from(text.font_size),
            mm(text.x),
            self.flip(text.y),
            fonts.get(text.weight),
        );
    }

    fn draw_table(&self, layer: &PdfLayerReference, fonts: &Fonts, table: &TableRegion) {
        let width = table.width();
        let size = f32::from(table.font_size);
        let baseline = table.row_height.saturating_sub(CELL_BASELINE);

        // Header band.
        layer.set_fill_color(rgb(HEADER_FILL));
        layer.add_rect(
            Rect::new(
                mm(table.x),
                self.flip(table.y + table.row_height),
                mm(table.x + width),
                self.flip(table.y),
            )
            .with_mode(PaintMode::Fill),
        );

        layer.set_fill_color(rgb((1.0, 1.0, 1.0)));
        let mut x = table.x;
        for column in &table.columns {
            layer.use_text(
                column.title.as_str(),
                size,
                mm(x + CELL_PADDING),
                self.flip(table.y + baseline),
                &fonts.bold,
            );
            x += column.width;
        }

        layer.set_fill_color(rgb((0.0, 0.0, 0.0)));
        for row in &table.rows {
            let mut x = table.x;
            for (cell, column) in row.cells.iter().zip(&table.columns) {
                layer.use_text(
                    cell.as_str(),
                    size,
                    mm(x + CELL_PADDING),
                    self.flip(row.y + baseline),
                    &fonts.regular,
                );
                x += column.width;
            }
        }

        self.draw_grid(layer, table);
    }

    fn draw_grid(&self, layer: &PdfLayerReference, table: &TableRegion) {
        layer.set_outline_color(rgb(GRID));
        layer.set_outline_thickness(GRID_THICKNESS);

        let left = table.x;
        let right = table.x + table.width();
        let top = table.y;
        let bottom = table.bottom();

        let mut y = top;
        while y <= bottom {
            layer.add_line(self.segment((left, y), (right, y)));
            y += table.row_height;
        }

        let mut x = left;
        layer.add_line(self.segment((x, top), (x, bottom)));
        for column in &table.columns {
            x += column.width;
            layer.add_line(self.segment((x, top), (x, bottom)));
        }
    }

    fn segment(&self, from: (u32, u32), to: (u32, u32)) -> Line {
        Line {
            points: vec![
                (Point::new(mm(from.0), self.flip(from.1)), false),
                (Point::new(mm(to.0), self.flip(to.1)), false),
            ],
            is_closed: false,
        }
    }

    fn flip(&self, y_from_top: u32) -> Mm {
        mm(self.page_height.saturating_sub(y_from_top))
    }
}

#[allow(clippy::cast_precision_loss)]
fn mm(value: u32) -> Mm {
    // Page coordinates stay far below f32's exact integer range.
    Mm(value as f32)
}

fn rgb((r, g, b): (f32, f32, f32)) -> Color {
    Color::Rgb(Rgb::new(r, g, b, None))
}
