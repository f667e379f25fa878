//! Section renderers.
//!
//! Each renderer receives the write cursor, places its fragments and returns
//! where the next section may start. Tables page-break on their own and repeat
//! their header on every continuation page.

use chrono::NaiveDate;

use super::document::{
    Column, ComposedDocument, DocumentBuilder, FontWeight, Fragment, SectionKind, TableRegion,
    TableRow, TextFragment,
};
use super::error::CompositionError;
use super::format::CellFormatter;
use super::labels::ReportLabels;
use super::layout::{Cursor, PageLayout};
use crate::simulation::SimulationResult;

pub(crate) const TITLE_FONT_SIZE: u8 = 20;
pub(crate) const DETAIL_FONT_SIZE: u8 = 12;
pub(crate) const HEADING_FONT_SIZE: u8 = 16;
pub(crate) const COMPACT_FONT_SIZE: u8 = 10;
pub(crate) const AMORTIZATION_FONT_SIZE: u8 = 8;
pub(crate) const FOOTER_FONT_SIZE: u8 = 8;

/// Width of each column of the two-column summary and indicator tables.
const COMPACT_COLUMN_WIDTH: u32 = 90;

/// Everything a renderer reads. Renderers never mutate the simulation.
pub(crate) struct RenderContext<'a> {
    pub layout: &'a PageLayout,
    pub labels: &'a ReportLabels,
    pub formatter: CellFormatter<'a>,
    pub result: &'a SimulationResult,
    pub generated_on: NaiveDate,
}

pub(crate) trait SectionRenderer {
    fn render(
        &self,
        builder: &mut DocumentBuilder,
        cursor: Cursor,
        ctx: &RenderContext<'_>,
    ) -> Result<Cursor, CompositionError>;
}

/// Title and detail lines at fixed positions on page 1.
pub(crate) struct TitleBlock;

impl SectionRenderer for TitleBlock {
    fn render(
        &self,
        builder: &mut DocumentBuilder,
        cursor: Cursor,
        ctx: &RenderContext<'_>,
    ) -> Result<Cursor, CompositionError> {
        let layout = ctx.layout;
        let labels = ctx.labels;

        builder.push(text(
            SectionKind::Title,
            layout.text_x,
            layout.title_y,
            TITLE_FONT_SIZE,
            FontWeight::Bold,
            labels.title,
        ));

        let date = ctx.generated_on.format(labels.date_format).to_string();
        let details = [
            labels.detail(labels.client, ctx.result.client_name()),
            labels.detail(labels.property, ctx.result.property_name()),
            labels.detail(labels.date, Some(&date)),
        ];
        let mut y = layout.details_y;
        for line in details {
            builder.push(text(
                SectionKind::Title,
                layout.text_x,
                y,
                DETAIL_FONT_SIZE,
                FontWeight::Regular,
                line,
            ));
            y += layout.details_spacing;
        }

        Ok(cursor)
    }
}

/// Operation summary, anchored at a fixed position below the title.
pub(crate) struct SummaryTable;

impl SectionRenderer for SummaryTable {
    fn render(
        &self,
        builder: &mut DocumentBuilder,
        _cursor: Cursor,
        ctx: &RenderContext<'_>,
    ) -> Result<Cursor, CompositionError> {
        let layout = ctx.layout;
        builder.push(heading(
            SectionKind::Summary,
            layout,
            layout.summary_heading_y,
            ctx.labels.summary_heading,
        ));

        let rows = ctx.formatter.summary_rows(ctx.result.summary.as_ref());
        Ok(render_table(
            builder,
            layout,
            TableSpec {
                section: SectionKind::Summary,
                columns: compact_columns(ctx.labels.summary_columns),
                row_height: layout.compact_row_height,
                font_size: COMPACT_FONT_SIZE,
            },
            layout.summary_table_y,
            rows,
        ))
    }
}

/// Key indicators, flowing below the summary.
pub(crate) struct IndicatorsTable;

impl SectionRenderer for IndicatorsTable {
    fn render(
        &self,
        builder: &mut DocumentBuilder,
        cursor: Cursor,
        ctx: &RenderContext<'_>,
    ) -> Result<Cursor, CompositionError> {
        let layout = ctx.layout;
        let rows = ctx
            .formatter
            .indicator_rows(ctx.result.key_indicators.as_ref());

        // The indicators are short enough to keep whole on one page.
        let heading_y = ensure_room(
            builder,
            layout,
            cursor.y + layout.section_gap,
            layout.compact_row_height,
            u32::try_from(rows.len()).unwrap_or(u32::MAX),
        );
        builder.push(heading(
            SectionKind::Indicators,
            layout,
            heading_y,
            ctx.labels.indicators_heading,
        ));

        Ok(render_table(
            builder,
            layout,
            TableSpec {
                section: SectionKind::Indicators,
                columns: compact_columns(ctx.labels.indicators_columns),
                row_height: layout.compact_row_height,
                font_size: COMPACT_FONT_SIZE,
            },
            heading_y + layout.heading_gap,
            rows,
        ))
    }
}

/// Page counter and disclaimer on every page, applied once all pages exist.
pub(crate) struct FooterStamp;

impl FooterStamp {
    pub(crate) fn apply(&self, document: &mut ComposedDocument, ctx: &RenderContext<'_>) {
        let layout = ctx.layout;
        let total = document.page_count();
        let counter_y = layout.page_height - layout.footer_counter_offset;
        let disclaimer_y = layout.page_height - layout.footer_disclaimer_offset;

        for index in 0..total {
            document.stamp(
                index,
                text(
                    SectionKind::Footer,
                    layout.text_x,
                    counter_y,
                    FOOTER_FONT_SIZE,
                    FontWeight::Regular,
                    ctx.labels.page_counter(index + 1, total),
                ),
            );
            document.stamp(
                index,
                text(
                    SectionKind::Footer,
                    layout.text_x,
                    disclaimer_y,
                    FOOTER_FONT_SIZE,
                    FontWeight::Regular,
                    ctx.labels.disclaimer,
                ),
            );
        }
    }
}

/// Shape of a table, shared by every region it spans.
pub(crate) struct TableSpec {
    pub section: SectionKind,
    pub columns: Vec<Column>,
    pub row_height: u32,
    pub font_size: u8,
}

/// Returns the heading baseline, moving to a new page when the heading, the
/// table header and the first `keep_rows` rows would not fit above the
/// printable boundary.
///
/// A block too tall for a fresh page keeps only its first row with the heading.
pub(crate) fn ensure_room(
    builder: &mut DocumentBuilder,
    layout: &PageLayout,
    heading_y: u32,
    row_height: u32,
    keep_rows: u32,
) -> u32 {
    let fits = |y: u32, rows: u32| {
        let block = layout.heading_gap + rows.saturating_add(1).saturating_mul(row_height);
        y.saturating_add(block) <= layout.printable_bottom()
    };
    let keep_rows = if fits(layout.top_margin, keep_rows) {
        keep_rows.max(1)
    } else {
        1
    };

    if fits(heading_y, keep_rows) {
        return heading_y;
    }
    builder.new_page(layout.top_margin);
    layout.top_margin
}

/// Lays rows out from `top` downwards, starting a new page with a fresh header
/// whenever the next row would cross the printable boundary.
///
/// Returns the cursor just below the last row.
pub(crate) fn render_table(
    builder: &mut DocumentBuilder,
    layout: &PageLayout,
    spec: TableSpec,
    top: u32,
    rows: impl IntoIterator<Item = Vec<String>>,
) -> Cursor {
    let bottom = layout.printable_bottom();
    let row_height = spec.row_height;
    let region_at = |y: u32| TableRegion {
        section: spec.section,
        x: layout.table_x(spec.columns.iter().map(|c| c.width).sum()),
        y,
        row_height,
        font_size: spec.font_size,
        columns: spec.columns.clone(),
        rows: Vec::new(),
    };

    let mut region = region_at(top);
    let mut y = top + row_height;

    for cells in rows {
        if y + row_height > bottom {
            let full = std::mem::replace(&mut region, region_at(layout.top_margin));
            builder.set_cursor(full.bottom());
            builder.push(Fragment::Table(full));
            builder.new_page(layout.top_margin);
            y = layout.top_margin + row_height;
        }
        region.rows.push(TableRow { y, cells });
        y += row_height;
    }

    let end = region.bottom();
    builder.push(Fragment::Table(region));
    builder.set_cursor(end);
    Cursor::new(builder.current_page(), end)
}

pub(crate) fn heading(section: SectionKind, layout: &PageLayout, y: u32, title: &str) -> Fragment {
    text(
        section,
        layout.text_x,
        y,
        HEADING_FONT_SIZE,
        FontWeight::Bold,
        title,
    )
}

fn text(
    section: SectionKind,
    x: u32,
    y: u32,
    font_size: u8,
    weight: FontWeight,
    content: impl Into<String>,
) -> Fragment {
    Fragment::Text(TextFragment {
        section,
        x,
        y,
        font_size,
        weight,
        text: content.into(),
    })
}

fn compact_columns(titles: [&str; 2]) -> Vec<Column> {
    titles
        .into_iter()
        .map(|title| Column {
            title: title.to_string(),
            width: COMPACT_COLUMN_WIDTH,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<Vec<String>> {
        (1..=n).map(|i| vec![i.to_string()]).collect()
    }

    fn spec() -> TableSpec {
        TableSpec {
            section: SectionKind::Amortization,
            columns: vec![Column {
                title: "N".to_string(),
                width: 20,
            }],
            row_height: 6,
            font_size: 8,
        }
    }

    #[test]
    fn test_table_fits_on_one_page() {
        let layout = PageLayout::default();
        let mut builder = DocumentBuilder::new(layout.top_margin);

        let end = render_table(&mut builder, &layout, spec(), 100, rows(3));

        assert_eq!(end, Cursor::new(0, 100 + 4 * 6));
        let doc = builder.finish("");
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.table_body(SectionKind::Amortization).len(), 3);
    }

    #[test]
    fn test_table_breaks_and_repeats_header() {
        let layout = PageLayout::default();
        let mut builder = DocumentBuilder::new(layout.top_margin);

        // Header at 160, rows at 166, 172, 178; the fourth row starts page 2.
        let end = render_table(&mut builder, &layout, spec(), 160, rows(5));

        let doc = builder.finish("");
        assert_eq!(doc.page_count(), 2);
        let regions: Vec<_> = doc.tables(SectionKind::Amortization).collect();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].rows.len(), 3);
        assert_eq!(regions[1].y, layout.top_margin);
        assert_eq!(regions[1].rows[0].y, layout.top_margin + 6);
        assert_eq!(regions[1].header().collect::<Vec<_>>(), vec!["N"]);
        assert_eq!(end, Cursor::new(1, layout.top_margin + 3 * 6));
    }

    #[test]
    fn test_ensure_room_moves_heading_to_new_page() {
        let layout = PageLayout::default();
        let mut builder = DocumentBuilder::new(layout.top_margin);

        // 170 + 10 + 2 * 7 = 194 > 185
        let y = ensure_room(&mut builder, &layout, 170, 7, 1);
        assert_eq!(y, layout.top_margin);
        assert_eq!(builder.current_page(), 1);

        // 150 + 10 + 2 * 7 = 174 <= 185
        let y = ensure_room(&mut builder, &layout, 150, 7, 1);
        assert_eq!(y, 150);
        assert_eq!(builder.current_page(), 1);
    }

    #[test]
    fn test_ensure_room_keeps_short_block_whole() {
        let layout = PageLayout::default();
        let mut builder = DocumentBuilder::new(layout.top_margin);

        // 155 + 10 + 7 * 7 = 214 > 185, although one row would fit.
        let y = ensure_room(&mut builder, &layout, 155, 7, 6);
        assert_eq!(y, layout.top_margin);
        assert_eq!(builder.current_page(), 1);

        // 100 + 10 + 7 * 7 = 159 <= 185
        let y = ensure_room(&mut builder, &layout, 100, 7, 6);
        assert_eq!(y, 100);
        assert_eq!(builder.current_page(), 1);
    }

    #[test]
    fn test_ensure_room_block_taller_than_page_keeps_first_row() {
        let layout = PageLayout::default();
        let mut builder = DocumentBuilder::new(layout.top_margin);

        // 100 rows never fit; only heading, header and one row must.
        let y = ensure_room(&mut builder, &layout, 150, 6, 100);
        assert_eq!(y, 150);
        assert_eq!(builder.current_page(), 0);
    }
}
