//! Composed document model.
//!
//! A `ComposedDocument` is built only by the report composer. Callers can
//! read it but never construct or modify it.

use serde::Serialize;

/// Which part of the report a fragment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Title and client details.
    Title,
    /// Operation summary table.
    Summary,
    /// Key indicators table.
    Indicators,
    /// Amortization schedule table.
    Amortization,
    /// Page counter and disclaimer.
    Footer,
}

/// Font weight of a text fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontWeight {
    /// Regular weight.
    Regular,
    /// Bold weight.
    Bold,
}

/// A single line of text placed at an absolute position (y is the baseline).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextFragment {
    /// Owning section.
    pub section: SectionKind,
    /// Left edge in millimetres.
    pub x: u32,
    /// Baseline in millimetres from the top edge.
    pub y: u32,
    /// Font size in points.
    pub font_size: u8,
    /// Font weight.
    pub weight: FontWeight,
    /// Text content.
    pub text: String,
}

/// Table column definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Header text.
    pub title: String,
    /// Width in millimetres.
    pub width: u32,
}

/// A data row inside a table region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Top of the row in millimetres.
    pub y: u32,
    /// Formatted cell text, one per column.
    pub cells: Vec<String>,
}

/// The part of a table that lands on one page: a header row followed by data rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRegion {
    /// Owning section.
    pub section: SectionKind,
    /// Left edge in millimetres.
    pub x: u32,
    /// Top of the header row in millimetres.
    pub y: u32,
    /// Height of every row, header included.
    pub row_height: u32,
    /// Font size in points.
    pub font_size: u8,
    /// Columns, repeated as the header row.
    pub columns: Vec<Column>,
    /// Data rows in display order.
    pub rows: Vec<TableRow>,
}

impl TableRegion {
    /// Bottom edge of the last row (or of the header when there are no rows).
    #[must_use]
    pub fn bottom(&self) -> u32 {
        self.rows
            .last()
            .map_or(self.y, |row| row.y)
            + self.row_height
    }

    /// Total width of all columns.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.columns.iter().map(|c| c.width).sum()
    }

    /// Header cell texts.
    pub fn header(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.title.as_str())
    }
}

/// Something drawn on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fragment {
    /// A line of text.
    Text(TextFragment),
    /// A table region.
    Table(TableRegion),
}

impl Fragment {
    /// Section the fragment belongs to.
    #[must_use]
    pub fn section(&self) -> SectionKind {
        match self {
            Self::Text(text) => text.section,
            Self::Table(table) => table.section,
        }
    }
}

/// One printed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    number: usize,
    fragments: Vec<Fragment>,
    cursor: u32,
}

impl Page {
    /// 1-based page number.
    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    /// Fragments in drawing order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Lowest y written by the flowing sections on this page.
    #[must_use]
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    /// Table regions on this page.
    pub fn tables(&self) -> impl Iterator<Item = &TableRegion> {
        self.fragments.iter().filter_map(|f| match f {
            Fragment::Table(table) => Some(table),
            Fragment::Text(_) => None,
        })
    }

    /// Text lines on this page.
    pub fn texts(&self) -> impl Iterator<Item = &TextFragment> {
        self.fragments.iter().filter_map(|f| match f {
            Fragment::Text(text) => Some(text),
            Fragment::Table(_) => None,
        })
    }
}

/// A fully laid-out report, ready for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedDocument {
    title: String,
    pages: Vec<Page>,
}

impl ComposedDocument {
    /// Report title in the locale it was composed for.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Pages in order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All table regions of a section, in page order.
    pub fn tables(&self, section: SectionKind) -> impl Iterator<Item = &TableRegion> {
        self.pages
            .iter()
            .flat_map(Page::tables)
            .filter(move |t| t.section == section)
    }

    /// All text lines of a section, in page order.
    pub fn texts(&self, section: SectionKind) -> impl Iterator<Item = &TextFragment> {
        self.pages
            .iter()
            .flat_map(Page::texts)
            .filter(move |t| t.section == section)
    }

    /// Data rows of a section across every page, as cell texts.
    #[must_use]
    pub fn table_body(&self, section: SectionKind) -> Vec<Vec<String>> {
        self.tables(section)
            .flat_map(|t| t.rows.iter().map(|row| row.cells.clone()))
            .collect()
    }
}

/// Accumulates pages while sections render.
#[derive(Debug)]
pub(crate) struct DocumentBuilder {
    pages: Vec<Page>,
}

impl DocumentBuilder {
    /// Starts with page 1 and the cursor at `top_margin`.
    pub(crate) fn new(top_margin: u32) -> Self {
        Self {
            pages: vec![Page {
                number: 1,
                fragments: Vec::new(),
                cursor: top_margin,
            }],
        }
    }

    /// Index of the page being written.
    pub(crate) fn current_page(&self) -> usize {
        self.pages.len() - 1
    }

    /// Appends a page and returns its index.
    pub(crate) fn new_page(&mut self, top_margin: u32) -> usize {
        self.pages.push(Page {
            number: self.pages.len() + 1,
            fragments: Vec::new(),
            cursor: top_margin,
        });
        self.current_page()
    }

    /// Places a fragment on the current page.
    pub(crate) fn push(&mut self, fragment: Fragment) {
        let last = self.pages.len() - 1;
        self.pages[last].fragments.push(fragment);
    }

    /// Records how far the flowing content reached on the current page.
    pub(crate) fn set_cursor(&mut self, y: u32) {
        let last = self.pages.len() - 1;
        self.pages[last].cursor = y;
    }

    pub(crate) fn finish(self, title: impl Into<String>) -> ComposedDocument {
        ComposedDocument {
            title: title.into(),
            pages: self.pages,
        }
    }
}

impl ComposedDocument {
    /// Places a fragment on an existing page. Used for stamps that run after layout.
    pub(crate) fn stamp(&mut self, page_index: usize, fragment: Fragment) {
        if let Some(page) = self.pages.get_mut(page_index) {
            page.fragments.push(fragment);
        }
    }
}
